pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod telemetry;
