pub mod board;
pub mod calendar;
pub mod dashboard;
pub mod data_grid;
pub mod not_found;
