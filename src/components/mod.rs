pub mod icon;
pub mod layout;
pub mod sidebar;
