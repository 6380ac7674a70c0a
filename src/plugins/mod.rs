pub mod core;
pub mod debug_ui;
