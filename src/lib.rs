pub mod config;
pub mod console_interface;
pub mod core;
pub mod session;
