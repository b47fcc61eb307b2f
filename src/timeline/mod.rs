pub mod config;
pub mod progress;
pub mod window;
