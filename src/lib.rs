pub mod types;
pub mod services;
pub mod handlers;
pub mod config;
pub mod cli;

pub use services::*;
pub use config::*;
