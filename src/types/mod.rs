// export modules
pub mod api;
pub mod config;
pub mod gateway;

pub use api::*;
pub use config::*;
pub use gateway::*;
