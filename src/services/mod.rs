// export modules
pub mod gateway;

pub use gateway::*;
