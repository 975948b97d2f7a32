pub mod cli;
pub mod config;
pub mod constants;
pub mod datasource;
pub mod engine;
pub mod error;
pub mod model;
pub mod processor;
pub mod report;
pub mod tracing;
pub mod utils;

pub use engine::*;
pub use error::Result;
