//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and the loaded project configuration.

pub mod config;
pub mod discover;
pub mod download;
pub mod upload;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use discover::execute as discover;
pub use download::execute as download;
pub use download::execute_path as download_path;
pub use upload::execute as upload;
