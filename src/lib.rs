pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod namespace;
pub mod scaffold;

// Re-export commonly used types
pub use backend::Backend;
pub use config::{ConfigStore, JsonConfig};
pub use error::InitError;
pub use scaffold::CopyOutcome;
