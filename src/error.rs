//! Error taxonomy for project initialization
//!
//! Argument validation errors are fatal and abort the command before any
//! filesystem mutation. Copy-time I/O problems are not represented here;
//! they surface as warnings threaded through `scaffold::CopyOutcome`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("Not enough arguments (missing: \"namespace\").")]
    EmptyNamespace,

    #[error("Cannot obtain a valid initial namespace for the project.")]
    InvalidNamespace,

    #[error("Cannot obtain a valid initial namespace path for the project.")]
    EmptyNamespacePath,

    #[error("Invalid namespace path, root path with name \"ext\" is reserved.")]
    ReservedPath,

    #[error("Unknown backend \"{0}\". Available backends: ZendEngine2, ZendEngine3.")]
    UnknownBackend(String),

    #[error("Kernel templates for backend \"{0}\" were not found. Is extforge installed correctly?")]
    KernelTemplatesMissing(String),
}
