//! Initialize a new extension project
//!
//! Validates the namespace and destination path, records the derived
//! configuration, and mirrors the backend's kernel tree into the fixed
//! `ext/kernel` directory of the new project.
//!
//! # Example
//!
//! ```no_run
//! use extforge::commands::init;
//!
//! init::execute("MyApp\\Collections", None, "ZendEngine3")
//!     .expect("Failed to initialize project");
//! ```

mod internal;

use anyhow::Result;

pub use internal::InitOptions;

/// Execute the init command against the current working directory.
///
/// # Arguments
///
/// * `namespace` - Raw extension namespace (e.g. `MyApp\Collections`)
/// * `namespace_path` - Optional raw destination path for namespace sources
/// * `backend` - Backend whose kernel templates are mirrored
///
/// # Errors
///
/// Returns an error when the namespace or namespace path fails validation,
/// when the backend is unknown or has no installed templates, or when a
/// required directory cannot be created. Kernel files that fail to copy are
/// reported on stderr but do not fail the command.
pub fn execute(namespace: &str, namespace_path: Option<&str>, backend: &str) -> Result<()> {
    let backend = crate::backend::Backend::resolve(backend)?;
    let project_root = std::env::current_dir()?;

    let opts = InitOptions {
        namespace: namespace.to_string(),
        namespace_path: namespace_path.map(str::to_string),
        kernel_src: backend.kernel_path(),
        project_root: project_root.clone(),
    };

    let mut store = crate::config::JsonConfig::load(&project_root)?;
    internal::run(&opts, &mut store, &|_| false)?;
    store.save()
}

/// Execute the init sequence with explicit collaborators.
///
/// Embedding hosts (and tests) supply their own config store and a
/// predicate answering whether a namespace is already claimed in the host
/// environment.
pub fn run_with(
    opts: &InitOptions,
    store: &mut dyn crate::config::ConfigStore,
    is_name_reserved: &dyn Fn(&str) -> bool,
) -> Result<()> {
    internal::run(opts, store, is_name_reserved)
}
