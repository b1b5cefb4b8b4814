//! Backend selection and kernel-template resolution
//!
//! A backend supplies the kernel support-file tree mirrored into new
//! projects. Only resolution lives here; the template content itself is
//! shipped with the installation, not generated by this crate.

use std::path::{Path, PathBuf};

use crate::error::InitError;

/// Backends with shipped kernel templates.
pub const KNOWN_BACKENDS: &[&str] = &["ZendEngine2", "ZendEngine3"];

/// Backend used when the CLI is given none.
pub const DEFAULT_BACKEND: &str = "ZendEngine3";

/// A resolved backend: a known name plus the templates root it lives under.
#[derive(Debug, Clone)]
pub struct Backend {
    name: String,
    templates_root: PathBuf,
}

impl Backend {
    /// Resolve a backend by name against the installed templates.
    ///
    /// # Errors
    ///
    /// - [`InitError::UnknownBackend`] for names not in [`KNOWN_BACKENDS`].
    /// - [`InitError::KernelTemplatesMissing`] when no installation carries
    ///   templates for the backend.
    pub fn resolve(name: &str) -> Result<Self, InitError> {
        if !KNOWN_BACKENDS.contains(&name) {
            return Err(InitError::UnknownBackend(name.to_string()));
        }

        match find_templates_root(name) {
            Some(templates_root) => Ok(Self {
                name: name.to_string(),
                templates_root,
            }),
            None => Err(InitError::KernelTemplatesMissing(name.to_string())),
        }
    }

    /// Build a backend against an explicit templates root, bypassing the
    /// installation probe. Used by tests and embedding hosts.
    pub fn with_templates_root(name: &str, templates_root: impl AsRef<Path>) -> Self {
        Self {
            name: name.to_string(),
            templates_root: templates_root.as_ref().to_path_buf(),
        }
    }

    /// Source tree mirrored into `ext/kernel` on init.
    pub fn kernel_path(&self) -> PathBuf {
        self.templates_root.join(&self.name).join("kernel")
    }
}

/// Find the installed templates root using multiple strategies.
fn find_templates_root(name: &str) -> Option<PathBuf> {
    // Strategy 1: development environment (cargo run)
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let root = PathBuf::from(manifest_dir).join("templates");
        if root.join(name).join("kernel").is_dir() {
            return Some(root);
        }
    }

    // Strategy 2: relative to the installed executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(install_root) = exe_path.parent().and_then(|p| p.parent()) {
            let root = install_root.join("share").join("extforge").join("templates");
            if root.join(name).join("kernel").is_dir() {
                return Some(root);
            }
        }
    }

    // Strategy 3: per-user installation in HOME
    if let Ok(home) = std::env::var("HOME") {
        let root = PathBuf::from(home).join(".extforge").join("templates");
        if root.join(name).join("kernel").is_dir() {
            return Some(root);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_rejects_unknown_backend() {
        let err = Backend::resolve("FrankenEngine").unwrap_err();
        assert_eq!(err, InitError::UnknownBackend("FrankenEngine".to_string()));
    }

    #[test]
    fn kernel_path_is_rooted_at_backend_name() {
        let backend = Backend::with_templates_root(DEFAULT_BACKEND, "/opt/templates");
        assert_eq!(
            backend.kernel_path(),
            PathBuf::from("/opt/templates/ZendEngine3/kernel")
        );
    }

    #[test]
    fn explicit_root_points_at_real_templates() {
        let tmp = TempDir::new().unwrap();
        let kernel = tmp.path().join(DEFAULT_BACKEND).join("kernel");
        fs::create_dir_all(&kernel).unwrap();
        fs::write(kernel.join("memory.c"), "stub").unwrap();

        let backend = Backend::with_templates_root(DEFAULT_BACKEND, tmp.path());
        assert!(backend.kernel_path().join("memory.c").is_file());
    }
}
