//! Internal implementation for init command

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;

use crate::config::ConfigStore;
use crate::namespace;
use crate::scaffold::{self, binary_copy};

/// Fixed destination for the mirrored kernel tree, regardless of the
/// namespace path.
const KERNEL_DIR: &str = "ext/kernel";

/// Inputs for one init run.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Raw namespace argument.
    pub namespace: String,
    /// Raw namespace-path argument, if given.
    pub namespace_path: Option<String>,
    /// Source tree to mirror into `ext/kernel`.
    pub kernel_src: PathBuf,
    /// Directory the project is created in.
    pub project_root: PathBuf,
}

/// Main execution logic for init command.
///
/// `is_name_reserved` answers whether the namespace collides with a name
/// already claimed in the host environment; a collision is a warning, not
/// a failure. All validation happens before any filesystem mutation.
pub fn run(
    opts: &InitOptions,
    store: &mut dyn ConfigStore,
    is_name_reserved: &dyn Fn(&str) -> bool,
) -> Result<()> {
    // === STEP 1: VALIDATE ARGUMENTS (BEFORE ANY FILESYSTEM MUTATION) ===
    let ns = namespace::sanitize(&opts.namespace)?;

    let mut ns_path = namespace::validate_path(opts.namespace_path.as_deref())?;
    if ns_path.is_none() {
        // One fallback pass only; an absent fallback stays absent.
        ns_path = namespace::validate_path(ns_path.as_deref())?;
    }

    let name = namespace::extension_name(&ns);
    let ns_path = ns_path.unwrap_or_else(|| name.clone());

    // Tell the user the name could be claimed by another extension
    if is_name_reserved(&ns) {
        eprintln!(
            "{} This extension can have conflicts with an existing loaded extension",
            "⚠️".yellow()
        );
    }

    // === STEP 2: RECORD DERIVED CONFIGURATION ===
    store.set("namespace-paths", json!({ ns.clone(): ns_path.clone() }));
    store.set("name", json!(name));

    // === STEP 3: CREATE PROJECT DIRECTORIES ===
    scaffold::ensure_dir(&opts.project_root.join(&ns_path))?;

    let kernel_dst = opts.project_root.join(KERNEL_DIR);
    scaffold::ensure_dir(&kernel_dst)?;

    // === STEP 4: MIRROR THE KERNEL TREE ===
    let outcome = scaffold::copy_tree(&opts.kernel_src, &kernel_dst, None, &binary_copy)?;

    for warning in &outcome.warnings {
        eprintln!("{} {warning}", "⚠️".yellow());
    }
    if !outcome.success {
        // Copy failures are reported but, by longstanding contract, do not
        // change the command's exit status.
        eprintln!(
            "{} Some kernel files could not be copied into {KERNEL_DIR}",
            "⚠️".yellow()
        );
    }

    println!("{} Initialized extension '{name}'", "✓".green());
    println!("  ✓ Created {ns_path}/");
    println!("  ✓ Created {KERNEL_DIR}/");

    Ok(())
}
