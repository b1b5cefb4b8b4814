//! Recursive kernel-tree copier
//!
//! Walks a backend-supplied source tree and mirrors it under a destination
//! directory. The walk is eager depth-first and exhaustive: unreadable
//! entries and failed file operations never stop traversal of siblings or
//! later directories. The aggregate result and the non-fatal warnings are
//! threaded explicitly through [`CopyOutcome`] so callers decide what to
//! report and what to ignore.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Directory names never mirrored into the destination, at any depth.
const EXCLUDED_DIRS: &[&str] = &[".libs"];

/// Recursion ceiling. Source trees are backend-shipped and shallow; anything
/// deeper than this is a filesystem loop or a packaging mistake.
const MAX_COPY_DEPTH: usize = 64;

/// Outcome of a tree copy.
///
/// `success` is the logical AND of every file operation attempted.
/// `warnings` records skipped entries (unreadable paths, depth overruns);
/// warnings do not count against `success`.
#[derive(Debug)]
pub struct CopyOutcome {
    pub success: bool,
    pub warnings: Vec<String>,
}

/// Copy every file under `src` to the mirrored location under `dst`.
///
/// Directories are always traversed and created (mode 0755, idempotent)
/// regardless of `pattern`; only file names are matched against it. Each
/// matched file is handed to `file_op`, whose boolean result feeds the
/// aggregate. The default operation is [`binary_copy`]; substituting a
/// different strategy (e.g. templated rendering) leaves the traversal
/// untouched.
///
/// # Errors
///
/// Only an unlistable `src` root is an error. Everything below it degrades
/// to warnings or a `false` aggregate.
pub fn copy_tree<F>(
    src: &Path,
    dst: &Path,
    pattern: Option<&Regex>,
    file_op: &F,
) -> Result<CopyOutcome>
where
    F: Fn(&Path, &Path) -> bool,
{
    let mut outcome = CopyOutcome {
        success: true,
        warnings: Vec::new(),
    };
    copy_dir(src, dst, pattern, file_op, 0, &mut outcome)?;
    Ok(outcome)
}

/// Default file operation: byte-for-byte copy.
pub fn binary_copy(src: &Path, dst: &Path) -> bool {
    fs::copy(src, dst).is_ok()
}

/// Create a directory and any missing parents with mode 0755.
///
/// Idempotent: an already-present directory is not an error.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new()
            .recursive(true)
            .mode(0o755)
            .create(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }
    #[cfg(not(unix))]
    {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }
}

fn copy_dir<F>(
    src: &Path,
    dst: &Path,
    pattern: Option<&Regex>,
    file_op: &F,
    depth: usize,
    outcome: &mut CopyOutcome,
) -> Result<()>
where
    F: Fn(&Path, &Path) -> bool,
{
    if depth > MAX_COPY_DEPTH {
        outcome.warnings.push(format!(
            "Skipping directory beyond depth {}: {}",
            MAX_COPY_DEPTH,
            src.display()
        ));
        return Ok(());
    }

    let entries = fs::read_dir(src)
        .with_context(|| format!("Failed to list source directory: {}", src.display()))?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                outcome
                    .warnings
                    .push(format!("Entry under {} is not readable: {err}", src.display()));
                continue;
            }
        };

        let path = entry.path();
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if path.is_dir() {
            if EXCLUDED_DIRS.contains(&name.as_ref()) {
                continue;
            }
            if fs::read_dir(&path).is_err() {
                outcome
                    .warnings
                    .push(format!("Directory is not readable: {}", path.display()));
                continue;
            }

            let child_dst = dst.join(&file_name);
            if !child_dst.is_dir() {
                // A destination that cannot be created (e.g. a file squatting
                // on the directory name) loses its subtree, not the walk.
                if let Err(err) = ensure_dir(&child_dst) {
                    outcome.warnings.push(format!("{err:#}"));
                    continue;
                }
            }
            copy_dir(&path, &child_dst, pattern, file_op, depth + 1, outcome)?;
        } else {
            if fs::File::open(&path).is_err() {
                outcome
                    .warnings
                    .push(format!("File is not readable: {}", path.display()));
                continue;
            }

            if pattern.map_or(true, |p| p.is_match(&name)) {
                let copied = file_op(&path, &dst.join(&file_name));
                outcome.success = outcome.success && copied;
            }
        }
    }

    Ok(())
}
