use crate::error::{Gff2ApolloError, Result};
use std::path::{Path, PathBuf};

/// Extension of the GFF2 files the GEP Gene Model Checker produces.
pub const INPUT_EXTENSION: &str = ".gff";

/// Returns true when a file name looks like a GFF2 input.
///
/// The name must end in `.gff` (case-insensitive) and must not already end in
/// the output extension, so converted files are never picked up again.
///
/// # Example
///
/// ```rust, ignore
/// use gff2apollo::detect::is_gff2_input;
///
/// assert!(is_gff2_input("gene1.GFF", ".gff3"));
/// assert!(!is_gff2_input("gene1.gff3", ".gff3"));
/// ```
pub fn is_gff2_input(name: &str, output_ext: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.ends_with(INPUT_EXTENSION) && !name.ends_with(&output_ext.to_ascii_lowercase())
}

/// Lists GFF2 inputs of a directory, sorted by file name.
///
/// Only regular files are returned; sub-directories are not descended into.
///
/// # Errors
///
/// Returns [`Gff2ApolloError::InputDir`] when `dir` is not a directory, or an
/// I/O error if it cannot be listed.
pub fn discover_inputs(dir: &Path, output_ext: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Gff2ApolloError::InputDir(dir.to_path_buf()));
    }

    let mut inputs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name();
        if name
            .to_str()
            .is_some_and(|name| is_gff2_input(name, output_ext))
        {
            inputs.push(entry.path());
        }
    }

    inputs.sort();
    Ok(inputs)
}

/// File name without its last extension, e.g. `gene1.gff` -> `gene1`.
pub fn base_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

/// Output path for an input: `<output_dir>/<base><output_ext>`.
pub fn output_path(input: &Path, output_dir: &Path, output_ext: &str) -> Option<PathBuf> {
    base_name(input).map(|base| output_dir.join(format!("{base}{output_ext}")))
}
