use std::path::{Path, PathBuf};

/// Sibling output path with `_merged` appended before the extension.
pub fn merged_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match input.extension() {
        Some(ext) => format!("{stem}_merged.{}", ext.to_string_lossy()),
        None => format!("{stem}_merged"),
    };

    input.with_file_name(name)
}
