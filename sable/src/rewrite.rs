use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::config::Replacement;

pub fn rewrite_source(path: &Path, replacements: &[Replacement]) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let (rewritten, count) = apply_replacements(&content, replacements)?;

    fs::write(path, rewritten)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(count)
}

/// Applies each pattern in table order, returning the rewritten text and
/// the total number of matches replaced.
pub fn apply_replacements(content: &str, replacements: &[Replacement]) -> Result<(String, usize)> {
    let mut result = content.to_string();
    let mut total = 0;

    for entry in replacements {
        let re = Regex::new(&entry.pattern)
            .with_context(|| format!("Invalid replacement pattern: {}", entry.pattern))?;
        total += re.find_iter(&result).count();
        result = re.replace_all(&result, entry.replacement.as_str()).into_owned();
    }

    Ok((result, total))
}
