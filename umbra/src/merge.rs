use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::util::merged_output_path;

/// Scope prefixes that marked a rule as dark-theme only.
const DARK_SCOPE_MARKERS: [&str; 2] = ["body.dark-mode ", ".dark-mode "];

/// Forward scans for a dark override give up after this many `{`
/// occurrences among the scanned lines. Overrides further away are
/// missed and the base rule is kept alongside them.
const LOOKAHEAD_BRACE_LIMIT: usize = 4;

pub fn merge_stylesheet(path: &Path) -> Result<PathBuf> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let merged = merge_dark_mode(&content)?;

    let output = merged_output_path(path);
    fs::write(&output, merged)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(output)
}

/// Flattens a dark-mode-scoped stylesheet into a single-theme one: scoped
/// rules lose their prefix and replace their base counterparts, everything
/// else passes through in order.
pub fn merge_dark_mode(content: &str) -> Result<String> {
    let body_prefix = Regex::new(r"body\.dark-mode\s+")?;
    let class_prefix = Regex::new(r"\.dark-mode\s+")?;

    let lines: Vec<&str> = content.split('\n').collect();
    let mut result: Vec<String> = Vec::new();
    let mut merged: HashSet<String> = HashSet::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if DARK_SCOPE_MARKERS.iter().any(|m| line.contains(m)) {
            // body.dark-mode first, so the bare class form cannot leave a
            // dangling "body" behind.
            let opening = class_prefix
                .replace_all(&body_prefix.replace_all(line, ""), "")
                .into_owned();
            let selector = opening.split('{').next().unwrap_or("").trim().to_string();
            let end = block_end(&lines, i);

            // First dark definition of a selector wins, later ones are dropped.
            if !merged.contains(&selector) {
                result.push(opening);
                result.extend(lines[i + 1..end].iter().map(|l| (*l).to_string()));
                merged.insert(selector);
            }

            i = end;
            continue;
        }

        let trimmed = line.trim();
        if !trimmed.is_empty() && line.contains('{') && !trimmed.starts_with("/*") {
            let selector = line.split('{').next().unwrap_or("").trim();
            if has_dark_override(&lines, i, selector) {
                // The dark version replaces this rule wholesale.
                i = block_end(&lines, i);
                continue;
            }
        }

        result.push(line.to_string());
        i += 1;
    }

    Ok(result.join("\n"))
}

/// Index one past the line that closes the block opened at `start`,
/// tracked by cumulative brace balance. Unbalanced input closes
/// implicitly at end of input.
fn block_end(lines: &[&str], start: usize) -> usize {
    let mut depth = 0i32;
    let mut i = start;
    while i < lines.len() {
        depth += brace_delta(lines[i]);
        i += 1;
        if depth <= 0 {
            break;
        }
    }
    i
}

fn brace_delta(line: &str) -> i32 {
    line.matches('{').count() as i32 - line.matches('}').count() as i32
}

fn has_dark_override(lines: &[&str], current: usize, selector: &str) -> bool {
    let needles: Vec<String> = DARK_SCOPE_MARKERS
        .iter()
        .map(|marker| format!("{marker}{selector}"))
        .collect();

    let mut braces_seen = 0;
    for later in &lines[current + 1..] {
        if needles.iter().any(|needle| later.contains(needle.as_str())) {
            return true;
        }
        braces_seen += later.matches('{').count();
        if braces_seen >= LOOKAHEAD_BRACE_LIMIT {
            break;
        }
    }

    false
}
