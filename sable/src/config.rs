use anyhow::Result;
use serde::Deserialize;
use std::fs;

/// Ternary forms emitted by the dashboard generator, pinned to the value
/// of their dark branch.
const DEFAULT_REPLACEMENTS: [(&str, &str); 9] = [
    (r"stroke=\{dark\?'#334155':'#e5e7eb'\}", "stroke='#334155'"),
    (r"fill:\s*dark\?'#cbd5e1':'#475569'", "fill: '#cbd5e1'"),
    (
        r"backgroundColor:\s*dark\s*\?\s*'#1f2937'\s*:\s*'#ffffff'",
        "backgroundColor: '#1f2937'",
    ),
    (
        r"border:\s*'1px solid '\s*\+\s*\(dark\s*\?\s*'#374151'\s*:\s*'#e5e7eb'\)",
        "border: '1px solid #374151'",
    ),
    (
        r"color:\s*dark\s*\?\s*'#e5e7eb'\s*:\s*'#111827'",
        "color: '#e5e7eb'",
    ),
    (
        r"const textColor = dark \? '#cbd5e1' : '#1f2937';",
        "const textColor = '#cbd5e1';",
    ),
    (
        r"const baseBg = dark \? '#1f2937' : '#e5e7eb';",
        "const baseBg = '#1f2937';",
    ),
    (
        r"const hoverBg = dark \? '#374151' : '#d1d5db';",
        "const hoverBg = '#374151';",
    ),
    (r"stroke=\{dark\?'#475569':'#cbd5e1'\}", "stroke='#475569'"),
];

#[derive(Debug, Deserialize)]
pub struct Config {
    pub replacements: Vec<Replacement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Replacement {
    pub pattern: String,
    pub replacement: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            replacements: DEFAULT_REPLACEMENTS
                .iter()
                .map(|(pattern, replacement)| Replacement {
                    pattern: (*pattern).to_string(),
                    replacement: (*replacement).to_string(),
                })
                .collect(),
        }
    }
}

/// Loads `.sable.toml` from the working directory; a missing file means
/// the built-in table, a malformed one warns and falls back to it.
pub fn load_config() -> Result<Config> {
    let config = match fs::read_to_string(".sable.toml") {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
            eprintln!("⚠️  Failed to parse .sable.toml ({err}), using built-in replacements");
            Config::default()
        }),
        Err(_) => Config::default(),
    };

    Ok(config)
}
