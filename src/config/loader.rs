//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TreeSelectError, TreeSelectResult};

use super::types::ControlConfig;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> TreeSelectResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(TreeSelectError::UnsupportedFormat {
                file: path.to_path_buf(),
            }),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreeSelectResult<(ControlConfig, Vec<ConfigWarning>)> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, format, path)
}

/// Parse configuration text, attributing warnings to `path`
pub fn parse_with_warnings(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> TreeSelectResult<(ControlConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();

    let config: ControlConfig = match format {
        ConfigFormat::Toml => {
            let deserializer = toml::de::Deserializer::new(content);
            serde_ignored::deserialize(deserializer, |p| {
                unknown_paths.push(p.to_string());
            })
            .map_err(|e| TreeSelectError::InvalidConfig {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
        ConfigFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(content);
            serde_ignored::deserialize(&mut deserializer, |p| {
                unknown_paths.push(p.to_string());
            })
            .map_err(|e| TreeSelectError::InvalidConfig {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
    };

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// 1-based line of the first mention of `key`
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(key))
        .map(|index| index + 1)
}

/// Nearest known key within edit distance 2
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "container_id",
        "containerId",
        "placeholder",
        "data",
        "flags",
        "id",
        "name",
        "children",
    ];

    KNOWN_KEYS
        .iter()
        .map(|known| (*known, levenshtein(unknown, known)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(known, _)| known.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ac != *bc);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
