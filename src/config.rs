use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// How results are printed by the command-line host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TreejumpConfig {
    pub format: Option<OutputFormat>,
    /// Report the target range as a selection, not just a caret.
    pub select: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, LanguageOverride>,
}

/// Per-language adjustments merged into a built-in table when the registry is
/// built.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LanguageOverride {
    #[serde(default)]
    pub trivial: Vec<String>,
    #[serde(default)]
    pub significant: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl LanguageOverride {
    pub fn is_empty(&self) -> bool {
        self.trivial.is_empty() && self.significant.is_empty() && self.extensions.is_empty()
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("treejump.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TreejumpConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: TreejumpConfig = toml::from_str(&contents)?;
    tracing::debug!(path = %path.display(), languages = config.languages.len(), "loaded config");
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &TreejumpConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// The config written by `treejump init`.
pub fn default_config() -> TreejumpConfig {
    TreejumpConfig {
        format: Some(OutputFormat::Text),
        select: Some(true),
        languages: BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_config(Some(&dir.path().join("treejump.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("treejump.toml");

        write_config(&path, &default_config(), false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.format, Some(OutputFormat::Text));
        assert_eq!(loaded.select, Some(true));
        assert!(loaded.languages.is_empty());
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("treejump.toml");

        write_config(&path, &default_config(), false).unwrap();
        assert!(write_config(&path, &default_config(), false).is_err());
        assert!(write_config(&path, &default_config(), true).is_ok());
    }

    #[test]
    fn test_language_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("treejump.toml");
        std::fs::write(
            &path,
            r#"
format = "json"

[languages.rust]
trivial = ["attribute_item"]
extensions = ["rs.in"]
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert!(config.select.is_none());
        let rust = &config.languages["rust"];
        assert_eq!(rust.trivial, vec!["attribute_item"]);
        assert!(rust.significant.is_empty());
        assert!(!rust.is_empty());
    }
}
