//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path
            .map(String::from)
            .or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            tracing::debug!(path = %p, "loading configuration");
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Load with defaults only (no file)
    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        ".glowbook.toml",
        "glowbook.toml",
        ".config/glowbook.toml",
    ];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    if !Path::new(path).exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {}: {}", path, e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse config file {}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use glowbook_search::SearchField;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::defaults();
        assert!(config.path.is_none());
        assert_eq!(config.schema.search.max_suggestions, 8);
        assert_eq!(config.schema.popular.limit, 6);
        assert_eq!(config.schema.logging.level, "warn");
    }

    #[test]
    fn test_config_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[search]
search_fields = ["name", "category"]
fuzzy_threshold = 1
max_suggestions = 5

[popular]
limit = 3

[history]
dir = "/tmp/glowbook-history"
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let config = Config::load(Some(path)).unwrap();
        let search = &config.schema.search;
        assert_eq!(search.search_fields, vec![SearchField::Name, SearchField::Category]);
        assert_eq!(search.fuzzy_threshold, 1);
        assert_eq!(search.max_suggestions, 5);
        assert_eq!(config.schema.popular.limit, 3);
        assert_eq!(
            config.schema.history.resolved_dir(),
            std::path::PathBuf::from("/tmp/glowbook-history")
        );
        assert_eq!(config.schema.history.key, glowbook_search::HISTORY_KEY);
    }

    #[test]
    fn test_negative_values_clamped() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nfuzzy_threshold = -3\n").unwrap();

        let config = Config::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.schema.search.fuzzy_threshold, 0);
        assert_eq!(config.schema.search.max_suggestions, 8);
    }

    #[test]
    fn test_unknown_search_field_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nsearch_fields = [\"price\"]\n").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_explicit_missing_file() {
        let err = Config::load(Some("/nonexistent/glowbook.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }
}
