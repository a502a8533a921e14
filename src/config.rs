use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_CONNECT, DEFAULT_ROWS};

/// Board and win-condition configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board height.
    pub rows: usize,
    /// Board width.
    pub cols: usize,
    /// Run length required to win.
    pub connect: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            connect: DEFAULT_CONNECT,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("cols must be > 0".into()));
        }
        if self.connect == 0 {
            return Err(ConfigError::Validation("connect must be > 0".into()));
        }
        if self.rows < self.connect && self.cols < self.connect {
            return Err(ConfigError::Validation(format!(
                "a {}x{} board can never fit a run of {}",
                self.rows, self.cols, self.connect
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 7);
        assert_eq!(config.connect, 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
connect = 5
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.connect, 5);
        // Other fields should be defaults
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 7);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config.rows, GameConfig::default().rows);
        assert_eq!(config.cols, GameConfig::default().cols);
        assert_eq!(config.connect, GameConfig::default().connect);
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = GameConfig::default();
        config.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_cols() {
        let mut config = GameConfig::default();
        config.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_connect() {
        let mut config = GameConfig::default();
        config.connect = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unwinnable_board() {
        let config = GameConfig {
            rows: 3,
            cols: 3,
            connect: 4,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_one_long_side() {
        let config = GameConfig {
            rows: 3,
            cols: 9,
            connect: 4,
        };
        config.validate().unwrap();
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.rows, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
rows = 8
cols = 9
connect = 5
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 9);
        assert_eq!(config.connect, 5);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "rows = 2\ncols = 2\nconnect = 4\n").unwrap();
        assert!(GameConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
