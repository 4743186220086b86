use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Units processed between cooperative suspensions unless configured.
pub const DEFAULT_SUSPEND_COUNT: usize = 10240;

/// Settings for the streaming drivers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StreamingSettings {
    /// Input bytes a decoder consumes before it suspends.
    pub suspend_byte_count: usize,
    /// Input values an encoder consumes before it suspends.
    pub suspend_element_count: usize,
    /// Leading CR/LF-terminated lines a decoder discards.
    pub skip_line_count: usize,
}

impl Default for StreamingSettings {
    fn default() -> Self {
        StreamingSettings {
            suspend_byte_count: DEFAULT_SUSPEND_COUNT,
            suspend_element_count: DEFAULT_SUSPEND_COUNT,
            skip_line_count: 0,
        }
    }
}

/// Settings for rendering encoded text and decoded numbers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Insert a line break every `line_width` symbols (0 = single line).
    pub line_width: usize,
    /// Decimal places for decoded numbers (unset = shortest exact form).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

/// Codec configuration loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CodecConfig {
    pub streaming: StreamingSettings,
    pub output: OutputSettings,
}

/// On-disk shape: every section is optional so override files only replace
/// the sections they mention.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    streaming: Option<StreamingSettings>,
    output: Option<OutputSettings>,
}

impl CodecConfig {
    /// Parses a configuration from TOML content. Missing sections and keys
    /// take their built-in defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.merge_file(toml::from_str(content)?);
        Ok(config)
    }

    /// Loads the built-in configuration bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../../codec.toml"))
    }

    /// Loads configuration from a file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in configuration (from library)
    /// 2. `~/.config/float12/codec.toml` (user overrides)
    /// 3. `./float12.toml` (project-local overrides)
    ///
    /// Later files replace the sections they define. A file that fails to
    /// load is logged and skipped.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("float12").join("codec.toml");
            config.apply_override_file(&user_config_path);
        }

        config.apply_override_file(Path::new("float12.toml"));
        config.validate()?;
        Ok(config)
    }

    /// Applies the sections defined in the file at `path`, if it exists.
    fn apply_override_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        let parsed = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|content| Ok(toml::from_str::<ConfigFile>(&content)?));
        match parsed {
            Ok(file) => {
                log::debug!("applying config overrides from {:?}", path);
                self.merge_file(file);
            }
            Err(e) => log::warn!("failed to load config from {:?}: {}", path, e),
        }
    }

    /// Merges another configuration into this one; `other` wins.
    pub fn merge(&mut self, other: CodecConfig) {
        self.merge_file(ConfigFile {
            streaming: Some(other.streaming),
            output: Some(other.output),
        });
    }

    fn merge_file(&mut self, file: ConfigFile) {
        if let Some(streaming) = file.streaming {
            self.streaming = streaming;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
    }

    /// Rejects settings the drivers cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.streaming.suspend_byte_count == 0 {
            return Err(ConfigError::Invalid {
                field: "streaming.suspend_byte_count",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.streaming.suspend_element_count == 0 {
            return Err(ConfigError::Invalid {
                field: "streaming.suspend_element_count",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = CodecConfig::load_default().unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.streaming.suspend_byte_count, DEFAULT_SUSPEND_COUNT);
        assert_eq!(config.output.line_width, 0);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = CodecConfig::from_toml("[streaming]\nskip_line_count = 2\n").unwrap();
        assert_eq!(config.streaming.skip_line_count, 2);
        assert_eq!(config.streaming.suspend_byte_count, DEFAULT_SUSPEND_COUNT);
        assert_eq!(config.output, OutputSettings::default());
    }

    #[test]
    fn test_merge_replaces_sections() {
        let mut config = CodecConfig::default();
        let mut other = CodecConfig::default();
        other.output.line_width = 76;
        other.streaming.suspend_element_count = 5;
        config.merge(other.clone());
        assert_eq!(config, other);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = CodecConfig::from_toml("[dictionaries]\nfoo = 1\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_zero_suspend() {
        let config = CodecConfig::from_toml("[streaming]\nsuspend_byte_count = 0\n").unwrap();
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => {
                assert_eq!(field, "streaming.suspend_byte_count")
            }
            other => panic!("expected invalid setting, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codec.toml");
        std::fs::write(&path, "[output]\nline_width = 64\nprecision = 3\n").unwrap();

        let config = CodecConfig::load_from_file(&path).unwrap();
        assert_eq!(config.output.line_width, 64);
        assert_eq!(config.output.precision, Some(3));
    }

    #[test]
    fn test_load_missing_file() {
        let result = CodecConfig::load_from_file(Path::new("/nonexistent/float12.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = CodecConfig::default();
        config.output.precision = Some(4);
        let text = config.to_toml().unwrap();
        assert_eq!(CodecConfig::from_toml(&text).unwrap(), config);
    }
}
