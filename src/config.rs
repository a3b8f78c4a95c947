//! Generation bounds and defaults.
//!
//! [`Limits`] holds the min/max bounds every request is validated
//! against. [`FileConfig`] is the optional TOML file the command-line
//! front end reads, carrying limits plus per-artifact defaults.

use crate::charset::SEPARATOR_DEFAULT;
use crate::error::{Error, Parameter};
use crate::universe::Casing;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of artifacts per call.
pub const COUNT_DEFAULT: usize = 1;
/// Default password length in characters.
pub const PASSWORD_LENGTH_DEFAULT: usize = 16;
/// Default passphrase length in words.
pub const PASSPHRASE_WORD_COUNT_DEFAULT: usize = 6;

/// Default lower bound for counts and lengths.
pub const BOUND_MIN_DEFAULT: usize = 1;
/// Default upper bound for counts and lengths.
pub const BOUND_MAX_DEFAULT: usize = 1000;
/// Largest upper bound a configuration may set.
pub const BOUND_CEILING: usize = 1_000_000;

/// Inclusive range a request parameter must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: BOUND_MIN_DEFAULT,
            max: BOUND_MAX_DEFAULT,
        }
    }
}

impl Bounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies within the bounds.
    #[inline]
    pub fn contains(&self, value: usize) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Checks a request parameter against the bounds.
    pub fn check(&self, parameter: Parameter, value: usize) -> Result<(), Error> {
        if self.contains(value) {
            return Ok(());
        }
        Err(Error::OutOfRange {
            parameter,
            value,
            min: self.min,
            max: self.max,
        })
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max || self.max > BOUND_CEILING {
            return Err(ConfigError::InvalidBounds {
                name: name.to_owned(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Bounds for password requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PasswordLimits {
    #[serde(default)]
    pub count: Bounds,
    #[serde(default)]
    pub length: Bounds,
}

/// Bounds for passphrase requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PassphraseLimits {
    #[serde(default)]
    pub count: Bounds,
    #[serde(default)]
    pub word_count: Bounds,
}

/// All request bounds enforced by a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default)]
    pub password: PasswordLimits,
    #[serde(default)]
    pub passphrase: PassphraseLimits,
}

impl Limits {
    /// Validates every bound: min at least 1, min not above max, max
    /// not above [`BOUND_CEILING`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.password.count.validate("password.count")?;
        self.password.length.validate("password.length")?;
        self.passphrase.count.validate("passphrase.count")?;
        self.passphrase.word_count.validate("passphrase.word_count")?;
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bounds for {name}: min {min}, max {max} (need 1 <= min <= max <= {ceiling})", ceiling = BOUND_CEILING)]
    InvalidBounds { name: String, min: usize, max: usize },
    #[error("invalid default: {0}")]
    InvalidDefault(String),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Password defaults used when a request leaves a value unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordDefaults {
    pub count: usize,
    pub length: usize,
    /// Custom alphabet; `None` selects the built-in default.
    pub alphabet: Option<String>,
}

impl Default for PasswordDefaults {
    fn default() -> Self {
        Self {
            count: COUNT_DEFAULT,
            length: PASSWORD_LENGTH_DEFAULT,
            alphabet: None,
        }
    }
}

/// Passphrase defaults used when a request leaves a value unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassphraseDefaults {
    pub count: usize,
    pub word_count: usize,
    pub separator: char,
    pub casing: Casing,
    /// Newline-delimited word list file; `None` selects the built-in list.
    pub word_list: Option<PathBuf>,
}

impl Default for PassphraseDefaults {
    fn default() -> Self {
        Self {
            count: COUNT_DEFAULT,
            word_count: PASSPHRASE_WORD_COUNT_DEFAULT,
            separator: SEPARATOR_DEFAULT,
            casing: Casing::default(),
            word_list: None,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub password: PasswordDefaults,
    #[serde(default)]
    pub passphrase: PassphraseDefaults,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates limits and checks every default against them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;

        let checks = [
            ("password.count", self.limits.password.count, self.password.count),
            ("password.length", self.limits.password.length, self.password.length),
            ("passphrase.count", self.limits.passphrase.count, self.passphrase.count),
            (
                "passphrase.word_count",
                self.limits.passphrase.word_count,
                self.passphrase.word_count,
            ),
        ];
        for (name, bounds, value) in checks {
            if !bounds.contains(value) {
                return Err(ConfigError::InvalidDefault(format!(
                    "{name} = {value} is outside {}..={}",
                    bounds.min, bounds.max
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_minimum_invalid() {
        let mut limits = Limits::default();
        limits.password.length.min = 0;
        assert!(matches!(
            limits.validate(),
            Err(ConfigError::InvalidBounds { ref name, .. }) if name == "password.length"
        ));
    }

    #[test]
    fn test_inverted_bounds_invalid() {
        let mut limits = Limits::default();
        limits.passphrase.count = Bounds::new(10, 5);
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_ceiling_enforced() {
        let mut limits = Limits::default();
        limits.passphrase.word_count.max = BOUND_CEILING + 1;
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_bounds_check_reports_violation() {
        let bounds = Bounds::new(1, 1000);
        assert!(bounds.check(Parameter::Count, 1).is_ok());
        assert!(bounds.check(Parameter::Count, 1000).is_ok());
        assert!(matches!(
            bounds.check(Parameter::Length, 0),
            Err(Error::OutOfRange {
                parameter: Parameter::Length,
                value: 0,
                min: 1,
                max: 1000
            })
        ));
        assert!(bounds.check(Parameter::Count, 1001).is_err());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = FileConfig::from_toml_str(
            r#"
            [limits.password]
            length = { min = 8, max = 64 }

            [passphrase]
            count = 3
            separator = "-"
            casing = "title"
            "#,
        )
        .unwrap();

        assert_eq!(config.limits.password.length, Bounds::new(8, 64));
        assert_eq!(config.limits.password.count, Bounds::default());
        assert_eq!(config.password, PasswordDefaults::default());
        assert_eq!(config.passphrase.count, 3);
        assert_eq!(config.passphrase.word_count, PASSPHRASE_WORD_COUNT_DEFAULT);
        assert_eq!(config.passphrase.separator, '-');
        assert_eq!(config.passphrase.casing, Casing::Title);
    }

    #[test]
    fn test_default_outside_limits_rejected() {
        let result = FileConfig::from_toml_str(
            r#"
            [limits.password]
            length = { min = 20, max = 64 }
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidDefault(_))));
    }

    #[test]
    fn test_multi_character_separator_rejected() {
        let result = FileConfig::from_toml_str(
            r#"
            [passphrase]
            count = 1
            word_count = 6
            separator = "--"
            casing = "lower"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_unknown_casing_rejected() {
        let result = FileConfig::from_toml_str(
            r#"
            [passphrase]
            count = 1
            word_count = 6
            separator = " "
            casing = "sponge"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FileConfig::from_file("/nonexistent/passgen.toml"),
            Err(ConfigError::FileReadError(_))
        ));
    }
}
