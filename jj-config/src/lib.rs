//! Configuration loader for jjformat.
//!
//! `defaults/jjformat.default.toml` is embedded into the binary so that the documented
//! defaults and the runtime behavior stay in sync. Callers layer project files and command
//! line overrides on top of it via [`Loader`] before deserializing into [`JjConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/jjformat.default.toml");

/// Name of the project configuration file picked up from the working directory
pub const PROJECT_FILE: &str = "jjformat.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JjConfig {
    pub formatting: FormattingConfig,
}

/// Mirrors the knobs exposed by the formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub indent_unit: String,
    pub line_ending: LineEnding,
}

/// Line terminator written by the formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Whatever the source uses first, `\n` when it has no line break
    Auto,
    Lf,
    Crlf,
    Cr,
}

impl LineEnding {
    /// The terminator to write for `source`
    pub fn resolve(&self, source: &str) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
            LineEnding::Cr => "\r",
            LineEnding::Auto => match source.find(['\n', '\r']) {
                Some(at) if source[at..].starts_with("\r\n") => "\r\n",
                Some(at) if source[at..].starts_with('\r') => "\r",
                _ => "\n",
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Auto => "auto",
            LineEnding::Lf => "lf",
            LineEnding::Crlf => "crlf",
            LineEnding::Cr => "cr",
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<JjConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<JjConfig, ConfigError> {
    Loader::new().build()
}
