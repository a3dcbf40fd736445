//! Configuration loading
//!
//! `defaults/mathsplit.default.toml` is embedded into the binary so that the documented
//! defaults and the runtime defaults cannot drift apart. Callers layer their own files on
//! top via [`Loader`] before deserializing into [`MathsplitConfig`].
//!
//! Tables merge key by key; arrays are replaced. A user file that lists `delimiters`
//! therefore replaces the default delimiter list instead of appending to it.

use crate::math::delimiters::{DelimiterError, DelimiterSet, DelimiterSpec};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_TOML: &str = include_str!("../../defaults/mathsplit.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MathsplitConfig {
    pub delimiters: Vec<DelimiterSpec>,
    pub output: OutputConfig,
}

impl MathsplitConfig {
    /// Validate the configured delimiters into a usable set
    pub fn delimiter_set(&self) -> Result<DelimiterSet, DelimiterError> {
        DelimiterSet::new(self.delimiters.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

/// How split results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Json,
    Yaml,
    Simple,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Simple];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Simple => "simple",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| format!("Unknown output format '{}'", s))
    }
}

/// Builds a [MathsplitConfig] from the embedded defaults plus any user files and overrides.
///
/// Sources added later win. A file that sets `delimiters` swaps out the whole list.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with `defaults/mathsplit.default.toml`
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file over what is loaded so far; its `delimiters`, if present, replace
    /// the current list. The file must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Like [Loader::with_file], but an absent file is skipped
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        log::debug!("layering config file {}", path.display());
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Force one dotted key, e.g. `output.format` from the command line
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all sources and deserialize. Delimiters are not validated here; see
    /// [MathsplitConfig::delimiter_set].
    pub fn build(self) -> Result<MathsplitConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in delimiters and output settings
pub fn load_defaults() -> Result<MathsplitConfig, ConfigError> {
    Loader::new().build()
}
