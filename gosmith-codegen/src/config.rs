//! Formatter configuration attached to a document root.
//!
//! The configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! syntax_check = true
//!
//! [[steps]]
//! command = "gofmt"
//! args = ["-s"]
//!
//! [[steps]]
//! command = "goimports"
//! ```

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, FormatterStep, Result};

/// Which external passes run after a document has rendered.
///
/// Like every builder value, a `FormatConfig` is never changed in place;
/// the `with_*` methods return a new configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Run a check-only pass before any formatter step.
    #[serde(default)]
    pub syntax_check: bool,
    /// Formatter steps, applied in order.
    #[serde(default)]
    pub steps: Vec<FormatterStep>,
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::parse(&content, &filename)
    }

    fn parse(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
    }

    #[must_use]
    pub fn with_syntax_check(&self, enabled: bool) -> Self {
        Self {
            syntax_check: enabled,
            steps: self.steps.clone(),
        }
    }

    #[must_use]
    pub fn with_step(&self, step: FormatterStep) -> Self {
        self.with_steps([step])
    }

    /// A copy of this configuration with `steps` appended after the existing ones.
    #[must_use]
    pub fn with_steps(&self, steps: impl IntoIterator<Item = FormatterStep>) -> Self {
        let mut next = self.steps.clone();
        next.extend(steps);
        Self {
            syntax_check: self.syntax_check,
            steps: next,
        }
    }

    /// Whether rendering runs any external process at all.
    pub fn is_passthrough(&self) -> bool {
        !self.syntax_check && self.steps.is_empty()
    }
}

impl FromStr for FormatConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, "gosmith.toml")
    }
}
