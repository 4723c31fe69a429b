//! Entry-point configuration: which builder variant the demo runs.
//!
//! The binary uses [`DemoConfig::default()`]. Library callers can parse the
//! same settings from TOML:
//!
//! ```toml
//! is_kid = true
//! # or name the variant directly; this wins over `is_kid`
//! kind = "adult"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::builder::MealKind;
use crate::error::DemoError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// `true` selects the kids' meal, `false` (the default) the adult one.
    pub is_kid: bool,
    /// Explicit variant, `"kids"` or `"adult"`. Overrides `is_kid` when set.
    pub kind: Option<MealKind>,
}

impl DemoConfig {
    pub fn new(is_kid: bool) -> Self {
        Self { is_kid, kind: None }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DemoError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Self::from_toml_str(&content)
    }

    pub fn kind(&self) -> MealKind {
        self.kind.unwrap_or_else(|| MealKind::from_is_kid(self.is_kid))
    }
}
