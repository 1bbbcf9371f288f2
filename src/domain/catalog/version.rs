//! Scripture translations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Translation the text is served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptureVersion {
    #[default]
    Krv,
    Nkrv,
}

impl ScriptureVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptureVersion::Krv => "krv",
            ScriptureVersion::Nkrv => "nkrv",
        }
    }

    /// Human-readable translation name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ScriptureVersion::Krv => "개역개정",
            ScriptureVersion::Nkrv => "새번역",
        }
    }
}

impl fmt::Display for ScriptureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptureVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "krv" => Ok(ScriptureVersion::Krv),
            "nkrv" => Ok(ScriptureVersion::Nkrv),
            _ => Err(ValidationError::invalid_format(
                "version",
                format!("unknown scripture version '{}'", s),
            )),
        }
    }
}
