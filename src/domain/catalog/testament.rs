//! Testament enum - the two top-level corpus partitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the two corpus partitions, each with its own day budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Testament {
    #[serde(rename = "OT")]
    Old,
    #[serde(rename = "NT")]
    New,
}

impl Testament {
    /// Both testaments in schedule order.
    pub fn all() -> &'static [Testament] {
        &[Testament::Old, Testament::New]
    }

    /// Short code used on the wire and in storage.
    pub fn code(&self) -> &'static str {
        match self {
            Testament::Old => "OT",
            Testament::New => "NT",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Testament {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OT" => Ok(Testament::Old),
            "NT" => Ok(Testament::New),
            _ => Err(ValidationError::invalid_format(
                "testament",
                format!("expected OT or NT, got '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testament_parses_case_insensitively() {
        assert_eq!("ot".parse::<Testament>().unwrap(), Testament::Old);
        assert_eq!("NT".parse::<Testament>().unwrap(), Testament::New);
        assert!("apocrypha".parse::<Testament>().is_err());
    }

    #[test]
    fn testament_serializes_as_short_code() {
        assert_eq!(serde_json::to_string(&Testament::Old).unwrap(), "\"OT\"");
        assert_eq!(serde_json::to_string(&Testament::New).unwrap(), "\"NT\"");
    }

    #[test]
    fn old_testament_sorts_first() {
        assert!(Testament::Old < Testament::New);
        assert_eq!(Testament::all(), &[Testament::Old, Testament::New]);
    }
}
