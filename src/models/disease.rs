//! The two diseases scored by the engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OutbreakError;

/// Disease identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    Typhoid,
    Cholera,
}

impl Disease {
    pub const ALL: [Self; 2] = [Self::Typhoid, Self::Cholera];

    /// Lowercase identifier used by the engine
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typhoid => "typhoid",
            Self::Cholera => "cholera",
        }
    }

    /// Capitalized label used by imported historical records
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Typhoid => "Typhoid",
            Self::Cholera => "Cholera",
        }
    }

    /// Whether a free-text disease label refers to this disease, ignoring case
    #[must_use]
    pub fn matches_label(self, label: &str) -> bool {
        label.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disease {
    type Err = OutbreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|disease| disease.matches_label(s))
            .ok_or_else(|| OutbreakError::UnknownDisease(s.to_string()))
    }
}
