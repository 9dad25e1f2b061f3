//! Risk level classification
//!
//! Maps a probability to a display tier with a fixed color and canned advice.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Probabilities at or above this are high risk
pub const HIGH_RISK_THRESHOLD: u8 = 70;
/// Probabilities at or above this (and below high) are medium risk
pub const MEDIUM_RISK_THRESHOLD: u8 = 30;

/// Risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Display color as a hex string
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#10B981",
            Self::Medium => "#FBBF24",
            Self::High => "#EF4444",
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Low => "Low Risk - Continue Preventive Measures",
            Self::Medium => "Medium Risk - Exercise Caution",
            Self::High => "High Risk - Immediate Action Needed",
        }
    }

    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Low => "Maintain good hygiene practices, stay informed",
            Self::Medium => "Boil drinking water, wash hands frequently, monitor for symptoms",
            Self::High => {
                "Avoid untreated water, practice strict hygiene, seek medical attention for any symptoms"
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation details for a risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskInfo {
    pub level: RiskLevel,
    pub color: &'static str,
    pub text: &'static str,
    pub recommendation: &'static str,
}

/// Classify a probability
#[must_use]
pub const fn risk_level(probability: u8) -> RiskLevel {
    if probability >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if probability >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Classify a probability and attach its presentation details
#[must_use]
pub const fn risk_info(probability: u8) -> RiskInfo {
    let level = risk_level(probability);
    RiskInfo {
        level,
        color: level.color(),
        text: level.text(),
        recommendation: level.recommendation(),
    }
}
