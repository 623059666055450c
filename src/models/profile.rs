//! Vertical wind-speed profile formulas.
//!
//! Profiles are selected by name when the ambient states are set up, so the
//! model book stores their identifiers rather than instances.

use std::fmt;

/// Atmospheric boundary layer log-law wind-speed profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalProfile {
    /// Neutral stratification.
    AblLogNeutral,
    /// Stable stratification.
    AblLogStable,
    /// Unstable stratification.
    AblLogUnstable,
    /// Stratification chosen from the Obukhov length at run time.
    AblLog,
}

impl VerticalProfile {
    /// Every profile, in registration order.
    pub const ALL: [Self; 4] = [
        Self::AblLogNeutral,
        Self::AblLogStable,
        Self::AblLogUnstable,
        Self::AblLog,
    ];

    /// Key under which the profile is registered.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::AblLogNeutral => "ws_abl_log_neutral",
            Self::AblLogStable => "ws_abl_log_stable",
            Self::AblLogUnstable => "ws_abl_log_unstable",
            Self::AblLog => "ws_abl_log",
        }
    }

    /// Identifier the profile formula is looked up by.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AblLogNeutral => "ABLLogNeutralWsProfile",
            Self::AblLogStable => "ABLLogStableWsProfile",
            Self::AblLogUnstable => "ABLLogUnstableWsProfile",
            Self::AblLog => "ABLLogWsProfile",
        }
    }
}

impl fmt::Display for VerticalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
