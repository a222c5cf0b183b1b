use std::fmt;

use serde::{Deserialize, Serialize};

/// How aggressively the enumeration engine should pace its API calls.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedTier {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedTier {
    /// Integer encoding consumed by the enumeration engine.
    pub fn level(self) -> u8 {
        match self {
            SpeedTier::Slow => 1,
            SpeedTier::Normal => 2,
            SpeedTier::Fast => 3,
        }
    }
}

impl From<&str> for SpeedTier {
    /// Unrecognized input falls back to `Normal`.
    fn from(s: &str) -> Self {
        match s {
            "slow" => SpeedTier::Slow,
            "normal" => SpeedTier::Normal,
            "fast" => SpeedTier::Fast,
            _ => SpeedTier::Normal,
        }
    }
}

/// Which services the engine should walk.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ServiceSelection {
    All,
    Named(Vec<String>),
}

impl ServiceSelection {
    /// Parses `"all"` or a comma separated service list; entries are trimmed
    /// and empty entries dropped.
    pub fn parse(input: &str) -> ServiceSelection {
        if input.trim() == "all" {
            ServiceSelection::All
        } else {
            let names = input
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            ServiceSelection::Named(names)
        }
    }
}

impl fmt::Display for ServiceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceSelection::All => f.write_str("all"),
            ServiceSelection::Named(names) => f.write_str(&names.join(",")),
        }
    }
}

/// One enumeration run as requested on the command line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EnumerationRequest {
    pub services: ServiceSelection,
    pub speed: SpeedTier,
}
