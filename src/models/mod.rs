pub mod inputs;
pub mod result;

pub use inputs::{Field, Leverage, TradeInputs};
pub use result::TradeResult;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PositionSide
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    #[default]
    Long,
    Short,
}

impl PositionSide {
    pub fn from_input_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "long" | "l" => Some(PositionSide::Long),
            "short" | "s" => Some(PositionSide::Short),
            _ => None,
        }
    }

    /// The other side of the exclusive Long/Short toggle.
    pub fn opposite(self) -> Self {
        match self {
            PositionSide::Long => PositionSide::Short,
            PositionSide::Short => PositionSide::Long,
        }
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSide::Long => write!(f, "Long"),
            PositionSide::Short => write!(f, "Short"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
