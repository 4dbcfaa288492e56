use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_INVESTMENT: &str = "1000";

/// A free-text input that must hold a positive real number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Investment,
    EntryPrice,
    ClosePrice,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Investment, Field::EntryPrice, Field::ClosePrice];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Investment => "Investment",
            Field::EntryPrice => "Entry Price",
            Field::ClosePrice => "Target Price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Investment => write!(f, "investment"),
            Field::EntryPrice => write!(f, "entry_price"),
            Field::ClosePrice => write!(f, "close_price"),
        }
    }
}

// ---------------------------------------------------------------------------
// Leverage
// ---------------------------------------------------------------------------

/// Integer leverage multiplier, always within [`Leverage::MIN`, `Leverage::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub struct Leverage(u8);

impl Leverage {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn clamped(value: i64) -> Self {
        Leverage(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Leverage {
    fn default() -> Self {
        Leverage(Self::MIN)
    }
}

impl From<u8> for Leverage {
    fn from(value: u8) -> Self {
        Leverage::clamped(i64::from(value))
    }
}

impl From<Leverage> for u8 {
    fn from(value: Leverage) -> Self {
        value.0
    }
}

impl fmt::Display for Leverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

// ---------------------------------------------------------------------------
// TradeInputs
// ---------------------------------------------------------------------------

/// Raw form state. Text fields are kept exactly as typed; validation happens
/// on every compute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInputs {
    pub investment: String,
    pub leverage: Leverage,
    pub entry_price: String,
    pub close_price: String,
}

impl TradeInputs {
    pub fn with_investment(investment: impl Into<String>) -> Self {
        Self {
            investment: investment.into(),
            ..Self::default()
        }
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Investment => &self.investment,
            Field::EntryPrice => &self.entry_price,
            Field::ClosePrice => &self.close_price,
        }
    }

    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        match field {
            Field::Investment => self.investment = text,
            Field::EntryPrice => self.entry_price = text,
            Field::ClosePrice => self.close_price = text,
        }
    }
}

impl Default for TradeInputs {
    fn default() -> Self {
        Self {
            investment: DEFAULT_INVESTMENT.into(),
            leverage: Leverage::default(),
            entry_price: String::new(),
            close_price: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
