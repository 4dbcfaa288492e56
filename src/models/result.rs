use serde::Serialize;

/// Outcome of a single compute. `Invalid` is shown as `NaN` for both outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TradeResult {
    Valid { profit: f64, liquidation_price: f64 },
    Invalid,
}

impl TradeResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, TradeResult::Valid { .. })
    }

    pub fn profit(&self) -> Option<f64> {
        match self {
            TradeResult::Valid { profit, .. } => Some(*profit),
            TradeResult::Invalid => None,
        }
    }

    pub fn liquidation_price(&self) -> Option<f64> {
        match self {
            TradeResult::Valid {
                liquidation_price, ..
            } => Some(*liquidation_price),
            TradeResult::Invalid => None,
        }
    }
}
