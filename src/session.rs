use std::collections::BTreeSet;

use metrics::counter;
use serde::Serialize;

use crate::calculator::{compute, Calculation};
use crate::config::AppConfig;
use crate::models::{Field, Leverage, PositionSide, TradeInputs};

/// A single user action on the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    InvestmentChanged(String),
    EntryPriceChanged(String),
    ClosePriceChanged(String),
    LeverageChanged(i64),
    SideSelected(PositionSide),
    Reset,
}

/// Owns the form state for the lifetime of the process. Every mutation
/// recomputes and returns a fresh [`Calculation`]; nothing is cached.
///
/// The configured investment only seeds the form. Reset always restores
/// [`TradeInputs::default`].
#[derive(Debug, Clone)]
pub struct Session {
    inputs: TradeInputs,
    side: PositionSide,
    currency_symbol: String,
}

/// Serializable view of the form and its outputs.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub side: PositionSide,
    pub investment: String,
    pub leverage: u8,
    pub leverage_label: String,
    pub entry_price: String,
    pub close_price: String,
    pub profit: String,
    pub liquidation_price: String,
    pub invalid_fields: BTreeSet<Field>,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            inputs: TradeInputs::with_investment(config.default_investment.clone()),
            side: PositionSide::Long,
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    pub fn inputs(&self) -> &TradeInputs {
        &self.inputs
    }

    pub fn side(&self) -> PositionSide {
        self.side
    }

    pub fn leverage(&self) -> Leverage {
        self.inputs.leverage
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn set_investment(&mut self, text: impl Into<String>) -> Calculation {
        self.apply(Event::InvestmentChanged(text.into()))
    }

    pub fn set_entry_price(&mut self, text: impl Into<String>) -> Calculation {
        self.apply(Event::EntryPriceChanged(text.into()))
    }

    pub fn set_close_price(&mut self, text: impl Into<String>) -> Calculation {
        self.apply(Event::ClosePriceChanged(text.into()))
    }

    pub fn set_leverage(&mut self, value: i64) -> Calculation {
        self.apply(Event::LeverageChanged(value))
    }

    pub fn select_side(&mut self, side: PositionSide) -> Calculation {
        self.apply(Event::SideSelected(side))
    }

    pub fn toggle_side(&mut self) -> Calculation {
        self.apply(Event::SideSelected(self.side.opposite()))
    }

    pub fn reset(&mut self) -> Calculation {
        self.apply(Event::Reset)
    }

    /// Mutate the form for one event, then recompute.
    pub fn apply(&mut self, event: Event) -> Calculation {
        counter!("session_events_total").increment(1);

        match event {
            Event::InvestmentChanged(text) => self.inputs.set_text(Field::Investment, text),
            Event::EntryPriceChanged(text) => self.inputs.set_text(Field::EntryPrice, text),
            Event::ClosePriceChanged(text) => self.inputs.set_text(Field::ClosePrice, text),
            Event::LeverageChanged(value) => {
                let leverage = Leverage::clamped(value);
                if i64::from(leverage.get()) != value {
                    tracing::debug!(requested = value, applied = %leverage, "Leverage clamped");
                }
                self.inputs.leverage = leverage;
            }
            Event::SideSelected(side) => self.side = side,
            Event::Reset => {
                counter!("session_resets_total").increment(1);
                self.side = PositionSide::Long;
                self.inputs = TradeInputs::default();
                tracing::info!("Form reset to defaults");
            }
        }

        self.recompute()
    }

    /// Compute from the current state without mutating or counting it.
    pub fn calculate(&self) -> Calculation {
        compute(&self.inputs, self.side)
    }

    fn recompute(&self) -> Calculation {
        let calc = self.calculate();

        counter!("calculations_total").increment(1);
        if calc.is_valid() {
            tracing::debug!(
                side = %self.side,
                leverage = %self.inputs.leverage,
                profit = ?calc.result.profit(),
                liquidation_price = ?calc.result.liquidation_price(),
                "Recomputed position"
            );
        } else {
            counter!("invalid_calculations_total").increment(1);
            tracing::debug!(
                side = %self.side,
                invalid_fields = ?calc.field_errors,
                "Recomputed position with invalid inputs"
            );
        }

        calc
    }

    /// Serializable view of the current form alongside `calc`, the result of
    /// the last event applied to it.
    pub fn snapshot(&self, calc: &Calculation) -> SessionSnapshot {
        SessionSnapshot {
            side: self.side,
            investment: self.inputs.investment.clone(),
            leverage: self.inputs.leverage.get(),
            leverage_label: self.inputs.leverage.to_string(),
            entry_price: self.inputs.entry_price.clone(),
            close_price: self.inputs.close_price.clone(),
            profit: calc.profit_display(&self.currency_symbol),
            liquidation_price: calc.liquidation_display(&self.currency_symbol),
            invalid_fields: calc.field_errors.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
