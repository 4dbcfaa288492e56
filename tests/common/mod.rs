use pnlcalc::{Leverage, Session, TradeInputs};

/// Build raw form inputs for direct `compute` calls.
#[allow(dead_code)]
pub fn trade_inputs(investment: &str, leverage: i64, entry: &str, close: &str) -> TradeInputs {
    TradeInputs {
        investment: investment.into(),
        leverage: Leverage::clamped(leverage),
        entry_price: entry.into(),
        close_price: close.into(),
    }
}

/// A default session with leverage, entry and close filled in.
#[allow(dead_code)]
pub fn filled_session(leverage: i64, entry: &str, close: &str) -> Session {
    let mut session = Session::default();
    session.set_leverage(leverage);
    session.set_entry_price(entry);
    session.set_close_price(close);
    session
}

/// Relative float comparison for formula checks.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
