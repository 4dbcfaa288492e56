use std::collections::BTreeSet;

use serde::Serialize;

use crate::errors::{CalcError, InvalidReason};
use crate::models::{Field, Leverage, PositionSide, TradeInputs, TradeResult};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const NAN_DISPLAY: &str = "NaN";

/// Result of one compute: the derived numbers plus every field that failed
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub result: TradeResult,
    pub field_errors: BTreeSet<Field>,
}

impl Calculation {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.field_errors.contains(&field)
    }

    pub fn profit_display(&self, symbol: &str) -> String {
        self.result
            .profit()
            .map(|v| format_amount(v, symbol))
            .unwrap_or_else(|| NAN_DISPLAY.into())
    }

    pub fn liquidation_display(&self, symbol: &str) -> String {
        self.result
            .liquidation_price()
            .map(|v| format_amount(v, symbol))
            .unwrap_or_else(|| NAN_DISPLAY.into())
    }
}

/// Parse a raw text field. Accepts anything that reads as a finite real > 0.
pub fn validate_field(field: Field, raw: &str) -> Result<f64, CalcError> {
    let value: f64 = raw.trim().parse().map_err(|_| CalcError::InvalidInput {
        field,
        reason: InvalidReason::NotANumber,
    })?;

    if !value.is_finite() {
        return Err(CalcError::InvalidInput {
            field,
            reason: InvalidReason::NotFinite,
        });
    }
    if value <= 0.0 {
        return Err(CalcError::InvalidInput {
            field,
            reason: InvalidReason::NotPositive,
        });
    }

    Ok(value)
}

/// Leveraged profit on `investment` when price moves from `entry` to `close`.
pub fn profit(
    side: PositionSide,
    investment: f64,
    leverage: Leverage,
    entry: f64,
    close: f64,
) -> f64 {
    let move_pct = match side {
        PositionSide::Long => (close - entry) / entry,
        PositionSide::Short => (entry - close) / entry,
    };
    investment * leverage.as_f64() * move_pct
}

/// Price at which the margin is fully consumed. Independent of investment.
pub fn liquidation_price(side: PositionSide, leverage: Leverage, entry: f64) -> f64 {
    let margin_ratio = 1.0 / leverage.as_f64();
    match side {
        PositionSide::Long => entry * (1.0 - margin_ratio),
        PositionSide::Short => entry * (1.0 + margin_ratio),
    }
}

/// Validate all three text fields, then compute. Every field is always
/// checked so the caller can flag each bad one.
pub fn compute(inputs: &TradeInputs, side: PositionSide) -> Calculation {
    let investment = validate_field(Field::Investment, &inputs.investment);
    let entry = validate_field(Field::EntryPrice, &inputs.entry_price);
    let close = validate_field(Field::ClosePrice, &inputs.close_price);

    match (investment, entry, close) {
        (Ok(investment), Ok(entry), Ok(close)) => {
            let leverage = inputs.leverage;
            let profit = profit(side, investment, leverage, entry, close);
            let liquidation_price = liquidation_price(side, leverage, entry);

            // Finite inputs can still overflow; no field is at fault then.
            let result = if profit.is_finite() && liquidation_price.is_finite() {
                TradeResult::Valid {
                    profit,
                    liquidation_price,
                }
            } else {
                tracing::debug!(%side, %leverage, "Result overflowed f64");
                TradeResult::Invalid
            };

            Calculation {
                result,
                field_errors: BTreeSet::new(),
            }
        }
        (investment, entry, close) => {
            let field_errors = [investment.err(), entry.err(), close.err()]
                .into_iter()
                .flatten()
                .map(|e| {
                    tracing::trace!(error = %e, "Field rejected");
                    e.field()
                })
                .collect();
            Calculation {
                result: TradeResult::Invalid,
                field_errors,
            }
        }
    }
}

/// Two-decimal fixed point with a currency prefix, sign after the symbol.
pub fn format_amount(value: f64, symbol: &str) -> String {
    format!("{symbol}{value:.2}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(investment: &str, leverage: i64, entry: &str, close: &str) -> TradeInputs {
        TradeInputs {
            investment: investment.into(),
            leverage: Leverage::clamped(leverage),
            entry_price: entry.into(),
            close_price: close.into(),
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_long_example() {
        let calc = compute(&inputs("1000", 10, "100", "110"), PositionSide::Long);
        assert!(calc.field_errors.is_empty());
        assert_eq!(calc.profit_display("$"), "$1000.00");
        assert_eq!(calc.liquidation_display("$"), "$90.00");
    }

    #[test]
    fn test_short_example() {
        let calc = compute(&inputs("1000", 10, "100", "110"), PositionSide::Short);
        assert_eq!(calc.profit_display("$"), "$-1000.00");
        assert_eq!(calc.liquidation_display("$"), "$110.00");
    }

    #[test]
    fn test_short_is_negated_long() {
        let cases = [
            ("250", 3, "42.5", "40.1"),
            ("1", 100, "0.0001", "0.00012"),
            ("99999", 57, "31000", "31850.75"),
        ];
        for (inv, lev, entry, close) in cases {
            let i = inputs(inv, lev, entry, close);
            let long = compute(&i, PositionSide::Long).result.profit().unwrap();
            let short = compute(&i, PositionSide::Short).result.profit().unwrap();
            assert!(approx_eq(short, -long), "{short} vs {long}");
        }
    }

    #[test]
    fn test_long_formula() {
        let calc = compute(&inputs("500", 4, "80", "100"), PositionSide::Long);
        // 500 * 4 * (20 / 80) = 500
        assert!(approx_eq(calc.result.profit().unwrap(), 500.0));
    }

    #[test]
    fn test_liquidation_ignores_investment_and_close() {
        let a = compute(&inputs("10", 20, "200", "1"), PositionSide::Long);
        let b = compute(&inputs("123456", 20, "200", "999"), PositionSide::Long);
        assert_eq!(a.result.liquidation_price(), b.result.liquidation_price());
        assert!(approx_eq(a.result.liquidation_price().unwrap(), 190.0));
    }

    #[test]
    fn test_unit_leverage_liquidation() {
        let long = compute(&inputs("1000", 1, "64.2", "70"), PositionSide::Long);
        let short = compute(&inputs("1000", 1, "64.2", "70"), PositionSide::Short);
        assert_eq!(long.result.liquidation_price(), Some(0.0));
        assert!(approx_eq(short.result.liquidation_price().unwrap(), 128.4));
    }

    #[test]
    fn test_zero_leverage_never_divides() {
        let calc = compute(&inputs("1000", 0, "100", "110"), PositionSide::Long);
        assert_eq!(calc.liquidation_display("$"), "$0.00");
        assert_eq!(calc.profit_display("$"), "$100.00");
    }

    #[test]
    fn test_each_invalid_field_reported() {
        let calc = compute(&inputs("abc", 5, "-3", "0"), PositionSide::Long);
        assert_eq!(calc.result, TradeResult::Invalid);
        assert_eq!(
            calc.field_errors.into_iter().collect::<Vec<_>>(),
            vec![Field::Investment, Field::EntryPrice, Field::ClosePrice]
        );
    }

    #[test]
    fn test_single_invalid_field_collapses_result() {
        let calc = compute(&inputs("1000", 5, "100", ""), PositionSide::Short);
        assert!(!calc.is_valid());
        assert!(calc.has_error(Field::ClosePrice));
        assert!(!calc.has_error(Field::EntryPrice));
        assert_eq!(calc.profit_display("$"), "NaN");
        assert_eq!(calc.liquidation_display("$"), "NaN");
    }

    #[test]
    fn test_overflowing_result_is_invalid() {
        let calc = compute(&inputs("1e308", 100, "1", "3"), PositionSide::Long);
        assert_eq!(calc.result, TradeResult::Invalid);
        assert!(calc.field_errors.is_empty());
        assert_eq!(calc.profit_display("$"), "NaN");
        assert_eq!(calc.liquidation_display("$"), "NaN");
    }

    #[test]
    fn test_validate_field_reasons() {
        assert_eq!(validate_field(Field::Investment, " 12.5 "), Ok(12.5));
        assert_eq!(validate_field(Field::Investment, "1e3"), Ok(1000.0));
        assert!(matches!(
            validate_field(Field::EntryPrice, "twelve"),
            Err(CalcError::InvalidInput { reason: InvalidReason::NotANumber, .. })
        ));
        assert!(matches!(
            validate_field(Field::EntryPrice, "inf"),
            Err(CalcError::InvalidInput { reason: InvalidReason::NotFinite, .. })
        ));
        assert!(matches!(
            validate_field(Field::ClosePrice, "NaN"),
            Err(CalcError::InvalidInput { reason: InvalidReason::NotFinite, .. })
        ));
        assert!(matches!(
            validate_field(Field::ClosePrice, "0"),
            Err(CalcError::InvalidInput { reason: InvalidReason::NotPositive, .. })
        ));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(523.812, "$"), "$523.81");
        assert_eq!(format_amount(-0.5, "€"), "€-0.50");
        assert_eq!(format_amount(0.0, "$"), "$0.00");
    }
}
