use std::fmt::Write;

use crate::calculator::Calculation;
use crate::models::{Field, PositionSide};
use crate::session::Session;

pub const PROGRAM_NAME: &str = "Profit and Loss Calculator";
const DESCRIPTION: &str = "A simple profit and loss calculator.\n\
Best used to calculate potential outcome of trades on futures markets.";

pub fn about() -> String {
    format!(
        "{PROGRAM_NAME} {}\n{DESCRIPTION}\nLicense: BSD-3-Clause",
        env!("CARGO_PKG_VERSION")
    )
}

/// Draw the form: side buttons and inputs on top, results below.
/// Fields that failed validation are suffixed with `[!]`.
pub fn render_form(session: &Session, calc: &Calculation) -> String {
    let inputs = session.inputs();
    let symbol = session.currency_symbol();
    let mut out = String::new();

    let button = |side: PositionSide| {
        if session.side() == side {
            format!("[*{side}*]")
        } else {
            format!("[ {side} ]")
        }
    };

    // Writing into a String cannot fail.
    let _ = writeln!(out, "== {PROGRAM_NAME} ==");
    let _ = writeln!(
        out,
        "{} {}",
        button(PositionSide::Long),
        button(PositionSide::Short)
    );

    for field in Field::ALL {
        let flag = if calc.has_error(field) { " [!]" } else { "" };
        let label = format!("{}:", field.label());
        let _ = writeln!(out, "{label:<14}{}{flag}", inputs.text(field));
        if field == Field::Investment {
            let _ = writeln!(out, "{:<14}{}", "Leverage:", inputs.leverage);
        }
    }

    let _ = writeln!(out, "{:<20}{}", "Potential Profit:", calc.profit_display(symbol));
    let _ = write!(
        out,
        "{:<20}{}",
        "Liquidation Price:",
        calc.liquidation_display(symbol)
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_form() {
        let session = Session::default();
        let text = render_form(&session, &session.calculate());

        assert!(text.contains("[*Long*] [ Short ]"));
        assert!(text.contains("Investment:   1000\n"));
        assert!(text.contains("Leverage:     1x"));
        assert!(text.contains("Entry Price:   [!]"));
        assert!(text.contains("Target Price:  [!]"));
        assert!(text.contains("Potential Profit:   NaN"));
        assert!(text.ends_with("Liquidation Price:  NaN"));
    }

    #[test]
    fn test_render_valid_short() {
        let mut session = Session::default();
        session.select_side(PositionSide::Short);
        session.set_leverage(10);
        session.set_entry_price("100");
        let calc = session.set_close_price("110");
        let text = render_form(&session, &calc);

        assert!(text.contains("[ Long ] [*Short*]"));
        assert!(!text.contains("[!]"));
        assert!(text.contains("Potential Profit:   $-1000.00"));
        assert!(text.contains("Liquidation Price:  $110.00"));
    }

    #[test]
    fn test_about_mentions_program() {
        let text = about();
        assert!(text.starts_with(PROGRAM_NAME));
        assert!(text.contains("futures markets"));
    }
}
