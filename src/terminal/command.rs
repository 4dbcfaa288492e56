use std::num::IntErrorKind;

use thiserror::Error;

use crate::models::PositionSide;
use crate::session::Event;

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Form(Event),
    ToggleSide,
    About,
    Metrics,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (type `help` for a list)")]
    Unknown(String),

    #[error("leverage must be a whole number, got {0:?}")]
    InvalidLeverage(String),
}

pub const HELP: &str = "\
Commands:
  long | short | toggle      select position side
  investment <amount>        set investment (alias: inv)
  leverage <1-100>           set leverage (alias: lev)
  entry <price>              set entry price
  close <price>              set target price (alias: target)
  reset                      restore defaults
  about                      show program information
  metrics                    show calculation counters
  help                       show this list
  quit                       leave (alias: exit, q)";

impl Command {
    /// Parse a prompt line. Returns `Ok(None)` for blank lines.
    ///
    /// A field command with no value clears that field, the same as emptying
    /// the text box.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "long" => Command::Form(Event::SideSelected(PositionSide::Long)),
            "short" => Command::Form(Event::SideSelected(PositionSide::Short)),
            "toggle" => Command::ToggleSide,
            "investment" | "inv" => Command::Form(Event::InvestmentChanged(rest.into())),
            "entry" => Command::Form(Event::EntryPriceChanged(rest.into())),
            "close" | "target" => Command::Form(Event::ClosePriceChanged(rest.into())),
            "leverage" | "lev" => {
                let digits = rest.trim_end_matches(['x', 'X']);
                Command::Form(Event::LeverageChanged(parse_leverage(digits, rest)?))
            }
            "reset" => Command::Form(Event::Reset),
            "about" => Command::About,
            "metrics" => Command::Metrics,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.into())),
        };

        Ok(Some(command))
    }
}

/// Whole numbers too large for `i64` saturate; the session clamps them anyway.
fn parse_leverage(digits: &str, raw: &str) -> Result<i64, CommandError> {
    match digits.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(CommandError::InvalidLeverage(raw.into())),
        },
    }
}
