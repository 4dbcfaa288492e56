use clap::Parser;

use crate::calculator::Calculation;
use crate::models::PositionSide;
use crate::session::Session;
use crate::terminal::OneShot;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Profit/loss and liquidation price for leveraged positions")]
pub struct Cli {
    /// Position side: long or short
    #[arg(long, value_parser = parse_side, default_value = "long")]
    pub side: PositionSide,

    /// Investment amount (defaults to PNLCALC_DEFAULT_INVESTMENT or 1000)
    #[arg(long, allow_hyphen_values = true)]
    pub investment: Option<String>,

    /// Leverage multiplier, clamped to 1..=100
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub leverage: i64,

    /// Entry price
    #[arg(long, allow_hyphen_values = true)]
    pub entry: Option<String>,

    /// Target (close) price
    #[arg(long, alias = "target", allow_hyphen_values = true)]
    pub close: Option<String>,

    /// Print a JSON snapshot instead of the form
    #[arg(long)]
    pub json: bool,

    /// Print program information and exit
    #[arg(long)]
    pub about: bool,
}

fn parse_side(s: &str) -> Result<PositionSide, String> {
    PositionSide::from_input_str(s).ok_or_else(|| format!("expected long or short, got {s:?}"))
}

impl Cli {
    /// Apply side, leverage and investment flags to a fresh session.
    pub fn seed(&self, session: &mut Session) -> Calculation {
        session.select_side(self.side);
        let calc = session.set_leverage(self.leverage);
        match &self.investment {
            Some(investment) => session.set_investment(investment.as_str()),
            None => calc,
        }
    }

    /// Price flags or `--json` ask for a single render instead of the prompt.
    pub fn one_shot(&self) -> Option<OneShot> {
        if self.entry.is_none() && self.close.is_none() && !self.json {
            return None;
        }
        Some(OneShot {
            entry: self.entry.clone(),
            close: self.close.clone(),
            json: self.json,
        })
    }
}
