pub mod calculator;
pub mod cli;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod session;
pub mod terminal;

pub use calculator::{compute, Calculation};
pub use models::{Field, Leverage, PositionSide, TradeInputs, TradeResult};
pub use session::{Event, Session};
