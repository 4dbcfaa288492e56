pub mod command;
pub mod render;

use std::io::{BufRead, Write};

use metrics_exporter_prometheus::PrometheusHandle;

pub use command::{Command, CommandError};
pub use render::{about, render_form};

use crate::calculator::Calculation;
use crate::session::Session;

const PROMPT: &str = "> ";

/// Price edits and output format for a single non-interactive render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneShot {
    pub entry: Option<String>,
    pub close: Option<String>,
    pub json: bool,
}

/// Apply the one-shot price edits on top of `calc`, the session's current
/// result, and write either the form or a JSON snapshot.
pub fn run_once<W: Write>(
    session: &mut Session,
    mut calc: Calculation,
    request: &OneShot,
    mut out: W,
) -> anyhow::Result<()> {
    if let Some(entry) = &request.entry {
        calc = session.set_entry_price(entry.as_str());
    }
    if let Some(close) = &request.close {
        calc = session.set_close_price(close.as_str());
    }

    if request.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session.snapshot(&calc))?)?;
    } else {
        writeln!(out, "{}", render_form(session, &calc))?;
    }
    out.flush()?;
    Ok(())
}

/// Drive a session from line-oriented input until `quit` or end of input.
/// Each accepted form command re-renders the whole form.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    reader: R,
    mut out: W,
    metrics: Option<&PrometheusHandle>,
) -> anyhow::Result<()> {
    writeln!(out, "{}", render_form(session, &session.calculate()))?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in reader.lines() {
        let line = line?;

        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => {
                tracing::debug!("Quit requested");
                return Ok(());
            }
            Ok(Some(Command::Form(event))) => {
                tracing::debug!(?event, "Form event");
                let calc = session.apply(event);
                writeln!(out, "{}", render_form(session, &calc))?;
            }
            Ok(Some(Command::ToggleSide)) => {
                let calc = session.toggle_side();
                writeln!(out, "{}", render_form(session, &calc))?;
            }
            Ok(Some(Command::About)) => writeln!(out, "{}", about())?,
            Ok(Some(Command::Help)) => writeln!(out, "{}", command::HELP)?,
            Ok(Some(Command::Metrics)) => match metrics {
                Some(handle) => write!(out, "{}", handle.render())?,
                None => writeln!(out, "metrics recorder not installed")?,
            },
            Err(e) => {
                tracing::debug!(error = %e, line = %line, "Rejected command");
                writeln!(out, "{e}")?;
            }
        }

        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
