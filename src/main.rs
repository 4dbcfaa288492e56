use std::io;

use clap::Parser;

use pnlcalc::cli::Cli;
use pnlcalc::config::AppConfig;
use pnlcalc::session::Session;
use pnlcalc::terminal::{self, about};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.about {
        println!("{}", about());
        return Ok(());
    }

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(config.log_json);

    let metrics_handle = match pnlcalc::metrics::init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Metrics disabled");
            None
        }
    };

    let mut session = Session::new(&config);
    let calc = cli.seed(&mut session);

    if let Some(request) = cli.one_shot() {
        return terminal::run_once(&mut session, calc, &request, io::stdout().lock());
    }

    tracing::info!(side = %session.side(), leverage = %session.leverage(), "Session started");

    terminal::run_interactive(
        &mut session,
        io::stdin().lock(),
        io::stdout().lock(),
        metrics_handle.as_ref(),
    )?;

    tracing::info!("Session ended");
    Ok(())
}

fn init_tracing(json: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}
