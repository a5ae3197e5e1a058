use anyhow::{Context, Result};
use clap::Parser;
use log::*;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod report;
mod request;

use cli::Cli;
use config::Config;
use control::TariffChange;
use report::PushReport;
use request::PushRequest;

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::read();

    init_logging(&config);
    debug!("Using configuration {:?}", config);

    let request = PushRequest::read(cli.input_path().map(|path| path.as_path()))?;
    let force_push = request.force_push(cli.force, config.default_force_push);

    // Flag is validated before the diff is inspected
    let force_push =
        control::force_push_from_value(&force_push).context("Unable to evaluate push request")?;
    let change = TariffChange::from(request.tariff_change);
    let decision =
        control::evaluate(force_push, &change).context("Unable to evaluate push request")?;

    match change.len() {
        Some(entries) => info!("Tariff change has {} entries", entries),
        None => info!("No tariff change was computed"),
    }
    if decision.should_push {
        info!("Tariff should be pushed ({})", decision.reason);
    } else {
        info!("Tariff is unchanged, skipping push");
    }

    let report = PushReport::new(decision, &change, OffsetDateTime::now_utc())?;
    if cli.json || config.json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}
