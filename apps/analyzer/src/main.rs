use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod batch;

use clinical_scoring_cell::HealthAnalyzer;
use shared_config::AppConfig;

fn main() -> ExitCode {
    // Loading Env Vars
    dotenv().ok();

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<()> {
    let batch_args = batch::BatchArgs::parse(&args)?;

    let config = AppConfig::from_env();
    let analyzer = HealthAnalyzer::from_config(&config).context("Failed to load program catalog")?;
    info!(
        "Starting clinical analyzer with {} lifestyle programs",
        analyzer.catalog().len()
    );

    let patients = batch::load_patients(&batch_args.records_path)?;
    let selected = batch::select_patients(patients, batch_args.patient_id.as_deref())?;
    let analyses = batch::analyze_all(&analyzer, &selected)?;

    println!("{}", batch::render(&analyses, config.pretty_json)?);
    info!("Analyzed {} patients", analyses.len());

    Ok(())
}
