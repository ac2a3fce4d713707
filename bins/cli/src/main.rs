//! credrisk CLI
//!
//! Main entry point for the preliminary credit-risk report pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use credrisk_cli::{Args, run, settings::with_legacy_env};
use credrisk_narrative::{ChatCompletionsGenerator, NarrativeGenerator, StaticNarrative};
use credrisk_shared::{AppConfig, AppError};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credrisk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match execute(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            eprintln!("Erro: {err}");
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

async fn execute(args: Args) -> Result<(), AppError> {
    let config = AppConfig::load_with(args.config.as_deref())?;
    let out_dir = args
        .out
        .unwrap_or_else(|| PathBuf::from(&config.output.dir));

    let generator: Box<dyn NarrativeGenerator> = if args.skip_narrative {
        info!("Narrative service skipped");
        Box::new(StaticNarrative::offline())
    } else {
        let settings = with_legacy_env(config.narrative);
        let client = ChatCompletionsGenerator::new(&settings)?;
        info!(model = client.model(), "Narrative service configured");
        Box::new(client)
    };

    let output = run(&args.input, &out_dir, generator.as_ref()).await?;

    println!("Gerado: {}", output.report_path.display());
    println!("Contexto: {}", output.context_path.display());
    Ok(())
}
