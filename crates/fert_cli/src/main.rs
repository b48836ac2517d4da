use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fert_core::Classifier;
use fert_inference::{load_model, Config, DEFAULT_MODEL_PATH};
use fert_web::{AppState, ServerConfig};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve fertilizer recommendations from a pretrained model", long_about = None)]
pub struct Cli {
    /// Path to the pretrained model artifact (JSON random forest)
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    #[arg(long, default_value_t = 8000)]
    port: u16,
    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn init_logging(level: Level) {
    if !tracing::dispatcher::has_been_set() {
        tracing_subscriber::fmt().with_max_level(level).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    info!("📦 Loading model from {}", cli.model.display());
    let model = load_model(&Config::new(&cli.model))
        .with_context(|| format!("cannot start without a model ({})", cli.model.display()))?;
    info!("✨ Model ready (using {})", model.name());

    let server = ServerConfig {
        host: cli.host,
        port: cli.port,
    };
    fert_web::serve(&server, AppState::new(model))
        .await
        .with_context(|| format!("server on {}:{} failed", server.host, server.port))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["fert"]);
        assert_eq!(cli.model, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 8000);
        assert_eq!(cli.log_level, Level::INFO);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "fert",
            "--model",
            "models/forest.json",
            "--port",
            "9000",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.model, PathBuf::from("models/forest.json"));
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.log_level, Level::DEBUG);
    }
}
