use clap::{Parser, Subcommand};
use coin_alert::{pipeline, telemetry, AlertPipeline, AppConfig};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "coin-alert", about = "Forward market-moving BTC/DOGE news to Telegram")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a fixed test message to the configured chat and exit
    Probe,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    telemetry::init_tracing();

    let config = AppConfig::from_env();

    match cli.command {
        Some(Commands::Probe) => {
            let pipeline = AlertPipeline::from_config(&config)?;
            pipeline.send_probe().await?;
            info!("Probe message sent");
        }
        None => {
            info!("Starting coin alert run (state file: {})", config.state_path.display());
            match pipeline::run(&config).await {
                Ok(report) => info!("Sent {} alert(s)", report.notified),
                Err(e) => {
                    error!("Run failed, sent links not saved: {}", e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}
