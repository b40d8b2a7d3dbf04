use clap::Parser;
use notify::{Notifier, SmtpMailer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use warranty::config::Config;
use warranty::state::AppState;

#[derive(Parser)]
#[command(about = "Warranty claim intake and status-tracking service")]
struct Cli {
    /// Path to the YAML config file
    #[arg(long, default_value = "warranty.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;
    config.validate()?;

    let mailer = SmtpMailer::new(&config.smtp)?;
    let notifier = Notifier::new(Arc::new(mailer), config.smtp.staff_mailbox.clone());
    let state = AppState::new(config, notifier)?;

    warranty::serve(state).await?;
    Ok(())
}
