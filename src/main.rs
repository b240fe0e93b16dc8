use anyhow::Result;
use clap::{Arg, Command};
use dotenv::dotenv;

mod api;
mod config;
mod error;
mod moderation;
mod review;
mod ui;
mod workflow;

use api::ApiClient;
use ui::ReviewUI;
use workflow::ReviewWorkflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (ignore errors if file doesn't exist)
    dotenv().ok();

    let matches = Command::new("rentease-console")
        .version("0.1.0")
        .about("Terminal dashboard for moderating RentEase property reviews")
        .arg(
            Arg::new("api-base")
                .long("api-base")
                .value_name("URL")
                .help("Base URL of the review API")
                .required(false),
        )
        .arg(
            Arg::new("role")
                .long("role")
                .value_name("ROLE")
                .help("Starting role: tenant, owner or admin")
                .required(false),
        )
        .arg(
            Arg::new("user-id")
                .long("user-id")
                .value_name("USER_ID")
                .help("Acting user id (defaults to the role's demo user)")
                .required(false),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .value_name("N")
                .help("How many reviews to request per load")
                .required(false),
        )
        .get_matches();

    let config = config::Config::from_args_and_env(&matches)?;
    init_logging()?;

    let session = config.session();
    let client = ApiClient::new(config.api_base_url.clone(), session.clone());
    let workflow = ReviewWorkflow::new(client, session, config.page_size);

    let mut ui = ReviewUI::new(workflow);
    ui.run().await?;

    Ok(())
}

/// The TUI owns the terminal, so logs go to a file instead of stdout.
fn init_logging() -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("rentease-console.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
