use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use cookbook::api::client::RecipeClient;
use cookbook::api::transport::HttpTransport;
use cookbook::core::config::{self, CliOverrides};
use cookbook::core::error::ErrorKind;
use cookbook::core::state::App;
use cookbook::tui;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "cookbook", about = "Terminal client for a recipe service")]
struct Args {
    /// Config file to use instead of ~/.cookbook/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the recipe service
    #[arg(long)]
    base_url: Option<String>,

    /// Credential sent with every request
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut loaded = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("cookbook: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut resolved = config::resolve(
        &loaded.config,
        &CliOverrides {
            base_url: args.base_url,
            api_key: args.api_key,
            timeout_secs: args.timeout,
        },
    );

    // Initialize file logger; the terminal belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    loaded.notes.flush();
    resolved.notes.flush();

    info!(
        "Cookbook starting up: base_url={}, collection={}",
        resolved.base_url, resolved.collection_path
    );

    let transport = match HttpTransport::new(&resolved) {
        Ok(t) => t,
        Err(e) => {
            error!("Cannot build HTTP transport: {e}");
            eprintln!("cookbook: {e}");
            return ExitCode::FAILURE;
        }
    };
    let client = Arc::new(RecipeClient::new(
        Arc::new(transport),
        &resolved.collection_path,
    ));

    let app = match client.fetch_page(None).await {
        Ok(page) => App::new(page),
        Err(e) if e.kind == ErrorKind::NetworkError => {
            error!("Startup fetch failed: {e}");
            eprintln!("cookbook: {e} ({})", resolved.base_url);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            warn!("Startup fetch failed, showing error screen: {e}");
            App::with_startup_error(e)
        }
    };

    match tui::run(app, client) {
        Ok(()) => {
            info!("Cookbook exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Terminal error: {e}");
            eprintln!("cookbook: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
