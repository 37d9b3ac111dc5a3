mod api;
mod app;
mod config;
mod events;
mod ui;
mod util;

use crate::api::client::{ApiClient, ApiError};
use crate::app::state::App;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let cli = config::Cli::parse();
    config::init_logging(&cli)?;
    log::info!("starting dashboard against {}", cli.base_url);

    let client = Arc::new(ApiClient::new(&cli.base_url, cli.timeout())?);
    let mut app = App::new();

    // io::Error converts into ApiError::Io
    events::run::run_app(&mut app, client).await?;
    log::info!("dashboard closed");
    Ok(())
}
