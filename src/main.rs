mod app;
mod config;
mod detect;
mod domain;
mod guidance;
mod infrastructure;
mod quiz;
mod responder;
mod session;

use anyhow::Result;
use infrastructure::{directories, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let app = app::AssistantApp::initialize(config)?;
    app.run().await
}
