//! farm-server - HTTP stub for the smart farming dashboard.

use clap::Parser;
use farm_server::config::Args;
use farm_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let state = farm_server::AppState::new();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = ServerConfig::from(Args::parse());
    farm_server::serve(config, state).await
}
