use clap::Parser;
use dotenvy::dotenv;
use std::env;

use expense_tracker::{
    api::{config::ApiConfig, router::build_router},
    utils::app_config::{AppConfig, StorageConfig},
};

#[derive(Parser, Debug)]
#[command(
    name = "expense-tracker",
    about = "Expense tracking HTTP service backed by a JSON file"
)]
struct ServerArgs {
    #[command(flatten)]
    api: ApiConfig,

    #[command(flatten)]
    storage: StorageConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let args = ServerArgs::parse();

    let app_config = AppConfig::from_storage_config(&args.storage)?;
    tracing::info!("Application configuration loaded successfully");

    let router = build_router(app_config);

    let addr = args.api.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Starting expense tracker on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
