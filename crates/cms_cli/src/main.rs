use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use cms_notion::client::NotionClient;
use cms_notion::config::Config;
use cms_notion::repository::ArticleRepository;
use cms_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: SocketAddr,
    /// Directory served at / for the frontend assets
    #[arg(long, default_value = "./static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = Config::from_env().context("invalid configuration")?;
    let client = NotionClient::new(&config.api_key)?;
    let repository = ArticleRepository::new(Arc::new(client), config.database_id);
    let app = create_app(AppState { repository }, cli.static_dir);

    let listener = tokio::net::TcpListener::bind(cli.addr)
        .await
        .with_context(|| format!("failed to bind {}", cli.addr))?;
    info!("Server is running at http://{}", cli.addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
