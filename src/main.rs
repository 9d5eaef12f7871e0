use dotenvy::dotenv;
use news_api::config::{AppState, Config};
use news_api::{database, seeders};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("news_api=info,tower_http=info")),
        )
        .init();

    let cfg = Config::init()?;
    tracing::info!("Starting News API...");

    // 1. Database Connection + Migrations
    let db = database::connect(&cfg).await?;
    tracing::info!("Database connected and migrated");

    // 2. Database Seeding
    if cfg.seed_on_start {
        if let Err(e) = seeders::run_seeders(&db).await {
            tracing::error!("Seeding failed: {}", e);
        }
    }

    // 3. Initialize Router
    let state = AppState { db: db.clone() };
    let app = news_api::app(state);

    // 4. Start Server
    let addr: SocketAddr = format!("{}:{}", cfg.server_host, cfg.server_port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");
    database::close(db).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
