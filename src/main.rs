//! Entry point del server Latimere Host

use latimere_host::{AppState, Config, create_router, stream};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Configurazione dalle variabili d'ambiente
    let config = Config::from_env()?;
    config.print_info();

    // 2. Pool di connessioni + migrazioni
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&pool).await?;
    info!("Database migrated");

    // 3. Change feed, mailer e stato condiviso
    let (feed, rx) = stream::ChangeFeed::channel();
    let mailer = latimere_host::mail::Mailer::from_config(&config)?;
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let state = Arc::new(AppState::new(pool, config, feed, mailer));

    // 4. Trigger worker a valle del feed
    stream::spawn(state.clone(), rx);

    // 5. Router e server HTTP
    let app = create_router(state).layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
