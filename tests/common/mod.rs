use axum_test::TestServer;
use latimere_host::core::{AppState, Config};
use latimere_host::mail::Mailer;
use latimere_host::stream;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// Crea un AppState per i test, con il trigger worker già in ascolto sul feed
///
/// # Arguments
/// * `pool` - Connection pool SQLite (migrato da sqlx::test)
///
/// # Returns
/// Arc<AppState> configurato con mailer disabilitato e config di default
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    let (feed, rx) = stream::ChangeFeed::channel();
    let state = Arc::new(AppState::new(
        pool,
        Config::default(),
        feed,
        Mailer::disabled(),
    ));
    stream::spawn(state.clone(), rx);
    state
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = latimere_host::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Aspetta che il trigger worker abbia drenato il feed
#[allow(dead_code)]
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}
