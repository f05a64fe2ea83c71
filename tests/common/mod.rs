use axum_test::TestServer;
use repairtrack::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Creates an AppState for tests
///
/// # Arguments
/// * `pool` - SQLite connection pool provisioned by `#[sqlx::test]`
///
/// # Returns
/// Arc<AppState> with every repository wired to the pool
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Creates a TestServer for tests
///
/// # Arguments
/// * `state` - AppState to serve from
///
/// # Returns
/// TestServer ready to run requests against the full router
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = repairtrack::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
