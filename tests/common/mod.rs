use axum::http::HeaderValue;
use axum::Router;
use forum_server::{routes, store::SqliteMessageStore, AppState};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;

/// Create an in-memory SQLite pool with schema applied.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");

    // Run schema
    let schema = include_str!("../../src/db/schema.sql");
    for statement in schema.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(&pool).await.unwrap();
        }
    }

    pool
}

/// Build a test Axum app with the given pool, CORS configured as in main.
pub fn create_test_app(pool: SqlitePool) -> Router {
    let state = Arc::new(AppState {
        store: Arc::new(SqliteMessageStore::new(pool)),
    });

    let origin = HeaderValue::from_static("http://localhost:5173");
    routes::build_router(state).layer(routes::cors_layer(origin))
}
