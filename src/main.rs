use axum::http::HeaderValue;
use forum_server::{config::Config, db, routes, store::SqliteMessageStore, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forum_server=info".into()),
        )
        .init();

    let config = Config::from_env();

    // Initialize database
    let pool = db::init_pool(&config.database_path)
        .await
        .expect("Failed to initialize database");

    let state = Arc::new(AppState {
        store: Arc::new(SqliteMessageStore::new(pool)),
    });

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .expect("Invalid CORS_ORIGIN");

    // Build router
    let app = routes::build_router(state).layer(routes::cors_layer(origin));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");

    tracing::info!("Forum server running on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
