use dotenvy::dotenv;
use tracing::info;

use game_catalog::app;
use game_catalog::config::settings::AppConfig;
use game_catalog::infrastructure::db::pool;
use game_catalog::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new().expect("missing required environment variables");

    let db = pool::connect_to_db(&config.database_url)
        .await
        .expect("failed to connect to database");

    let port = config.server_port;
    let state = AppState::new(config, db);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await.unwrap();
}
