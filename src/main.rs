mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    if config.backend.is_configured() {
        tracing::info!(project = %config.backend.project_id, collection = %config.backend.collection, "backend configured");
    } else {
        tracing::warn!("FIREBASE_API_KEY or FIREBASE_PROJECT_ID not set; sign-in and posts will fail");
    }

    let port = config.port;
    let app = routes::leptos_app(config.backend).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "quill listening");
    axum::serve(listener, app).await.expect("server failed");
}
