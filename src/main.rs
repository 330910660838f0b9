use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

mod models;
mod routes;
mod services;
mod utils;

use routes::{health::health_check, summarize::summarize_router};

fn build_app(api_router: Router) -> Router {
    Router::new()
        .route("/", get(health_check))
        .merge(api_router)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("lecture_service=info,tower_http=info")
        .init();

    let app = build_app(summarize_router());

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Lecture service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
