pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use answer_core::EvaluationSettings;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<EvaluationSettings>,
}

impl AppState {
    pub fn new(settings: EvaluationSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/settings", get(routes::settings::get_global))
        .route("/api/answers/align", post(routes::answers::align_answer))
        .route("/api/answers/highlight", post(routes::answers::highlight))
        .route("/api/comparisons/validate", post(routes::comparisons::validate))
        .route("/api/cards/evaluate", post(routes::cards::evaluate_card))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Loading configuration...");
    let config = Config::from_env()?;
    tracing::info!(
        case_insensitive = config.evaluation.case_insensitive,
        "Evaluation settings loaded"
    );

    let app = router(AppState::new(config.evaluation.clone()));

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
