// Axum server for the dynamic section test view
//
// Routes:
//   /health                                  liveness probe
//   /playpen/dyna-test/:kind/:id/:sectionId  rendered page
//   /api/view-model                          view model as JSON
//   /api/sections                            registry listing

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use anyhow::Context;
use moka::future::Cache;
use std::sync::Arc;

use crate::binder::ViewBinder;
use crate::config::ServerConfig;
use crate::params::RouteParams;
use crate::registry::SectionRegistry;
use crate::section::SectionDescriptor;
use crate::view_model::ViewModel;
use crate::web::handlers::pages::dyna_test_page;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SectionRegistry>,
    /// Rendered pages keyed by raw route parameters
    pub page_cache: Cache<String, String>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let registry = match &config.sections_file {
            Some(path) => SectionRegistry::from_path(path)
                .with_context(|| format!("loading sections from {}", path.display()))?,
            None => {
                tracing::info!("Using built-in section catalog");
                SectionRegistry::builtin()
            }
        };

        tracing::info!(
            "Initializing page cache (capacity {}, ttl {:?})...",
            config.page_cache_capacity,
            config.page_cache_ttl
        );

        Ok(Self::with_registry(
            registry,
            config.page_cache_capacity,
            config.page_cache_ttl,
        ))
    }

    pub fn with_registry(
        registry: SectionRegistry,
        cache_capacity: u64,
        cache_ttl: std::time::Duration,
    ) -> Self {
        let page_cache = Cache::builder()
            .max_capacity(cache_capacity)
            .time_to_live(cache_ttl)
            .build();

        Self {
            registry: Arc::new(registry),
            page_cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Rendered view
        .route("/playpen/dyna-test/:kind/:id/:sectionId", get(dyna_test_page))

        // JSON API
        .route("/api/view-model", get(get_view_model))
        .route("/api/sections", get(list_sections))
        .fallback(not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_view_model(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Json<ViewModel> {
    let mut binder = ViewBinder::new(state.registry.clone());
    binder.activate(&params);
    Json(binder.into_view_model())
}

#[derive(serde::Deserialize, Debug)]
struct SectionsQuery {
    kind: Option<String>,
}

async fn list_sections(
    State(state): State<AppState>,
    Query(query): Query<SectionsQuery>,
) -> Json<Vec<Arc<SectionDescriptor>>> {
    let sections = match query.kind.as_deref() {
        Some(kind) => state.registry.applicable_to(kind).cloned().collect(),
        None => state.registry.iter().cloned().collect(),
    };
    Json(sections)
}

async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Template(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Template(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
