//! HTTP service boundary.
//!
//! Exposes search, browse, and term lookup over a JSON API. The catalog is
//! loaded once before the listener starts and shared read-only between
//! requests; each handler builds its own response.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/api/health` | Health check (version, term count, load time) |
//! | `GET`  | `/api/search?q=<query>` | Tiered term search |
//! | `GET`  | `/api/browse?page=<n>&limit=<n>` | Alphabetical page of terms |
//! | `GET`  | `/api/term/{id}` | Full record for one term |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "query must not be empty" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so browser front-ends
//! served from elsewhere can call the API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::browse::paginate;
use crate::catalog::Catalog;
use crate::config::{BrowseConfig, Config};
use crate::models::{Page, SearchResponse, SlangRecord};
use crate::search::search;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
struct AppState {
    catalog: Arc<Catalog>,
    browse: BrowseConfig,
}

/// Loads the catalog and serves the API on `[server].bind` until the
/// process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let catalog = Arc::new(Catalog::load(&config.data.path));

    let app = router(catalog, config.browse.clone());

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(bind = %config.server.bind, "slang server listening");
    println!("Slang server listening on http://{}", config.server.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the API router over an already-loaded catalog.
pub fn router(catalog: Arc<Catalog>, browse: BrowseConfig) -> Router {
    let state = AppState { catalog, browse };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/search", get(handle_search))
        .route("/api/browse", get(handle_browse))
        .route("/api/term/{id}", get(handle_term))
        .layer(cors)
        .with_state(state)
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, code = %self.code, "{}", self.message);
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

// ============ GET /api/health ============

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    version: String,
    terms: usize,
    /// ISO 8601 timestamp of catalog ingestion.
    loaded_at: String,
}

async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        terms: state.catalog.len(),
        loaded_at: state
            .catalog
            .loaded_at()
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string(),
    })
}

// ============ GET /api/search ============

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Serialize)]
struct SearchBody {
    query: String,
    #[serde(flatten)]
    response: SearchResponse,
}

async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchBody>, AppError> {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(bad_request("query must not be empty"));
    }

    let response = search(&query, state.catalog.records());
    debug!(
        query = %query,
        results = response.total_results,
        ms = response.execution_time,
        "search"
    );

    Ok(Json(SearchBody { query, response }))
}

// ============ GET /api/browse ============

#[derive(Deserialize)]
struct BrowseParams {
    page: Option<String>,
    limit: Option<String>,
}

/// Leading integer of `raw`, ignoring anything after the digits, so
/// `"1.5"` reads as 1 and `"2abc"` as 2. `None` when no digits lead.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let digits_from = usize::from(s.starts_with(['+', '-']));
    let end = s[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_from);
    if end == digits_from {
        return None;
    }
    s[..end].parse().ok()
}

/// Parses an optional positive integer query parameter.
fn parse_positive(name: &str, raw: Option<&str>, default: i64) -> Result<i64, AppError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match leading_integer(raw) {
        Some(n) if n >= 1 => Ok(n),
        _ => Err(bad_request(format!(
            "invalid {}: expected an integer >= 1, got '{}'",
            name, raw
        ))),
    }
}

async fn handle_browse(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Result<Json<Page>, AppError> {
    let page = parse_positive("page", params.page.as_deref(), 1)?;
    let limit = parse_positive(
        "limit",
        params.limit.as_deref(),
        state.browse.default_limit,
    )?;
    if limit > state.browse.max_limit {
        return Err(bad_request(format!(
            "invalid limit: must be <= {}",
            state.browse.max_limit
        )));
    }

    let result = paginate(state.catalog.records(), page, limit);
    debug!(page = result.page, limit = result.limit, items = result.items.len(), "browse");

    Ok(Json(result))
}

// ============ GET /api/term/{id} ============

async fn handle_term(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SlangRecord>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(format!("term not found: {}", id)))
}
