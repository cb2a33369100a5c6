//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::planner::{Planner, SearchError, SearchMode, SearchRequest};

use super::dto::*;
use super::state::AppState;

/// Upper limit on `maxroutes` accepted from clients.
const MAX_ROUTES_LIMIT: usize = 100;

/// Upper limit on `maxdepth` accepted from clients.
const MAX_DEPTH_LIMIT: usize = 100;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/routes", get(find_routes))
        .route("/api/stations/search", get(search_stations))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse an optional numeric bound, ignoring malformed values.
fn parse_bound(value: Option<&str>) -> Option<usize> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Returns a trimmed, non-empty parameter value.
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Find routes between two stations.
async fn find_routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesQuery>,
) -> Result<Json<RoutesResponse>, AppError> {
    let (Some(from), Some(to)) = (required(req.from.as_deref()), required(req.to.as_deref()))
    else {
        return Err(AppError::BadRequest {
            message: "`from` and `to` query parameters are required".to_string(),
        });
    };

    // The routes endpoint has always served bounded searches by default.
    let mode = match required(req.mode.as_deref()) {
        Some(mode) => mode.parse()?,
        None => SearchMode::Bounded,
    };

    let max_routes = parse_bound(req.maxroutes.as_deref())
        .unwrap_or(state.config.max_routes)
        .min(MAX_ROUTES_LIMIT);
    let mut request = SearchRequest::new(from, to, mode).with_max_routes(max_routes);
    if let Some(max_depth) = parse_bound(req.maxdepth.as_deref()) {
        request = request.with_max_depth(max_depth.min(MAX_DEPTH_LIMIT));
    }

    // Searches are CPU-bound, so they run on the blocking pool.
    let result = tokio::task::spawn_blocking(move || {
        Planner::new(&state.graph, &state.config).search(&request)
    })
    .await??;

    Ok(Json(RoutesResponse::new(from, to, result)))
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);

    let stations = state
        .graph
        .search(&req.q, limit)
        .into_iter()
        .map(|key| StationSearchResult {
            name: key.as_str().to_string(),
            lines: state.graph.lines_serving(key).to_vec(),
        })
        .collect();

    Json(StationSearchResponse { stations })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal {
            message: format!("Search task failed: {e}"),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::StationNotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
