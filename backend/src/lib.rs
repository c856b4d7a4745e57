pub mod catalog;
pub mod error;
pub mod gpx_export;
pub mod itinerary;
pub mod optimizer;
pub mod stats;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::{Attraction, Catalog, City};
use crate::error::PlannerError;
use crate::gpx_export::encode_route_as_gpx;
use shared::{ApiError, CitySummary, OptimizeRequest, OptimizeResponse};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

pub fn create_router(state: AppState) -> Router {
    // Allow browser clients to call the API directly
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/cities", get(list_cities))
        .route("/api/cities/:slug", get(city_detail))
        .route("/api/attractions/:id", get(attraction_detail))
        .route("/api/itinerary/optimize", post(optimize_handler))
        .layer(cors)
        .with_state(state)
}

async fn list_cities(State(state): State<AppState>) -> Json<Vec<CitySummary>> {
    Json(state.catalog.summaries())
}

async fn city_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<City>, (StatusCode, Json<ApiError>)> {
    state
        .catalog
        .city(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(format!("no city with slug {slug}")))
}

async fn attraction_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Attraction>, (StatusCode, Json<ApiError>)> {
    state
        .catalog
        .attraction(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(format!("no attraction with id {id}")))
}

async fn optimize_handler(
    Json(req): Json<OptimizeRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    tracing::debug!(
        "optimizing {} waypoints (improvement: {})",
        req.waypoints.len(),
        req.use_improvement
    );

    let route = optimizer::optimize_route(&req.waypoints, req.use_improvement);
    let statistics = stats::route_statistics(&route);
    let days = req
        .max_minutes_per_day
        .map(|budget| itinerary::split_into_days(&route, budget));
    let gpx_base64 = encode_route_as_gpx(&route).map_err(internal_error)?;

    Ok(Json(OptimizeResponse {
        route,
        statistics,
        days,
        gpx_base64,
    }))
}

fn not_found(message: String) -> (StatusCode, Json<ApiError>) {
    (StatusCode::NOT_FOUND, Json(ApiError { message }))
}

fn internal_error(err: PlannerError) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            message: err.to_string(),
        }),
    )
}
