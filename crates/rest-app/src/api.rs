use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use metrics::counter;
use serde::Deserialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::auth::{require_api_key, ApiKeys};
use crate::error::ApiError;
use crate::pipeline::{AccessPipeline, RegisterListing, RegisterValues};

/// Shared state injected into the axum handlers.
pub struct AppState {
    pub pipeline: AccessPipeline,
    pub api_keys: ApiKeys,
}

impl AppState {
    pub fn new(pipeline: AccessPipeline, api_keys: ApiKeys) -> Self {
        Self { pipeline, api_keys }
    }
}

/// `/health` is public; every other route requires an API key.
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/registers", get(get_registers))
        .route("/register-values", post(post_register_values))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_api_key,
        ));

    Router::new()
        .merge(protected)
        .route("/health", get(get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct RegistersQuery {
    equipment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RegisterValuesRequest {
    equipment: Option<Value>,
    registers: Option<Vec<String>>,
}

async fn get_registers(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RegistersQuery>, QueryRejection>,
) -> Result<Json<RegisterListing>, ApiError> {
    debug!("GET /registers called");
    counter!("sun2000_rest_requests_total", "route" => "/registers").increment(1);
    let Query(query) = query.map_err(|rejection| {
        debug!(error = %rejection, "query string rejected");
        ApiError::InvalidValue("equipment")
    })?;
    state
        .pipeline
        .list_registers(query.equipment.as_deref())
        .map(Json)
}

async fn post_register_values(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterValuesRequest>, JsonRejection>,
) -> Result<Json<RegisterValues>, ApiError> {
    debug!("POST /register-values called");
    counter!("sun2000_rest_requests_total", "route" => "/register-values").increment(1);
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "request body rejected");
        ApiError::InvalidBody
    })?;

    let equipment = equipment_literal(request.equipment)?;
    state
        .pipeline
        .read_registers(equipment.as_deref(), request.registers.as_deref())
        .await
        .map(Json)
}

/// Only strings can name equipment; `null` counts as absent.
fn equipment_literal(value: Option<Value>) -> Result<Option<String>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(literal)) => Ok(Some(literal)),
        Some(other) => {
            debug!(equipment = %other, "equipment is not a string");
            Err(ApiError::InvalidValue("equipment"))
        }
    }
}

async fn get_health() -> StatusCode {
    StatusCode::NO_CONTENT
}
