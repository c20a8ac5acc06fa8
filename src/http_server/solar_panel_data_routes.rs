//! Solar Panel Data HTTP Routes
//!
//! CRUD endpoints for solar panel data records plus the CSV event export.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::data::SolarPanelData;
use crate::errors::{ErrorKind, SolarPanelDataError};
use crate::extractor::SolarPanelDataEventExtractor;
use crate::repository::InMemorySolarPanelDataRepository;
use crate::service::SolarPanelDataService;

/// Message returned for request bodies that do not decode
pub const MALFORMED_REQUEST_MESSAGE: &str = "malformed solar panel data request";

const CSV_CONTENT_TYPE: &str = "text/csv";

// ==================
// Shared State
// ==================

/// Solar panel data state shared across handlers
#[derive(Debug, Clone)]
pub struct SolarPanelDataState {
    pub service: SolarPanelDataService,
    pub extractor: SolarPanelDataEventExtractor,
}

impl SolarPanelDataState {
    pub fn new(service: SolarPanelDataService) -> Self {
        Self {
            service,
            extractor: SolarPanelDataEventExtractor::new(),
        }
    }

    /// State backed by a fresh in-memory repository
    pub fn in_memory() -> Self {
        Self::new(SolarPanelDataService::new(Arc::new(
            InMemorySolarPanelDataRepository::new(),
        )))
    }
}

impl Default for SolarPanelDataState {
    fn default() -> Self {
        Self::in_memory()
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSolarPanelDataResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_submitted: Option<SolarPanelData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessageResponse {
    pub error_message: String,
}

// ==================
// Solar Panel Data Routes
// ==================

/// Create solar panel data routes
pub fn solar_panel_data_routes(state: Arc<SolarPanelDataState>) -> Router {
    Router::new()
        .route("/solar-panel-data", post(create_handler))
        .route(
            "/solar-panel-data/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn status_of(err: &SolarPanelDataError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn log_failure(err: &SolarPanelDataError, action: &str) {
    match err.kind() {
        ErrorKind::Internal => {
            tracing::error!(error_message = %err.diagnostic(), "Error in {} solar panel data", action)
        }
        _ => {
            tracing::debug!(error_message = %err.diagnostic(), "Error in {} solar panel data", action)
        }
    }
}

fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorMessageResponse {
            error_message: message.into(),
        }),
    )
        .into_response()
}

/// JSON error response; lookup failures carry no body
fn error_response(err: &SolarPanelDataError, action: &str) -> Response {
    log_failure(err, action);

    let status = status_of(err);
    match err.kind() {
        ErrorKind::NotFound => status.into_response(),
        _ => json_error(status, err.public_message()),
    }
}

/// Decode a JSON request body regardless of its declared content type
fn decode_body(body: &Bytes, action: &str) -> Result<SolarPanelData, Response> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::error!(error_message = %e, "Error in {} solar panel data", action);
        json_error(StatusCode::BAD_REQUEST, MALFORMED_REQUEST_MESSAGE)
    })
}

fn csv_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, CSV_CONTENT_TYPE)], body).into_response()
}

/// CSV error response holding the public message in a single cell
fn csv_error(state: &SolarPanelDataState, err: &SolarPanelDataError) -> Response {
    log_failure(err, "getting");

    let status = status_of(err);
    if err.kind() == ErrorKind::NotFound {
        return status.into_response();
    }

    match state.extractor.to_csv(&[vec![err.public_message()]]) {
        Ok(body) => csv_response(status, body),
        Err(render_err) => {
            log_failure(&render_err, "getting");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// ==================
// Handlers
// ==================

async fn create_handler(State(state): State<Arc<SolarPanelDataState>>, body: Bytes) -> Response {
    let data = match decode_body(&body, "creating") {
        Ok(data) => data,
        Err(response) => return response,
    };

    match state.service.create(&data) {
        Ok(id) => {
            tracing::debug!(id = %id, "Created solar panel data");
            (
                StatusCode::CREATED,
                Json(CreateSolarPanelDataResponse {
                    id: Some(id),
                    data_submitted: Some(data),
                }),
            )
                .into_response()
        }
        Err(err) => error_response(&err, "creating"),
    }
}

async fn get_handler(
    State(state): State<Arc<SolarPanelDataState>>,
    Path(id): Path<String>,
) -> Response {
    let data = match state.service.get(&id) {
        Ok(data) => data,
        Err(err) => return csv_error(&state, &err),
    };

    let csv = state
        .extractor
        .extract_events(&data)
        .and_then(|rows| state.extractor.to_csv(&rows));

    match csv {
        Ok(body) => csv_response(StatusCode::OK, body),
        Err(err) => csv_error(&state, &err),
    }
}

async fn update_handler(
    State(state): State<Arc<SolarPanelDataState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let data = match decode_body(&body, "updating") {
        Ok(data) => data,
        Err(response) => return response,
    };

    match state.service.update(&id, &data) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => error_response(&err, "updating"),
    }
}

async fn delete_handler(
    State(state): State<Arc<SolarPanelDataState>>,
    Path(id): Path<String>,
) -> Response {
    match state.service.delete(&id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => error_response(&err, "deleting"),
    }
}
