// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use zab_shift_api::{
    AlternativeRequest, ApiError, AssignShiftRequest, AssignmentRecord, AuthenticatedEmployee,
    CommentRequest, ProposalRecord, ProposalRequest, ShiftRecord, ShiftRequest,
    SwapProposalRecord, SwapRequest, UpdateProposalRequest, UpdateShiftRequest,
    accept_proposal, accept_shift_change, assign_shift, cancel_proposal, create_proposal,
    create_shift, create_swap_proposal, decline_shift_change, delete_shift, get_shift,
    list_assignments_for_employee, list_assignments_for_shift, list_proposals,
    list_proposals_for_employee, list_shifts, list_swap_proposals,
    list_swap_proposals_for_employee, propose_alternative, reject_proposal, remove_assignment,
    resolve_identity, update_proposal, update_shift,
};
use zab_shift_notify::{LogNotifier, Notifier, dispatch_all};
use zab_shift_persistence::{PersistenceError, SqlitePersistence};

/// ZAB Shift Server - HTTP server for the ZAB Shift Scheduling System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer, serialized behind a mutex: every mutating
    /// request holds the lock across load, apply, and persist, so two
    /// concurrent requests can never both pass a conflict check before
    /// either commits.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// The post-commit notification dispatcher.
    notifier: Arc<dyn Notifier>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::IntegrityViolation { .. } | ApiError::InvalidState { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Reads one forwarded identity header as a string.
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, HttpError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: format!("Missing or malformed '{name}' header"),
        })
}

/// Builds the authenticated identity from the gateway-forwarded headers.
///
/// The gateway has already validated the caller's token; these headers
/// carry the resolved identity and approval capability.
fn identity_from_headers(headers: &HeaderMap) -> Result<AuthenticatedEmployee, HttpError> {
    let employee_id: i64 = header_value(headers, "x-employee-id")?
        .parse()
        .map_err(|_| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("'x-employee-id' header must be an integer"),
        })?;
    let display_name: &str = header_value(headers, "x-employee-name")?;
    let role: &str = header_value(headers, "x-employee-role")?;
    let can_approve: bool = headers
        .get("x-can-approve")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("true"));

    resolve_identity(employee_id, display_name, role, can_approve).map_err(|e| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: e.to_string(),
    })
}

/// Query parameters for the swap accept endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwapAcceptParams {
    /// The employee offering the matching shift in trade.
    swap_employee_id: i64,
}

/// Handler for POST `/api/scheduler/shift-proposals`.
///
/// Employee submits a new shift proposal.
async fn handle_create_proposal(
    AxumState(app): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<ProposalRequest>,
) -> Result<Json<ProposalRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(employee_id = req.employee_id, "Handling create_proposal request");
    // The lock spans load, apply, and persist: the conflict check and
    // the write it guards commit as one critical section.
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = create_proposal(&state, &req, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for PUT `/api/scheduler/shift-proposals/{id}/update`.
async fn handle_update_proposal(
    AxumState(app): AxumState<AppState>,
    Path(proposal_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<UpdateProposalRequest>,
) -> Result<Json<ProposalRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(proposal_id, "Handling update_proposal request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = update_proposal(&state, proposal_id, &req, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for DELETE `/api/scheduler/shift-proposals/{id}/cancel`.
async fn handle_cancel_proposal(
    AxumState(app): AxumState<AppState>,
    Path(proposal_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<ProposalRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(proposal_id, "Handling cancel_proposal request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = cancel_proposal(&state, proposal_id, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for PUT `/api/scheduler/shift-proposals/{id}/accept`.
///
/// Manager accepts a proposal, creating the official shift.
async fn handle_accept_proposal(
    AxumState(app): AxumState<AppState>,
    Path(proposal_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<ProposalRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(proposal_id, "Handling accept_proposal request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = accept_proposal(&state, proposal_id, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for PUT `/api/scheduler/shift-proposals/{id}/reject`.
async fn handle_reject_proposal(
    AxumState(app): AxumState<AppState>,
    Path(proposal_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ProposalRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(proposal_id, "Handling reject_proposal request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = reject_proposal(&state, proposal_id, &req, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for PUT `/api/scheduler/shift-proposals/{id}/alternative`.
async fn handle_propose_alternative(
    AxumState(app): AxumState<AppState>,
    Path(proposal_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<AlternativeRequest>,
) -> Result<Json<ProposalRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(proposal_id, "Handling propose_alternative request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = propose_alternative(&state, proposal_id, &req, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for GET `/api/scheduler/shift-proposals`. Approver-only.
async fn handle_list_proposals(
    AxumState(app): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ProposalRecord>>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    drop(persistence);
    Ok(Json(list_proposals(&state, &identity)?))
}

/// Handler for GET `/api/scheduler/shift-proposals/employee/{id}`.
async fn handle_list_proposals_for_employee(
    AxumState(app): AxumState<AppState>,
    Path(employee_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<ProposalRecord>>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    drop(persistence);
    Ok(Json(list_proposals_for_employee(
        &state,
        employee_id,
        &identity,
    )?))
}

/// Handler for POST `/api/scheduler/swap-proposals/request-change`.
async fn handle_create_swap_proposal(
    AxumState(app): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<SwapRequest>,
) -> Result<Json<SwapProposalRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(
        employee_id = req.employee_id,
        current_shift_id = req.current_shift_id,
        "Handling swap request-change"
    );
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = create_swap_proposal(&state, &req, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for PUT `/api/scheduler/swap-proposals/{id}/accept-change`.
///
/// Manager accepts a swap, naming the counterparty via `swapEmployeeId`.
async fn handle_accept_shift_change(
    AxumState(app): AxumState<AppState>,
    Path(proposal_id): Path<i64>,
    Query(params): Query<SwapAcceptParams>,
    headers: HeaderMap,
) -> Result<Json<SwapProposalRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(
        proposal_id,
        swap_employee_id = params.swap_employee_id,
        "Handling accept_shift_change request"
    );
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = accept_shift_change(&state, proposal_id, params.swap_employee_id, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for PUT `/api/scheduler/swap-proposals/{id}/decline-change`.
async fn handle_decline_shift_change(
    AxumState(app): AxumState<AppState>,
    Path(proposal_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<CommentRequest>,
) -> Result<Json<SwapProposalRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(proposal_id, "Handling decline_shift_change request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = decline_shift_change(&state, proposal_id, &req, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for GET `/api/scheduler/swap-proposals`. Approver-only.
async fn handle_list_swap_proposals(
    AxumState(app): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<SwapProposalRecord>>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    drop(persistence);
    Ok(Json(list_swap_proposals(&state, &identity)?))
}

/// Handler for GET `/api/scheduler/swap-proposals/employee/{id}`.
async fn handle_list_swap_proposals_for_employee(
    AxumState(app): AxumState<AppState>,
    Path(employee_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<SwapProposalRecord>>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    drop(persistence);
    Ok(Json(list_swap_proposals_for_employee(
        &state,
        employee_id,
        &identity,
    )?))
}

/// Handler for POST `/api/scheduler/shifts`.
async fn handle_create_shift(
    AxumState(app): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<ShiftRequest>,
) -> Result<Json<ShiftRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(employee_id = req.employee_id, "Handling create_shift request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = create_shift(&state, &req, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for PUT `/api/scheduler/shifts/{id}`.
async fn handle_update_shift(
    AxumState(app): AxumState<AppState>,
    Path(shift_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<UpdateShiftRequest>,
) -> Result<Json<ShiftRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(shift_id, "Handling update_shift request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = update_shift(&state, shift_id, &req, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for DELETE `/api/scheduler/shifts/{id}`.
///
/// Deleting a shift also removes its assignments and notifies the
/// affected employees.
async fn handle_delete_shift(
    AxumState(app): AxumState<AppState>,
    Path(shift_id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(shift_id, "Handling delete_shift request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = delete_shift(&state, shift_id, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/api/scheduler/shifts/{id}`.
async fn handle_get_shift(
    AxumState(app): AxumState<AppState>,
    Path(shift_id): Path<i64>,
) -> Result<Json<ShiftRecord>, HttpError> {
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    drop(persistence);
    Ok(Json(get_shift(&state, shift_id)?))
}

/// Handler for GET `/api/scheduler/shifts`.
async fn handle_list_shifts(
    AxumState(app): AxumState<AppState>,
) -> Result<Json<Vec<ShiftRecord>>, HttpError> {
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    drop(persistence);
    Ok(Json(list_shifts(&state)))
}

/// Handler for POST `/api/scheduler/assignments`.
async fn handle_assign_shift(
    AxumState(app): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<AssignShiftRequest>,
) -> Result<Json<AssignmentRecord>, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(
        employee_id = req.employee_id,
        shift_id = req.shift_id,
        "Handling assign_shift request"
    );
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = assign_shift(&state, &req, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(Json(result.response))
}

/// Handler for DELETE `/api/scheduler/assignments/{id}`.
async fn handle_remove_assignment(
    AxumState(app): AxumState<AppState>,
    Path(assignment_id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    let identity = identity_from_headers(&headers)?;
    info!(assignment_id, "Handling remove_assignment request");
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    let result = remove_assignment(&state, assignment_id, &identity)?;
    persistence.persist_transition(&result.transition)?;
    drop(persistence);
    dispatch_all(app.notifier.as_ref(), &result.transition.notifications);
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/api/scheduler/assignments/employee/{id}`.
async fn handle_list_assignments_for_employee(
    AxumState(app): AxumState<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<Vec<AssignmentRecord>>, HttpError> {
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    drop(persistence);
    Ok(Json(list_assignments_for_employee(&state, employee_id)))
}

/// Handler for GET `/api/scheduler/assignments/shift/{id}`.
async fn handle_list_assignments_for_shift(
    AxumState(app): AxumState<AppState>,
    Path(shift_id): Path<i64>,
) -> Result<Json<Vec<AssignmentRecord>>, HttpError> {
    let mut persistence = app.persistence.lock().await;
    let state = persistence.load_state()?;
    drop(persistence);
    Ok(Json(list_assignments_for_shift(&state, shift_id)))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/scheduler/shift-proposals", post(handle_create_proposal))
        .route("/api/scheduler/shift-proposals", get(handle_list_proposals))
        .route(
            "/api/scheduler/shift-proposals/employee/{employee_id}",
            get(handle_list_proposals_for_employee),
        )
        .route(
            "/api/scheduler/shift-proposals/{proposal_id}/update",
            put(handle_update_proposal),
        )
        .route(
            "/api/scheduler/shift-proposals/{proposal_id}/cancel",
            delete(handle_cancel_proposal),
        )
        .route(
            "/api/scheduler/shift-proposals/{proposal_id}/accept",
            put(handle_accept_proposal),
        )
        .route(
            "/api/scheduler/shift-proposals/{proposal_id}/reject",
            put(handle_reject_proposal),
        )
        .route(
            "/api/scheduler/shift-proposals/{proposal_id}/alternative",
            put(handle_propose_alternative),
        )
        .route(
            "/api/scheduler/swap-proposals/request-change",
            post(handle_create_swap_proposal),
        )
        .route("/api/scheduler/swap-proposals", get(handle_list_swap_proposals))
        .route(
            "/api/scheduler/swap-proposals/employee/{employee_id}",
            get(handle_list_swap_proposals_for_employee),
        )
        .route(
            "/api/scheduler/swap-proposals/{proposal_id}/accept-change",
            put(handle_accept_shift_change),
        )
        .route(
            "/api/scheduler/swap-proposals/{proposal_id}/decline-change",
            put(handle_decline_shift_change),
        )
        .route("/api/scheduler/shifts", post(handle_create_shift))
        .route("/api/scheduler/shifts", get(handle_list_shifts))
        .route("/api/scheduler/shifts/{shift_id}", get(handle_get_shift))
        .route("/api/scheduler/shifts/{shift_id}", put(handle_update_shift))
        .route(
            "/api/scheduler/shifts/{shift_id}",
            delete(handle_delete_shift),
        )
        .route("/api/scheduler/assignments", post(handle_assign_shift))
        .route(
            "/api/scheduler/assignments/{assignment_id}",
            delete(handle_remove_assignment),
        )
        .route(
            "/api/scheduler/assignments/employee/{employee_id}",
            get(handle_list_assignments_for_employee),
        )
        .route(
            "/api/scheduler/assignments/shift/{shift_id}",
            get(handle_list_assignments_for_shift),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Args = Args::parse();

    let persistence: SqlitePersistence = match &args.database {
        Some(path) => {
            info!(database = %path, "Using database file");
            SqlitePersistence::new_with_file(path)?
        }
        None => {
            info!("Using in-memory database");
            SqlitePersistence::new_in_memory()?
        }
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        notifier: Arc::new(LogNotifier::new()),
    };

    let app: Router = build_router(app_state);

    let addr: String = format!("0.0.0.0:{}", args.port);
    info!(address = %addr, "Starting ZAB Shift server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn forwarded_headers(employee_id: &str, can_approve: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-employee-id", HeaderValue::from_str(employee_id).unwrap());
        headers.insert("x-employee-name", HeaderValue::from_static("Ada Lovelace"));
        headers.insert("x-employee-role", HeaderValue::from_static("Technician"));
        headers.insert("x-can-approve", HeaderValue::from_str(can_approve).unwrap());
        headers
    }

    #[test]
    fn test_identity_from_headers_parses_forwarded_values() {
        let identity = identity_from_headers(&forwarded_headers("7", "true")).unwrap();
        assert_eq!(identity.employee_id.value(), 7);
        assert_eq!(identity.display_name, "Ada Lovelace");
        assert!(identity.can_approve);
    }

    #[test]
    fn test_identity_without_capability_header_defaults_to_no_approval() {
        let mut headers = forwarded_headers("7", "true");
        headers.remove("x-can-approve");
        let identity = identity_from_headers(&headers).unwrap();
        assert!(!identity.can_approve);
    }

    #[test]
    fn test_identity_with_bad_id_is_unauthorized() {
        let result = identity_from_headers(&forwarded_headers("not-a-number", "false"));
        assert_eq!(result.err().map(|e| e.status), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_identity_with_missing_header_is_unauthorized() {
        let mut headers = forwarded_headers("7", "false");
        headers.remove("x-employee-name");
        let result = identity_from_headers(&headers);
        assert_eq!(result.err().map(|e| e.status), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_api_error_status_mapping() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (
                ApiError::AuthenticationFailed {
                    reason: String::new(),
                },
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Unauthorized {
                    action: String::new(),
                    message: String::new(),
                },
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::Conflict {
                    message: String::new(),
                },
                StatusCode::CONFLICT,
            ),
            (
                ApiError::ResourceNotFound {
                    resource_type: String::new(),
                    message: String::new(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::IntegrityViolation {
                    message: String::new(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::InvalidState {
                    message: String::new(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::InvalidInput {
                    field: String::new(),
                    message: String::new(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Internal {
                    message: String::new(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(HttpError::from(err).status, expected);
        }
    }
}
