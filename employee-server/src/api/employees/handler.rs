//! Employee API Handlers

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use shared::{CreateEmployeeRequest, CreateEmployeeResponse, EmployeeFull};

use crate::core::ServerState;
use crate::utils::validation::INVALID_BODY;
use crate::utils::{AppError, AppResult};

/// Create an employee with its department and role row
///
/// The body is decoded as JSON whatever its `content-type`.
pub async fn create(
    State(state): State<ServerState>,
    body: Bytes,
) -> AppResult<Json<CreateEmployeeResponse>> {
    let payload: CreateEmployeeRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected undecodable employee body");
        AppError::validation(INVALID_BODY)
    })?;

    let id = state.employee_writer().create(payload).await?;
    Ok(Json(CreateEmployeeResponse::inserted(id)))
}

/// List all employees joined with department and language
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeFull>>> {
    let employees = state.employee_reader().list().await?;
    Ok(Json(employees))
}

/// Bare OPTIONS request; CORS preflights are answered by the CORS layer
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
