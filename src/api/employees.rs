//! Employee API endpoints, nested under a company

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};

use super::companies::company_location;
use crate::{
    db::EmployeeRepository,
    models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest},
    utils::{AppJson, AppResult},
    AppState,
};

/// Create routes for employee endpoints (mounted under `/Companies`)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{company_id}/Employees",
            get(list_employees).post(create_employee),
        )
        .route(
            "/{company_id}/Employees/{employee_id}",
            patch(update_employee).delete(delete_employee),
        )
}

async fn list_employees(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(&state.store);
    Ok(Json(repo.list(&company_id).await?))
}

async fn create_employee(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    AppJson(payload): AppJson<CreateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    let repo = EmployeeRepository::new(&state.store);
    let employee = repo.create(&company_id, payload).await?;
    let location = format!("{}/Employees/{}", company_location(&company_id), employee.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

/// Partially update an employee
async fn update_employee(
    State(state): State<AppState>,
    Path((company_id, employee_id)): Path<(String, String)>,
    AppJson(payload): AppJson<UpdateEmployeeRequest>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(&state.store);
    let employee = repo.update(&company_id, &employee_id, &payload).await?;
    Ok(Json(employee))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path((company_id, employee_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let repo = EmployeeRepository::new(&state.store);
    repo.delete(&company_id, &employee_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
