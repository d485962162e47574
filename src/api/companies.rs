//! Company API endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    db::CompanyRepository,
    models::{Company, CompanyListQuery, CreateCompanyRequest, UpdateCompanyRequest},
    utils::{AppJson, AppQuery, AppResult},
    AppState,
};

/// Create routes for company endpoints
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route(
            "/{company_id}",
            get(get_company)
                .patch(update_company)
                .delete(delete_company),
        )
}

/// Location of a company resource
pub fn company_location(company_id: &str) -> String {
    format!("/Companies/{}", company_id)
}

/// List companies, optionally one page at a time
async fn list_companies(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CompanyListQuery>,
) -> Json<Vec<Company>> {
    let repo = CompanyRepository::new(&state.store);
    Json(repo.list(&query).await)
}

/// Create a new company
async fn create_company(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCompanyRequest>,
) -> AppResult<impl IntoResponse> {
    let repo = CompanyRepository::new(&state.store);
    let company = repo.create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, company_location(&company.id))],
        Json(company),
    ))
}

/// Get a specific company
async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> AppResult<Json<Company>> {
    let repo = CompanyRepository::new(&state.store);
    Ok(Json(repo.get_by_id(&company_id).await?))
}

/// Rename a company
async fn update_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    AppJson(payload): AppJson<UpdateCompanyRequest>,
) -> AppResult<Json<Company>> {
    let repo = CompanyRepository::new(&state.store);
    Ok(Json(repo.update(&company_id, &payload).await?))
}

/// Delete a company and its employees
async fn delete_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = CompanyRepository::new(&state.store);
    repo.delete(&company_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
