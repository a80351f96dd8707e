use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::company;
use crate::error::AppError;
use crate::routes::founders::FounderResponse;
use crate::routes::funding_rounds::FundingRoundResponse;
use crate::store::{CompanyGraph, NewCompany};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCompanyRequest {
    /// Company name, unique across all companies (max 256 chars)
    pub name: String,
    /// Country the company operates from (max 100 chars)
    pub country: Option<String>,
    /// Free-text description of the problem the company addresses
    pub problem_statement: Option<String>,
    /// How the company makes money (max 256 chars)
    pub business_model: Option<String>,
    /// Industry label (max 100 chars)
    pub industry: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyResponse {
    /// System-assigned identifier
    pub id: i32,
    /// Company name
    pub name: String,
    /// Country the company operates from
    pub country: Option<String>,
    /// Problem the company addresses
    pub problem_statement: Option<String>,
    /// How the company makes money
    pub business_model: Option<String>,
    /// Industry label
    pub industry: Option<String>,
}

impl From<company::Model> for CompanyResponse {
    fn from(model: company::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country: model.country,
            problem_statement: model.problem_statement,
            business_model: model.business_model,
            industry: model.industry,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyDetailResponse {
    /// System-assigned identifier
    pub id: i32,
    /// Company name
    pub name: String,
    /// Country the company operates from
    pub country: Option<String>,
    /// Problem the company addresses
    pub problem_statement: Option<String>,
    /// How the company makes money
    pub business_model: Option<String>,
    /// Industry label
    pub industry: Option<String>,
    /// Founders associated with this company
    pub founders: Vec<FounderResponse>,
    /// Funding rounds the company has raised
    pub funding_rounds: Vec<FundingRoundResponse>,
}

impl From<CompanyGraph> for CompanyDetailResponse {
    fn from(graph: CompanyGraph) -> Self {
        Self {
            id: graph.company.id,
            name: graph.company.name,
            country: graph.company.country,
            problem_statement: graph.company.problem_statement,
            business_model: graph.company.business_model,
            industry: graph.company.industry,
            founders: graph
                .founders
                .into_iter()
                .map(FounderResponse::from)
                .collect(),
            funding_rounds: graph
                .funding_rounds
                .into_iter()
                .map(FundingRoundResponse::from)
                .collect(),
        }
    }
}

/// Register a new company
#[utoipa::path(
    post,
    path = "/companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanyResponse),
        (status = 400, description = "Empty name or field over its length limit"),
        (status = 409, description = "A company with this name already exists")
    )
)]
#[tracing::instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .store
        .create_company(NewCompany {
            name: payload.name,
            country: payload.country,
            problem_statement: payload.problem_statement,
            business_model: payload.business_model,
            industry: payload.industry,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CompanyResponse::from(created))))
}

/// Fetch one company with its founders and funding history
#[utoipa::path(
    get,
    path = "/companies/{id}",
    params(("id" = i32, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Company with relationships resolved", body = CompanyDetailResponse),
        (status = 404, description = "No company with this identifier")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let graph = state.store.get_company(id).await?;
    Ok(Json(CompanyDetailResponse::from(graph)))
}

/// List all companies, ordered by identifier
#[utoipa::path(
    get,
    path = "/companies",
    responses(
        (status = 200, description = "All companies", body = [CompanyResponse])
    )
)]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let companies = state.store.list_companies().await?;
    let body: Vec<CompanyResponse> = companies.into_iter().map(CompanyResponse::from).collect();
    Ok(Json(body))
}

/// Delete a company that has no funding rounds
#[utoipa::path(
    delete,
    path = "/companies/{id}",
    params(("id" = i32, Path, description = "Company identifier")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "No company with this identifier"),
        (status = 409, description = "Company is still referenced by funding rounds")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.store.delete_company(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
