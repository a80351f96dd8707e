use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::investor;
use crate::error::AppError;
use crate::routes::funding_rounds::FundingRoundResponse;
use crate::store::InvestorGraph;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInvestorRequest {
    /// Investor name, unique across all investors (max 256 chars)
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvestorResponse {
    /// System-assigned identifier
    pub id: i32,
    /// Investor name
    pub name: String,
}

impl From<investor::Model> for InvestorResponse {
    fn from(model: investor::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvestorDetailResponse {
    /// System-assigned identifier
    pub id: i32,
    /// Investor name
    pub name: String,
    /// Funding rounds this investor has participated in
    pub funding_rounds: Vec<FundingRoundResponse>,
}

impl From<InvestorGraph> for InvestorDetailResponse {
    fn from(graph: InvestorGraph) -> Self {
        Self {
            id: graph.investor.id,
            name: graph.investor.name,
            funding_rounds: graph
                .funding_rounds
                .into_iter()
                .map(FundingRoundResponse::from)
                .collect(),
        }
    }
}

/// Register a new investor
#[utoipa::path(
    post,
    path = "/investors",
    request_body = CreateInvestorRequest,
    responses(
        (status = 201, description = "Investor created", body = InvestorResponse),
        (status = 400, description = "Empty or overlong name"),
        (status = 409, description = "An investor with this name already exists")
    )
)]
#[tracing::instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_investor(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvestorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.store.create_investor(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(InvestorResponse::from(created))))
}

/// Fetch one investor with its funding history
#[utoipa::path(
    get,
    path = "/investors/{id}",
    params(("id" = i32, Path, description = "Investor identifier")),
    responses(
        (status = 200, description = "Investor with funding rounds resolved", body = InvestorDetailResponse),
        (status = 404, description = "No investor with this identifier")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_investor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let graph = state.store.get_investor(id).await?;
    Ok(Json(InvestorDetailResponse::from(graph)))
}

/// List all investors, ordered by identifier
#[utoipa::path(
    get,
    path = "/investors",
    responses(
        (status = 200, description = "All investors", body = [InvestorResponse])
    )
)]
pub async fn list_investors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let investors = state.store.list_investors().await?;
    let body: Vec<InvestorResponse> = investors.into_iter().map(InvestorResponse::from).collect();
    Ok(Json(body))
}

/// Delete an investor that has no funding rounds
#[utoipa::path(
    delete,
    path = "/investors/{id}",
    params(("id" = i32, Path, description = "Investor identifier")),
    responses(
        (status = 204, description = "Investor deleted"),
        (status = 404, description = "No investor with this identifier"),
        (status = 409, description = "Investor is still referenced by funding rounds")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_investor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.store.delete_investor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
