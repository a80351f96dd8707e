use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::funding_round;
use crate::error::AppError;
use crate::store::NewFundingRound;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFundingRoundRequest {
    /// Identifier of the company that raised the round
    pub company_id: i32,
    /// Identifier of the investor providing the capital
    pub investor_id: i32,
    /// Round size in whole US dollars
    pub amount_usd: Option<i64>,
    /// Free-form stage label such as "Seed" or "Series A" (max 50 chars)
    pub stage: Option<String>,
    /// Announcement date in YYYY-MM-DD format
    pub announced_at: Option<String>,
    /// Link to the announcement source (max 512 chars)
    pub source_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FundingRoundResponse {
    /// System-assigned identifier
    pub id: i32,
    /// Company that raised the round
    pub company_id: i32,
    /// Investor that provided the capital
    pub investor_id: i32,
    /// Round size in whole US dollars
    pub amount_usd: Option<i64>,
    /// Stage label
    pub stage: Option<String>,
    /// Announcement date in YYYY-MM-DD format
    pub announced_at: Option<String>,
    /// Link to the announcement source
    pub source_url: Option<String>,
}

impl From<funding_round::Model> for FundingRoundResponse {
    fn from(model: funding_round::Model) -> Self {
        Self {
            id: model.id,
            company_id: model.company_id,
            investor_id: model.investor_id,
            amount_usd: model.amount_usd,
            stage: model.stage,
            announced_at: model.announced_at.map(|d| d.to_string()),
            source_url: model.source_url,
        }
    }
}

// Dates cross the API as strings, parsed here once
fn parse_announced_at(value: Option<String>) -> Result<Option<NaiveDate>, AppError> {
    value
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                AppError::InvalidRequest(format!("announced_at is not a YYYY-MM-DD date: {raw}"))
            })
        })
        .transpose()
}

/// Record a funding round connecting an existing company and investor
#[utoipa::path(
    post,
    path = "/funding-rounds",
    request_body = CreateFundingRoundRequest,
    responses(
        (status = 201, description = "Funding round recorded", body = FundingRoundResponse),
        (status = 400, description = "Negative amount or malformed field"),
        (status = 404, description = "Referenced company or investor does not exist")
    )
)]
#[tracing::instrument(skip(state, payload), fields(company_id = payload.company_id, investor_id = payload.investor_id))]
pub async fn create_funding_round(
    State(state): State<AppState>,
    Json(payload): Json<CreateFundingRoundRequest>,
) -> Result<impl IntoResponse, AppError> {
    let announced_at = parse_announced_at(payload.announced_at)?;
    let created = state
        .store
        .create_funding_round(NewFundingRound {
            company_id: payload.company_id,
            investor_id: payload.investor_id,
            amount_usd: payload.amount_usd,
            stage: payload.stage,
            announced_at,
            source_url: payload.source_url,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(FundingRoundResponse::from(created))))
}

/// List every recorded funding round, ordered by identifier
#[utoipa::path(
    get,
    path = "/funding-rounds",
    responses(
        (status = 200, description = "All funding rounds", body = [FundingRoundResponse])
    )
)]
pub async fn list_funding_rounds(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rounds = state.store.list_funding_rounds().await?;
    let body: Vec<FundingRoundResponse> =
        rounds.into_iter().map(FundingRoundResponse::from).collect();
    Ok(Json(body))
}
