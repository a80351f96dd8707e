use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::founder;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFounderRequest {
    /// Founder name (max 256 chars); two founders may share a name
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FounderResponse {
    /// System-assigned identifier
    pub id: i32,
    /// Founder name
    pub name: String,
}

impl From<founder::Model> for FounderResponse {
    fn from(model: founder::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Register a new founder
#[utoipa::path(
    post,
    path = "/founders",
    request_body = CreateFounderRequest,
    responses(
        (status = 201, description = "Founder created", body = FounderResponse),
        (status = 400, description = "Empty or overlong name")
    )
)]
#[tracing::instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_founder(
    State(state): State<AppState>,
    Json(payload): Json<CreateFounderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.store.create_founder(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(FounderResponse::from(created))))
}

/// List all founders, ordered by identifier
#[utoipa::path(
    get,
    path = "/founders",
    responses(
        (status = 200, description = "All founders", body = [FounderResponse])
    )
)]
pub async fn list_founders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let founders = state.store.list_founders().await?;
    let body: Vec<FounderResponse> = founders.into_iter().map(FounderResponse::from).collect();
    Ok(Json(body))
}

/// Link a founder to a company they founded
#[utoipa::path(
    post,
    path = "/founders/{founder_id}/companies/{company_id}",
    params(
        ("founder_id" = i32, Path, description = "Founder identifier"),
        ("company_id" = i32, Path, description = "Company identifier")
    ),
    responses(
        (status = 204, description = "Association recorded"),
        (status = 404, description = "Founder or company does not exist"),
        (status = 409, description = "This founder is already linked to this company")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn associate_founder(
    State(state): State<AppState>,
    Path((founder_id, company_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    state.store.associate_founder(founder_id, company_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a founder; their company links go with them
#[utoipa::path(
    delete,
    path = "/founders/{founder_id}",
    params(("founder_id" = i32, Path, description = "Founder identifier")),
    responses(
        (status = 204, description = "Founder deleted"),
        (status = 404, description = "No founder with this identifier")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_founder(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.store.delete_founder(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
