pub mod entities;
pub mod error;
pub mod routes;
pub mod store;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};
// Conditionally import SwaggerUi only when needed (not test)
#[cfg(not(test))]
use utoipa_swagger_ui::SwaggerUi;
// Conditionally import CORS only when needed (not test)
#[cfg(not(test))]
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
// Conditionally import Governor only when needed (not test)
#[cfg(not(test))]
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
#[cfg(not(test))]
use std::num::NonZeroU32;
#[cfg(not(test))]
use std::sync::Arc;

use crate::store::GraphStore;

/// Shared handler state: the one store handle, constructed at startup and
/// injected everywhere (never a module-level singleton).
#[derive(Clone)]
pub struct AppState {
    pub store: GraphStore,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Service is healthy")
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VentureGraph API",
        version = "0.1.0",
        description = "Startup-funding knowledge graph: companies, investors, founders and the rounds connecting them"
    ),
    paths(
        routes::companies::create_company,
        routes::companies::get_company,
        routes::companies::list_companies,
        routes::companies::delete_company,
        routes::investors::create_investor,
        routes::investors::get_investor,
        routes::investors::list_investors,
        routes::investors::delete_investor,
        routes::founders::create_founder,
        routes::founders::list_founders,
        routes::founders::associate_founder,
        routes::founders::delete_founder,
        routes::funding_rounds::create_funding_round,
        routes::funding_rounds::list_funding_rounds,
        health_check
    ),
    components(schemas(
        routes::companies::CreateCompanyRequest,
        routes::companies::CompanyResponse,
        routes::companies::CompanyDetailResponse,
        routes::investors::CreateInvestorRequest,
        routes::investors::InvestorResponse,
        routes::investors::InvestorDetailResponse,
        routes::founders::CreateFounderRequest,
        routes::founders::FounderResponse,
        routes::funding_rounds::CreateFundingRoundRequest,
        routes::funding_rounds::FundingRoundResponse
    ))
)]
struct ApiDoc;

/// Create the application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // Build our API documentation (needed regardless for ApiDoc::openapi())
    let api_doc = ApiDoc::openapi();

    // --- Define API routes separately ---
    let api_routes = Router::new()
        .route(
            "/companies",
            post(routes::create_company).get(routes::list_companies),
        )
        .route(
            "/companies/{id}",
            get(routes::get_company).delete(routes::delete_company),
        )
        .route(
            "/investors",
            post(routes::create_investor).get(routes::list_investors),
        )
        .route(
            "/investors/{id}",
            get(routes::get_investor).delete(routes::delete_investor),
        )
        .route(
            "/founders",
            post(routes::create_founder).get(routes::list_founders),
        )
        .route("/founders/{founder_id}", delete(routes::delete_founder))
        .route(
            "/founders/{founder_id}/companies/{company_id}",
            post(routes::associate_founder),
        )
        .route(
            "/funding-rounds",
            post(routes::create_funding_round).get(routes::list_funding_rounds),
        )
        .route("/health", get(health_check))
        .with_state(state);

    // --- Conditionally apply layers and Swagger UI only when NOT running tests ---
    #[cfg(not(test))]
    let (docs_router, rate_limited_api_routes) = {
        // Create Swagger UI router
        let docs_router = SwaggerUi::new("/docs").url("/api-doc/openapi.json", api_doc);

        // Configure Rate Limiting
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(SmartIpKeyExtractor)
                .period(std::time::Duration::from_secs(60))
                .burst_size(NonZeroU32::new(30).unwrap().into())
                .finish()
                .unwrap(),
        );
        // Apply Governor layer ONLY to the api_routes defined above
        let rate_limited_api_routes = api_routes.layer(GovernorLayer {
            config: governor_conf,
        });

        (docs_router, rate_limited_api_routes)
    };

    // For test builds, use the original api_routes and an empty router for docs
    #[cfg(test)]
    let (docs_router, rate_limited_api_routes) = {
        let _ = api_doc;
        (Router::new(), api_routes)
    };

    // --- Build the final application router ---
    let mut app = Router::new()
        .merge(rate_limited_api_routes)
        .merge(docs_router);

    // --- Apply CORS to the whole app (both API and docs) if needed ---
    #[cfg(not(test))]
    {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app
}
