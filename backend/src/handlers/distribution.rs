//! HTTP handlers for distribution endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::types::{Action, Resource};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::distribution::{
    CreateDistributionInput, Distribution, DistributionListing, DistributionService,
};
use crate::AppState;

/// List all distributions joined with display names
pub async fn list_distributions(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<DistributionListing>>> {
    current_user.0.require(Resource::Distribution, Action::View)?;
    let service = DistributionService::new(state.db);
    let distributions = service.list_distributions().await?;
    Ok(Json(distributions))
}

/// Create a pending distribution and move the stock
pub async fn create_distribution(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateDistributionInput>,
) -> AppResult<Json<Distribution>> {
    current_user.0.require(Resource::Distribution, Action::Create)?;
    let service = DistributionService::new(state.db);
    let distribution = service.create_distribution(input).await?;
    Ok(Json(distribution))
}

/// Mark a distribution as completed
pub async fn complete_distribution(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(distribution_id): Path<Uuid>,
) -> AppResult<Json<Distribution>> {
    current_user.0.require(Resource::Distribution, Action::Edit)?;
    let service = DistributionService::new(state.db);
    let distribution = service.complete_distribution(distribution_id).await?;
    Ok(Json(distribution))
}
