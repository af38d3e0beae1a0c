//! HTTP handlers for sales endpoints

use axum::{extract::State, Json};
use shared::types::{Action, Resource};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::sales::{RecordSaleInput, SalesListing, SalesService, SalesTransaction};
use crate::AppState;

/// List all sales joined with display names
pub async fn list_sales(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<SalesListing>>> {
    current_user.0.require(Resource::Sale, Action::View)?;
    let service = SalesService::new(state.db);
    let sales = service.list_sales().await?;
    Ok(Json(sales))
}

/// Record a sale and debit the store's stock
pub async fn record_sale(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RecordSaleInput>,
) -> AppResult<Json<SalesTransaction>> {
    current_user.0.require(Resource::Sale, Action::Create)?;
    let service = SalesService::new(state.db);
    let transaction = service.record_sale(input).await?;
    Ok(Json(transaction))
}
