//! HTTP handlers for stock ledger endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::types::{Action, Resource};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::stock::{CorrectStockInput, StockEntry, StockLedger, StockListing};
use crate::AppState;

/// Query parameters for a quantity lookup
#[derive(Debug, Deserialize)]
pub struct QuantityQuery {
    pub product_id: Uuid,
    pub store_id: Uuid,
}

/// Response for a quantity lookup
#[derive(Debug, Serialize)]
pub struct QuantityResponse {
    pub product_id: Uuid,
    pub store_id: Uuid,
    pub quantity: i32,
}

/// List stock entries joined with product and store names
pub async fn list_stock(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<StockListing>>> {
    current_user.0.require(Resource::Stock, Action::View)?;
    let ledger = StockLedger::new(state.db);
    let stock = ledger.list().await?;
    Ok(Json(stock))
}

/// On-hand quantity for one (product, store) pair; 0 for an unknown pair
pub async fn get_quantity(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<QuantityQuery>,
) -> AppResult<Json<QuantityResponse>> {
    current_user.0.require(Resource::Stock, Action::View)?;
    let ledger = StockLedger::new(state.db);
    let quantity = ledger.get_quantity(query.product_id, query.store_id).await?;
    Ok(Json(QuantityResponse {
        product_id: query.product_id,
        store_id: query.store_id,
        quantity,
    }))
}

/// Corrective absolute edit of a stock entry
pub async fn correct_stock(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(stock_id): Path<Uuid>,
    Json(input): Json<CorrectStockInput>,
) -> AppResult<Json<StockEntry>> {
    current_user.0.require(Resource::Stock, Action::Edit)?;
    let ledger = StockLedger::new(state.db);
    let entry = ledger.set_quantity(stock_id, input.quantity).await?;
    Ok(Json(entry))
}
