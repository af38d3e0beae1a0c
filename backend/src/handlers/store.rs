//! HTTP handlers for store directory endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::types::{Action, Resource};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::store::{CreateStoreInput, Store, StoreService, UpdateStoreInput};
use crate::AppState;

/// List all stores
pub async fn list_stores(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Store>>> {
    current_user.0.require(Resource::Store, Action::View)?;
    let service = StoreService::new(state.db);
    let stores = service.list_stores().await?;
    Ok(Json(stores))
}

/// Get a single store
pub async fn get_store(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(store_id): Path<Uuid>,
) -> AppResult<Json<Store>> {
    current_user.0.require(Resource::Store, Action::View)?;
    let service = StoreService::new(state.db);
    let store = service.get_store(store_id).await?;
    Ok(Json(store))
}

/// Create a store
pub async fn create_store(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateStoreInput>,
) -> AppResult<Json<Store>> {
    current_user.0.require(Resource::Store, Action::Create)?;
    let service = StoreService::new(state.db);
    let store = service.create_store(input).await?;
    Ok(Json(store))
}

/// Update a store
pub async fn update_store(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(store_id): Path<Uuid>,
    Json(input): Json<UpdateStoreInput>,
) -> AppResult<Json<Store>> {
    current_user.0.require(Resource::Store, Action::Edit)?;
    let service = StoreService::new(state.db);
    let store = service.update_store(store_id, input).await?;
    Ok(Json(store))
}

/// Delete a store
pub async fn delete_store(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(store_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    current_user.0.require(Resource::Store, Action::Delete)?;
    let service = StoreService::new(state.db);
    service.delete_store(store_id).await?;
    Ok(Json(()))
}
