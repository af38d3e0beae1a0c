//! Store directory service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Store directory service
#[derive(Clone)]
pub struct StoreService {
    db: PgPool,
}

/// A store or outlet in the directory
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub area: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a store
#[derive(Debug, Deserialize)]
pub struct CreateStoreInput {
    pub name: String,
    pub area: String,
}

/// Input for updating a store
#[derive(Debug, Deserialize)]
pub struct UpdateStoreInput {
    pub name: Option<String>,
    pub area: Option<String>,
}

impl StoreService {
    /// Create a new StoreService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a store; name must be unique
    pub async fn create_store(&self, input: CreateStoreInput) -> AppResult<Store> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Store name is required".to_string(),
            });
        }

        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stores WHERE name = $1")
            .bind(&input.name)
            .fetch_one(&self.db)
            .await?;
        if existing > 0 {
            return Err(AppError::DuplicateEntry("name".to_string()));
        }

        let store = sqlx::query_as::<_, Store>(
            r#"
            INSERT INTO stores (name, area)
            VALUES ($1, $2)
            RETURNING id, name, area, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.area)
        .fetch_one(&self.db)
        .await?;

        Ok(store)
    }

    /// Get a single store by id
    pub async fn get_store(&self, store_id: Uuid) -> AppResult<Store> {
        let store = sqlx::query_as::<_, Store>(
            "SELECT id, name, area, created_at FROM stores WHERE id = $1",
        )
        .bind(store_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Store".to_string()))?;

        Ok(store)
    }

    /// Update a store, keeping unspecified fields
    pub async fn update_store(&self, store_id: Uuid, input: UpdateStoreInput) -> AppResult<Store> {
        let existing = self.get_store(store_id).await?;

        let name = input.name.unwrap_or(existing.name);
        let area = input.area.unwrap_or(existing.area);

        let taken = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM stores WHERE name = $1 AND id <> $2",
        )
        .bind(&name)
        .bind(store_id)
        .fetch_one(&self.db)
        .await?;
        if taken > 0 {
            return Err(AppError::DuplicateEntry("name".to_string()));
        }

        let store = sqlx::query_as::<_, Store>(
            r#"
            UPDATE stores
            SET name = $1, area = $2
            WHERE id = $3
            RETURNING id, name, area, created_at
            "#,
        )
        .bind(&name)
        .bind(&area)
        .bind(store_id)
        .fetch_one(&self.db)
        .await?;

        Ok(store)
    }

    /// Delete a store
    pub async fn delete_store(&self, store_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(store_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Store".to_string()));
        }

        Ok(())
    }

    /// List all stores ordered by name
    pub async fn list_stores(&self) -> AppResult<Vec<Store>> {
        let stores = sqlx::query_as::<_, Store>(
            "SELECT id, name, area, created_at FROM stores ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(stores)
    }
}
