//! Stock ledger service: authoritative on-hand quantity per (product, store)
//!
//! The ledger is the sole writer of the stock table. Sales and distribution
//! mutate quantities only through `adjust`, always inside a transaction they
//! own, so a failed multi-step operation never leaves a partial stock effect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Stock ledger over the per-(product, store) quantity table
#[derive(Clone)]
pub struct StockLedger {
    db: PgPool,
}

/// A stock row as stored
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StockEntry {
    pub id: Uuid,
    pub product_id: Uuid,
    pub store_id: Uuid,
    pub quantity: i32,
    pub updated_at: DateTime<Utc>,
}

/// Stock listing row joined with product and store display fields
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StockListing {
    pub id: Uuid,
    pub quantity: i32,
    pub updated_at: DateTime<Utc>,
    pub product_id: Uuid,
    pub product_name: String,
    pub sku: String,
    pub store_id: Uuid,
    pub store_name: String,
    pub area: String,
}

/// Input for the corrective absolute edit
#[derive(Debug, Deserialize)]
pub struct CorrectStockInput {
    pub quantity: i32,
}

impl StockLedger {
    /// Create a new StockLedger instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// On-hand quantity for a (product, store) pair; 0 when no entry exists
    pub async fn get_quantity(&self, product_id: Uuid, store_id: Uuid) -> AppResult<i32> {
        let quantity = sqlx::query_scalar::<_, i32>(
            "SELECT quantity FROM stock WHERE product_id = $1 AND store_id = $2",
        )
        .bind(product_id)
        .bind(store_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(quantity.unwrap_or(0))
    }

    /// Apply a signed delta to a (product, store) quantity
    ///
    /// Runs on the caller's open transaction connection. The insert-or-accumulate
    /// upsert is a single statement, so concurrent adjustments on the same key
    /// serialize on the row lock and two concurrent creators cannot both insert.
    /// A result below zero is rejected uniformly (sales and distribution alike);
    /// the error rolls the caller's transaction back, leaving quantity unchanged.
    pub async fn adjust(
        &self,
        conn: &mut PgConnection,
        product_id: Uuid,
        store_id: Uuid,
        delta: i32,
    ) -> AppResult<i32> {
        let quantity = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO stock (product_id, store_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (product_id, store_id)
            DO UPDATE SET quantity = stock.quantity + EXCLUDED.quantity, updated_at = NOW()
            RETURNING quantity
            "#,
        )
        .bind(product_id)
        .bind(store_id)
        .bind(delta)
        .fetch_one(&mut *conn)
        .await?;

        if quantity < 0 {
            return Err(AppError::InsufficientStock(format!(
                "requested {} but only {} available",
                delta.unsigned_abs(),
                quantity - delta
            )));
        }

        Ok(quantity)
    }

    /// Corrective absolute edit of a stock row (the only non-relative write)
    pub async fn set_quantity(&self, stock_id: Uuid, quantity: i32) -> AppResult<StockEntry> {
        if quantity < 0 {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity cannot be negative".to_string(),
            });
        }

        let entry = sqlx::query_as::<_, StockEntry>(
            r#"
            UPDATE stock
            SET quantity = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, product_id, store_id, quantity, updated_at
            "#,
        )
        .bind(quantity)
        .bind(stock_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Stock entry".to_string()))?;

        Ok(entry)
    }

    /// List all stock entries joined with product and store display names
    pub async fn list(&self) -> AppResult<Vec<StockListing>> {
        let rows = sqlx::query_as::<_, StockListing>(
            r#"
            SELECT s.id, s.quantity, s.updated_at,
                   p.id AS product_id, p.name AS product_name, p.sku,
                   st.id AS store_id, st.name AS store_name, st.area
            FROM stock s
            JOIN products p ON s.product_id = p.id
            JOIN stores st ON s.store_id = st.id
            ORDER BY s.updated_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }
}
