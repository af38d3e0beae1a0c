//! Distribution coordinator service
//!
//! Moves stock of a product between stores. Creation debits the source and
//! credits the destination in the same transaction as the distribution row;
//! completion is a pure status transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::stock::StockLedger;

/// Distribution coordinator over the distribution table
#[derive(Clone)]
pub struct DistributionService {
    db: PgPool,
    ledger: StockLedger,
}

/// Input for creating a distribution
#[derive(Debug, Deserialize)]
pub struct CreateDistributionInput {
    pub product_id: Uuid,
    pub from_store_id: Uuid,
    pub to_store_id: Uuid,
    pub quantity: i32,
}

/// A distribution record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Distribution {
    pub id: Uuid,
    pub product_id: Uuid,
    pub from_store_id: Uuid,
    pub to_store_id: Uuid,
    pub quantity: i32,
    pub status: String,
    pub distribution_date: DateTime<Utc>,
}

/// Distribution listing row joined with display names
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DistributionListing {
    pub id: Uuid,
    pub quantity: i32,
    pub status: String,
    pub distribution_date: DateTime<Utc>,
    pub product_id: Uuid,
    pub product_name: String,
    pub from_store_id: Uuid,
    pub from_store_name: String,
    pub to_store_id: Uuid,
    pub to_store_name: String,
}

impl DistributionService {
    /// Create a new DistributionService instance
    pub fn new(db: PgPool) -> Self {
        let ledger = StockLedger::new(db.clone());
        Self { db, ledger }
    }

    /// Create a pending distribution and move the stock
    ///
    /// Row insert, source debit, and destination credit form one transaction;
    /// an insufficient source balance rolls all three back. The destination
    /// entry is created lazily by the ledger upsert.
    pub async fn create_distribution(
        &self,
        input: CreateDistributionInput,
    ) -> AppResult<Distribution> {
        shared::validate_quantity(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;

        if input.from_store_id == input.to_store_id {
            return Err(AppError::Validation {
                field: "to_store_id".to_string(),
                message: "Source and destination store must differ".to_string(),
            });
        }

        let mut tx = self.db.begin().await?;

        // Bound the multi-step unit; a timeout aborts and rolls back entirely
        sqlx::query("SET LOCAL statement_timeout = '5s'")
            .execute(&mut *tx)
            .await?;

        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(input.product_id)
                .fetch_one(&mut *tx)
                .await?;
        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        for (store_id, label) in [
            (input.from_store_id, "Source store"),
            (input.to_store_id, "Destination store"),
        ] {
            let exists =
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM stores WHERE id = $1)")
                    .bind(store_id)
                    .fetch_one(&mut *tx)
                    .await?;
            if !exists {
                return Err(AppError::NotFound(label.to_string()));
            }
        }

        let distribution = sqlx::query_as::<_, Distribution>(
            r#"
            INSERT INTO distribution (product_id, from_store_id, to_store_id, quantity, status)
            VALUES ($1, $2, $3, $4, 'pending')
            RETURNING id, product_id, from_store_id, to_store_id, quantity, status, distribution_date
            "#,
        )
        .bind(input.product_id)
        .bind(input.from_store_id)
        .bind(input.to_store_id)
        .bind(input.quantity)
        .fetch_one(&mut *tx)
        .await?;

        self.ledger
            .adjust(
                &mut *tx,
                input.product_id,
                input.from_store_id,
                -input.quantity,
            )
            .await?;
        self.ledger
            .adjust(
                &mut *tx,
                input.product_id,
                input.to_store_id,
                input.quantity,
            )
            .await?;

        tx.commit().await?;

        Ok(distribution)
    }

    /// Transition a distribution from pending to completed
    ///
    /// Completing an already-completed distribution is a no-op that returns
    /// the record unchanged; stock moved at creation time and is not touched.
    pub async fn complete_distribution(&self, distribution_id: Uuid) -> AppResult<Distribution> {
        let completed = sqlx::query_as::<_, Distribution>(
            r#"
            UPDATE distribution
            SET status = 'completed'
            WHERE id = $1 AND status = 'pending'
            RETURNING id, product_id, from_store_id, to_store_id, quantity, status, distribution_date
            "#,
        )
        .bind(distribution_id)
        .fetch_optional(&self.db)
        .await?;

        if let Some(distribution) = completed {
            return Ok(distribution);
        }

        // Either the record is missing or the transition already happened
        sqlx::query_as::<_, Distribution>(
            r#"
            SELECT id, product_id, from_store_id, to_store_id, quantity, status, distribution_date
            FROM distribution
            WHERE id = $1
            "#,
        )
        .bind(distribution_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Distribution".to_string()))
    }

    /// List all distributions joined with product and store names
    pub async fn list_distributions(&self) -> AppResult<Vec<DistributionListing>> {
        let distributions = sqlx::query_as::<_, DistributionListing>(
            r#"
            SELECT d.id, d.quantity, d.status, d.distribution_date,
                   p.id AS product_id, p.name AS product_name,
                   fs.id AS from_store_id, fs.name AS from_store_name,
                   ts.id AS to_store_id, ts.name AS to_store_name
            FROM distribution d
            JOIN products p ON d.product_id = p.id
            JOIN stores fs ON d.from_store_id = fs.id
            JOIN stores ts ON d.to_store_id = ts.id
            ORDER BY d.distribution_date DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(distributions)
    }
}
