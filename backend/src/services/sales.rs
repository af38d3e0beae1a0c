//! Sales recorder service
//!
//! Records a sales transaction and debits the stock ledger in one atomic unit:
//! if the debit fails, the transaction row does not persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::stock::StockLedger;

/// Sales recorder over the sales_transactions table
#[derive(Clone)]
pub struct SalesService {
    db: PgPool,
    ledger: StockLedger,
}

/// Input for recording a sale
#[derive(Debug, Deserialize)]
pub struct RecordSaleInput {
    pub product_id: Uuid,
    pub salesman_id: Uuid,
    pub store_id: Uuid,
    pub quantity: i32,
}

/// A recorded sales transaction, immutable once created
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SalesTransaction {
    pub id: Uuid,
    pub product_id: Uuid,
    pub salesman_id: Uuid,
    pub store_id: Uuid,
    pub quantity: i32,
    pub total_price: i64,
    pub transaction_date: DateTime<Utc>,
}

/// Sales listing row joined with display names
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SalesListing {
    pub id: Uuid,
    pub quantity: i32,
    pub total_price: i64,
    pub transaction_date: DateTime<Utc>,
    pub product_id: Uuid,
    pub product_name: String,
    pub salesman_id: Uuid,
    pub salesman_name: String,
    pub store_id: Uuid,
    pub store_name: String,
}

impl SalesService {
    /// Create a new SalesService instance
    pub fn new(db: PgPool) -> Self {
        let ledger = StockLedger::new(db.clone());
        Self { db, ledger }
    }

    /// Record a sale and debit the store's stock
    ///
    /// The transaction insert and the stock debit run in a single database
    /// transaction; insufficient stock rolls both back, so no dangling
    /// transaction row is ever visible.
    pub async fn record_sale(&self, input: RecordSaleInput) -> AppResult<SalesTransaction> {
        shared::validate_quantity(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;

        let mut tx = self.db.begin().await?;

        // Bound the multi-step unit; a timeout aborts and rolls back entirely
        sqlx::query("SET LOCAL statement_timeout = '5s'")
            .execute(&mut *tx)
            .await?;

        // Price lookup doubles as the product existence check
        let price = sqlx::query_scalar::<_, i64>("SELECT price FROM products WHERE id = $1")
            .bind(input.product_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let salesman_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(input.salesman_id)
                .fetch_one(&mut *tx)
                .await?;
        if !salesman_exists {
            return Err(AppError::NotFound("Salesman".to_string()));
        }

        let store_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM stores WHERE id = $1)")
                .bind(input.store_id)
                .fetch_one(&mut *tx)
                .await?;
        if !store_exists {
            return Err(AppError::NotFound("Store".to_string()));
        }

        // Captured at time of sale, never recomputed later
        let total_price = price * i64::from(input.quantity);

        let transaction = sqlx::query_as::<_, SalesTransaction>(
            r#"
            INSERT INTO sales_transactions (product_id, salesman_id, store_id, quantity, total_price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_id, salesman_id, store_id, quantity, total_price, transaction_date
            "#,
        )
        .bind(input.product_id)
        .bind(input.salesman_id)
        .bind(input.store_id)
        .bind(input.quantity)
        .bind(total_price)
        .fetch_one(&mut *tx)
        .await?;

        self.ledger
            .adjust(&mut *tx, input.product_id, input.store_id, -input.quantity)
            .await?;

        tx.commit().await?;

        Ok(transaction)
    }

    /// List all sales joined with product, salesman, and store names
    pub async fn list_sales(&self) -> AppResult<Vec<SalesListing>> {
        let sales = sqlx::query_as::<_, SalesListing>(
            r#"
            SELECT s.id, s.quantity, s.total_price, s.transaction_date,
                   p.id AS product_id, p.name AS product_name,
                   u.id AS salesman_id, u.name AS salesman_name,
                   st.id AS store_id, st.name AS store_name
            FROM sales_transactions s
            JOIN products p ON s.product_id = p.id
            JOIN users u ON s.salesman_id = u.id
            JOIN stores st ON s.store_id = st.id
            ORDER BY s.transaction_date DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(sales)
    }
}
