//! Reporting and dashboard service
//!
//! Read-only aggregation over the catalog, ledger, and transaction tables.
//! Never mutates state.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Reporting service
#[derive(Clone)]
pub struct ReportService {
    db: PgPool,
}

/// Query parameters for the sales report
#[derive(Debug, Deserialize)]
pub struct SalesReportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub product_id: Option<Uuid>,
    pub store_id: Option<Uuid>,
}

/// A sales report line
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SalesReportRow {
    pub id: Uuid,
    pub transaction_date: DateTime<Utc>,
    pub quantity: i32,
    pub total_price: i64,
    pub product_name: String,
    pub sku: String,
    pub salesman_name: String,
    pub store_name: String,
}

/// Dashboard summary statistics
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_products: i64,
    pub total_stores: i64,
    pub total_stock: i64,
    pub sales_today: i64,
    pub recent_sales: Vec<RecentSale>,
}

/// One of the most recent sales shown on the dashboard
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecentSale {
    pub id: Uuid,
    pub product_name: String,
    pub salesman_name: String,
    pub store_name: String,
    pub quantity: i32,
    pub total_price: i64,
    pub transaction_date: DateTime<Utc>,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Sales within a date range, optionally filtered by product and store
    pub async fn sales_report(&self, query: SalesReportQuery) -> AppResult<Vec<SalesReportRow>> {
        if query.from > query.to {
            return Err(AppError::Validation {
                field: "from".to_string(),
                message: "Report start date must not be after end date".to_string(),
            });
        }

        let rows = sqlx::query_as::<_, SalesReportRow>(
            r#"
            SELECT s.id, s.transaction_date, s.quantity, s.total_price,
                   p.name AS product_name, p.sku,
                   u.name AS salesman_name,
                   st.name AS store_name
            FROM sales_transactions s
            JOIN products p ON s.product_id = p.id
            JOIN users u ON s.salesman_id = u.id
            JOIN stores st ON s.store_id = st.id
            WHERE s.transaction_date::date BETWEEN $1 AND $2
              AND ($3::uuid IS NULL OR s.product_id = $3)
              AND ($4::uuid IS NULL OR s.store_id = $4)
            ORDER BY s.transaction_date DESC
            "#,
        )
        .bind(query.from)
        .bind(query.to)
        .bind(query.product_id)
        .bind(query.store_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    /// Dashboard counters and the five most recent sales
    pub async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        let total_products = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db)
            .await?;

        let total_stores = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stores")
            .fetch_one(&self.db)
            .await?;

        let total_stock =
            sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(quantity), 0)::BIGINT FROM stock")
                .fetch_one(&self.db)
                .await?;

        let sales_today = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sales_transactions WHERE transaction_date::date = CURRENT_DATE",
        )
        .fetch_one(&self.db)
        .await?;

        let recent_sales = sqlx::query_as::<_, RecentSale>(
            r#"
            SELECT s.id,
                   p.name AS product_name,
                   u.name AS salesman_name,
                   st.name AS store_name,
                   s.quantity, s.total_price, s.transaction_date
            FROM sales_transactions s
            JOIN products p ON s.product_id = p.id
            JOIN users u ON s.salesman_id = u.id
            JOIN stores st ON s.store_id = st.id
            ORDER BY s.transaction_date DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(DashboardStats {
            total_products,
            total_stores,
            total_stock,
            sales_today,
            recent_sales,
        })
    }
}
