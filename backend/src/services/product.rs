//! Product catalog service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Product catalog service
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// A catalog product
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub price: i64,
    pub discount: Option<i16>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub sku: String,
    pub price: i64,
    pub discount: Option<i16>,
    pub image_url: Option<String>,
}

/// Input for updating a product
#[derive(Debug, Deserialize)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<i64>,
    pub discount: Option<i16>,
    pub image_url: Option<String>,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate(sku: &str, price: i64, discount: Option<i16>) -> AppResult<()> {
        shared::validate_sku(sku).map_err(|msg| AppError::Validation {
            field: "sku".to_string(),
            message: msg.to_string(),
        })?;
        shared::validate_price(price).map_err(|msg| AppError::Validation {
            field: "price".to_string(),
            message: msg.to_string(),
        })?;
        if let Some(discount) = discount {
            shared::validate_discount(discount).map_err(|msg| AppError::Validation {
                field: "discount".to_string(),
                message: msg.to_string(),
            })?;
        }
        Ok(())
    }

    /// Create a product; SKU uniqueness is enforced at creation
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<Product> {
        Self::validate(&input.sku, input.price, input.discount)?;

        let existing =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE sku = $1")
                .bind(&input.sku)
                .fetch_one(&self.db)
                .await?;
        if existing > 0 {
            return Err(AppError::DuplicateEntry("sku".to_string()));
        }

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, sku, price, discount, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, sku, price, discount, image_url, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.sku)
        .bind(input.price)
        .bind(input.discount)
        .bind(&input.image_url)
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }

    /// Update a product, keeping unspecified fields
    pub async fn update_product(
        &self,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> AppResult<Product> {
        let existing = sqlx::query_as::<_, Product>(
            "SELECT id, name, sku, price, discount, image_url, created_at FROM products WHERE id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let name = input.name.unwrap_or(existing.name);
        let sku = input.sku.unwrap_or(existing.sku);
        let price = input.price.unwrap_or(existing.price);
        let discount = input.discount.or(existing.discount);
        let image_url = input.image_url.or(existing.image_url);

        Self::validate(&sku, price, discount)?;

        let taken = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE sku = $1 AND id <> $2",
        )
        .bind(&sku)
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;
        if taken > 0 {
            return Err(AppError::DuplicateEntry("sku".to_string()));
        }

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $1, sku = $2, price = $3, discount = $4, image_url = $5
            WHERE id = $6
            RETURNING id, name, sku, price, discount, image_url, created_at
            "#,
        )
        .bind(&name)
        .bind(&sku)
        .bind(price)
        .bind(discount)
        .bind(&image_url)
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }

    /// Delete a product
    pub async fn delete_product(&self, product_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }

    /// List all products, newest first
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, sku, price, discount, image_url, created_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }
}
