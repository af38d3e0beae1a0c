//! User management service

use bcrypt::{hash, DEFAULT_COST};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::types::Role;

/// User management service
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

/// A user account (password hash never serialized)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub area: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub area: String,
}

/// Input for updating a user; password change is optional
#[derive(Debug, Deserialize)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub area: Option<String>,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a user with a bcrypt-hashed password
    pub async fn create_user(&self, input: CreateUserInput) -> AppResult<User> {
        shared::validate_email(&input.email).map_err(|msg| AppError::Validation {
            field: "email".to_string(),
            message: msg.to_string(),
        })?;
        shared::validate_password(&input.password).map_err(|msg| AppError::Validation {
            field: "password".to_string(),
            message: msg.to_string(),
        })?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(&input.email)
            .fetch_one(&self.db)
            .await?;
        if existing > 0 {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }

        let password_hash = hash(&input.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role, area)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, role, area, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&password_hash)
        .bind(input.role.as_str())
        .bind(&input.area)
        .fetch_one(&self.db)
        .await?;

        Ok(user)
    }

    /// Update a user, re-hashing the password only when one is supplied
    pub async fn update_user(&self, user_id: Uuid, input: UpdateUserInput) -> AppResult<User> {
        let existing = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, area, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        let name = input.name.unwrap_or(existing.name);
        let email = input.email.unwrap_or(existing.email);
        let area = input.area.unwrap_or(existing.area);
        let role = match input.role {
            Some(role) => role.as_str().to_string(),
            None => existing.role,
        };

        shared::validate_email(&email).map_err(|msg| AppError::Validation {
            field: "email".to_string(),
            message: msg.to_string(),
        })?;

        let taken = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE email = $1 AND id <> $2",
        )
        .bind(&email)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;
        if taken > 0 {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }

        if let Some(password) = &input.password {
            shared::validate_password(password).map_err(|msg| AppError::Validation {
                field: "password".to_string(),
                message: msg.to_string(),
            })?;
            let password_hash = hash(password, DEFAULT_COST)
                .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;
            sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
                .bind(&password_hash)
                .bind(user_id)
                .execute(&self.db)
                .await?;
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, email = $2, role = $3, area = $4
            WHERE id = $5
            RETURNING id, name, email, role, area, created_at
            "#,
        )
        .bind(&name)
        .bind(&email)
        .bind(&role)
        .bind(&area)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(user)
    }

    /// Delete a user
    pub async fn delete_user(&self, user_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User".to_string()));
        }

        Ok(())
    }

    /// List all users, newest first
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, area, created_at FROM users ORDER BY created_at DESC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }
}
