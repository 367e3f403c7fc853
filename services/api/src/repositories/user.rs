//! User repository for PostgreSQL

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use super::{UserRepository, constraint_error};
use crate::models::{User, UserRole};

/// User repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// First user whose `column` equals `value`
    async fn find_one_by(&self, column: UserLookup, value: &str) -> Result<Option<User>> {
        let sql = format!(
            r#"
            SELECT user_id, username, email, phone, address, password_hash, role
            FROM users
            WHERE {} = $1
            ORDER BY user_id
            LIMIT 1
            "#,
            column.as_column()
        );

        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }
}

/// Single-field lookups supported by the users table
#[derive(Debug, Clone, Copy)]
enum UserLookup {
    Id,
    Email,
    Phone,
    Username,
}

impl UserLookup {
    fn as_column(self) -> &'static str {
        match self {
            UserLookup::Id => "user_id",
            UserLookup::Email => "email",
            UserLookup::Phone => "phone",
            UserLookup::Username => "username",
        }
    }
}

pub(crate) fn still_referenced(user_id: &str) -> String {
    format!("User {} is still referenced by other records", user_id)
}

fn user_from_row(row: &PgRow) -> Result<User> {
    let role: Option<String> = row.try_get("role")?;

    Ok(User {
        user_id: row.try_get("user_id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        address: row.try_get("address")?,
        password_hash: row.try_get("password_hash")?,
        role: role.map(|r| r.parse::<UserRole>()).transpose()?,
    })
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, username, email, phone, address, password_hash, role
            FROM users
            ORDER BY user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(user_from_row).collect()
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        info!("Finding user by ID: {}", user_id);
        self.find_one_by(UserLookup::Id, user_id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        info!("Finding user by email: {}", email);
        self.find_one_by(UserLookup::Email, email).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>> {
        info!("Finding user by phone: {}", phone);
        self.find_one_by(UserLookup::Phone, phone).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        info!("Finding user by username: {}", username);
        self.find_one_by(UserLookup::Username, username).await
    }

    async fn save(&self, user: &User) -> Result<User> {
        info!("Saving user: {}", user.user_id);

        let row = sqlx::query(
            r#"
            INSERT INTO users (user_id, username, email, phone, address, password_hash, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE SET
            username = EXCLUDED.username,
            email = EXCLUDED.email,
            phone = EXCLUDED.phone,
            address = EXCLUDED.address,
            password_hash = EXCLUDED.password_hash,
            role = EXCLUDED.role
            RETURNING user_id, username, email, phone, address, password_hash, role
            "#,
        )
        .bind(&user.user_id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.address)
        .bind(&user.password_hash)
        .bind(user.role.map(|r| r.as_str()))
        .fetch_one(&self.pool)
        .await?;

        user_from_row(&row)
    }

    async fn delete(&self, user_id: &str) -> Result<bool> {
        info!("Deleting user: {}", user_id);

        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| constraint_error(e, || still_referenced(user_id)))?;

        Ok(result.rows_affected() > 0)
    }
}
