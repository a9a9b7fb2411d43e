//! 数据库基础设施
//!
//! PostgreSQL 连接池和基于显式 SQL 的产品存储，表结构见 `migrations/`。

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::app::product::{NewProduct, Product, ProductStore};
use crate::config::DatabaseConfig;
use crate::core::error::CoreError;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str, config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// 执行 `migrations/` 下尚未应用的迁移
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    pub fn into_store(self) -> PgProductStore {
        PgProductStore::new(self.pool)
    }
}

/// PostgreSQL 产品存储
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, CoreError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get(&self, id: i64) -> Result<Product, CoreError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CoreError::NotFound(id))
    }

    async fn create(&self, fields: NewProduct) -> Result<Product, CoreError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price) VALUES ($1, $2, $3) \
             RETURNING id, name, description, price",
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: i64, fields: NewProduct) -> Result<Product, CoreError> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $1, description = $2, price = $3 WHERE id = $4 \
             RETURNING id, name, description, price",
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id));
        }
        Ok(())
    }
}
