//! 数据库基础设施

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;

use super::config::DatabaseConfig;
use crate::app::item::{ItemFields, ItemStore, StoreError};

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        info!("连接数据库: {}", config.redacted_url());

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    /// 确保 items 表存在
    pub async fn ensure_schema(&self) -> Result<(), Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                item_id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("数据表 items 已就绪");
        Ok(())
    }

    pub fn item_store(&self) -> PgItemStore {
        PgItemStore::new(self.pool.clone())
    }
}

/// 基于 PostgreSQL 的商品存储
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ItemStore for PgItemStore {
    async fn insert(&self, fields: &ItemFields) -> Result<i64, StoreError> {
        let (item_id,): (i64,) =
            sqlx::query_as("INSERT INTO items (name, price) VALUES ($1, $2) RETURNING item_id")
                .bind(&fields.name)
                .bind(fields.price)
                .fetch_one(&self.pool)
                .await?;

        Ok(item_id)
    }

    async fn update_by_id(&self, item_id: i64, fields: &ItemFields) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE items SET name = $1, price = $2 WHERE item_id = $3")
            .bind(&fields.name)
            .bind(fields.price)
            .bind(item_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
