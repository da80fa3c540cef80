//! 商品存储
//!
//! [`ItemStore`] 描述处理器需要的两个存储操作；PostgreSQL 实现见
//! `infrastructure::database::PgItemStore`，[`MemoryItemStore`] 用于测试和
//! 无数据库运行。每个操作都是一次独立的存储调用，不跨调用持锁。

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use super::model::ItemFields;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Backend(String),
}

/// 商品存储操作
pub trait ItemStore: Clone + Send + Sync + 'static {
    /// 插入一条记录，返回新分配的 item_id
    fn insert(&self, fields: &ItemFields) -> impl Future<Output = Result<i64, StoreError>> + Send;

    /// 按 item_id 覆盖 name 与 price，返回受影响的行数
    fn update_by_id(
        &self,
        item_id: i64,
        fields: &ItemFields,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;
}

/// 内存存储
#[derive(Clone, Default)]
pub struct MemoryItemStore {
    inner: Arc<Mutex<MemoryTable>>,
}

#[derive(Default)]
struct MemoryTable {
    last_id: i64,
    rows: BTreeMap<i64, ItemFields>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按 item_id 读取记录
    pub fn get(&self, item_id: i64) -> Option<ItemFields> {
        self.inner
            .lock()
            .ok()
            .and_then(|table| table.rows.get(&item_id).cloned())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|table| table.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Backend("内存存储锁已失效".to_string())
}

impl ItemStore for MemoryItemStore {
    async fn insert(&self, fields: &ItemFields) -> Result<i64, StoreError> {
        let mut table = self.inner.lock().map_err(poisoned)?;
        table.last_id += 1;
        let item_id = table.last_id;
        table.rows.insert(item_id, fields.clone());
        Ok(item_id)
    }

    async fn update_by_id(&self, item_id: i64, fields: &ItemFields) -> Result<u64, StoreError> {
        let mut table = self.inner.lock().map_err(poisoned)?;
        match table.rows.get_mut(&item_id) {
            Some(row) => {
                *row = fields.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> ItemFields {
        ItemFields {
            name: "Pen".to_string(),
            price: 1.5,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let store = MemoryItemStore::new();
        let a = store.insert(&pen()).await.unwrap();
        let b = store.insert(&pen()).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(a), Some(pen()));
    }

    #[tokio::test]
    async fn test_update_never_creates() {
        let store = MemoryItemStore::new();
        assert_eq!(store.update_by_id(5, &pen()).await.unwrap(), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites() {
        let store = MemoryItemStore::new();
        let id = store.insert(&pen()).await.unwrap();
        let pencil = ItemFields {
            name: "Pencil".to_string(),
            price: 0.5,
        };
        assert_eq!(store.update_by_id(id, &pencil).await.unwrap(), 1);
        assert_eq!(store.get(id), Some(pencil));
    }
}
