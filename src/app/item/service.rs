//! 商品业务服务

use tracing::{error, info};

use super::{
    model::{Item, ItemFields},
    store::ItemStore,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ItemService<S> {
    store: S,
}

impl<S: ItemStore> ItemService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 增加商品，返回带有新 item_id 的完整记录
    pub async fn create_item(&self, fields: ItemFields) -> Result<Item, CoreError> {
        let item_id = self
            .store
            .insert(&fields)
            .await
            .map_err(|e| CoreError::InsertFailed(e.to_string()))?;

        info!("增加商品成功: item_id={}, name={}", item_id, fields.name);
        Ok(Item::new(item_id, fields))
    }

    /// 修改商品
    ///
    /// 受影响行数为 0 表示记录不存在；大于 1 说明 item_id 不唯一，按存储失败处理。
    pub async fn update_item(&self, item_id: i64, fields: ItemFields) -> Result<Item, CoreError> {
        let affected = self
            .store
            .update_by_id(item_id, &fields)
            .await
            .map_err(|e| CoreError::UpdateFailed {
                item_id,
                detail: e.to_string(),
            })?;

        match affected {
            0 => Err(CoreError::NotFound { item_id }),
            1 => {
                info!("修改商品成功: item_id={}, name={}", item_id, fields.name);
                Ok(Item::new(item_id, fields))
            }
            n => {
                error!("item_id={} 匹配到 {} 条记录", item_id, n);
                Err(CoreError::UpdateFailed {
                    item_id,
                    detail: format!("受影响的行数为 {}，item_id 应唯一", n),
                })
            }
        }
    }
}
