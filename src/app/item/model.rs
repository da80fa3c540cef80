//! 商品数据模型

use serde::Serialize;
use validator::Validate;

/// 客户端提交的商品字段（尚未分配 item_id）
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ItemFields {
    #[validate(length(min = 1, message = "name 不能为空"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "price 不能为负数"))]
    pub price: f64,
}

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub item_id: i64,
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(item_id: i64, fields: ItemFields) -> Self {
        Self {
            item_id,
            name: fields.name,
            price: fields.price,
        }
    }
}

/// 增加商品成功时的 `data`
#[derive(Debug, Serialize)]
pub struct ItemInfo {
    pub item_info: Item,
}

/// 修改商品成功时的 `data`
#[derive(Debug, Serialize)]
pub struct StoreInfo {
    pub store_info: Item,
}
