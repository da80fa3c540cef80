//! # 商品信息 HTTP 服务
//!
//! 提供增加、修改商品的接口，所有响应统一为 `{code, msg, data}` 结构：
//! - `app`: 商品应用（请求解析、字段校验、存储、处理器）
//! - `core`: 统一响应结构、错误类型、中间件
//! - `infrastructure`: 配置、数据库、日志

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{build_app, MAX_PAYLOAD_BYTES};
pub use app::item::{Item, ItemFields, ItemStore, MemoryItemStore, StoreError};
pub use crate::core::error::CoreError;
pub use crate::core::response::{ApiResponse, ResponseCode};
