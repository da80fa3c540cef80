//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::response::ApiResponse;

pub const MSG_MALFORMED_PAYLOAD: &str = "客户端传递的json非法";
pub const MSG_INVALID_FIELD_VALUE: &str = "客户端传递的json值无效";
pub const MSG_INVALID_IDENTIFIER: &str = "链接中的item_id非法";
pub const MSG_NOT_FOUND: &str = "未找到相关记录";
pub const MSG_INSERT_FAILED: &str = "插入数据失败";

/// 核心错误类型
///
/// 每个变体对应一种失败类别，`msg` 在类别内固定，`data` 携带底层错误原文。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// 请求体不是合法的 JSON 对象
    #[error("客户端传递的json非法: {0}")]
    MalformedPayload(String),
    /// 字段缺失、类型不符或取值不合法
    #[error("客户端传递的json值无效: {0}")]
    InvalidFieldValue(String),
    /// 路径中的 item_id 不是合法整数
    #[error("链接中的item_id非法: {0}")]
    InvalidIdentifier(String),
    /// 要更新的记录不存在
    #[error("未找到相关记录: item_id={item_id}")]
    NotFound { item_id: i64 },
    /// 插入时存储层失败
    #[error("插入数据失败: {0}")]
    InsertFailed(String),
    /// 更新时存储层失败
    #[error("更新数据失败，item_id：{item_id}: {detail}")]
    UpdateFailed { item_id: i64, detail: String },
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::MalformedPayload(_) | CoreError::InvalidIdentifier(_) => {
                StatusCode::BAD_REQUEST
            }
            CoreError::InvalidFieldValue(_)
            | CoreError::NotFound { .. }
            | CoreError::InsertFailed(_)
            | CoreError::UpdateFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 转换为失败响应结构
    pub fn to_response(&self) -> ApiResponse<String> {
        match self {
            CoreError::MalformedPayload(detail) => {
                ApiResponse::failure(MSG_MALFORMED_PAYLOAD, detail.clone())
            }
            CoreError::InvalidFieldValue(detail) => {
                ApiResponse::failure(MSG_INVALID_FIELD_VALUE, detail.clone())
            }
            CoreError::InvalidIdentifier(detail) => {
                ApiResponse::failure(MSG_INVALID_IDENTIFIER, detail.clone())
            }
            CoreError::NotFound { item_id } => {
                ApiResponse::failure(MSG_NOT_FOUND, format!("item_id为{}的商品不存在", item_id))
            }
            CoreError::InsertFailed(detail) => {
                ApiResponse::failure(MSG_INSERT_FAILED, detail.clone())
            }
            CoreError::UpdateFailed { item_id, detail } => {
                ApiResponse::failure(format!("更新数据失败，item_id：{}", item_id), detail.clone())
            }
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            CoreError::InsertFailed(_) | CoreError::UpdateFailed { .. } => {
                error!("存储层错误: {}", self)
            }
            _ => warn!("请求处理失败: {}", self),
        }

        (status, Json(self.to_response())).into_response()
    }
}
