//! 核心响应处理模块
//!
//! 所有接口（成功或失败）都只通过 [`ApiResponse`] 输出 `{code, msg, data}`，
//! 字段顺序固定，三个字段始终存在。

use serde::{Serialize, Serializer};

/// 成功时的提示信息
pub const MSG_SUCCESS: &str = "成功";

/// 尚未实现的查询/删除接口返回的占位数据
pub const NO_DATA_YET: &str = "暂无数据";

/// 响应状态码，只有成功和失败两种取值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success = 0,
    Failure = 1,
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// API 响应结构
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: ResponseCode,
    pub msg: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: ResponseCode::Success,
            msg: MSG_SUCCESS.to_string(),
            data,
        }
    }

    pub fn failure(msg: impl Into<String>, data: T) -> Self {
        Self {
            code: ResponseCode::Failure,
            msg: msg.into(),
            data,
        }
    }
}

impl ApiResponse<&'static str> {
    /// 占位接口的固定响应
    pub fn placeholder() -> Self {
        Self::success(NO_DATA_YET)
    }
}
