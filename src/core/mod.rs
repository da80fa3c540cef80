//! 核心层：统一响应结构、错误类型、中间件

pub mod error;
pub mod middleware;
pub mod response;
