//! 应用层

pub mod item;

use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use item::{AppState, ItemStore};

/// 请求体长度上限（字节）
pub const MAX_PAYLOAD_BYTES: usize = 2 * 1024 * 1024;

/// 组装完整的路由，存储由调用方注入
pub fn build_app<S: ItemStore>(store: S) -> Router {
    item::routes::<S>()
        .with_state(AppState::new(store))
        .layer(DefaultBodyLimit::max(MAX_PAYLOAD_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
}
