//! 商品处理器
//!
//! 每个处理器按 解码 → 字段校验 → 存储 的顺序执行，任一阶段失败都以
//! `CoreError` 返回，由它生成唯一的一份失败响应。

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    response::Json,
    routing::{post, put},
    Router,
};

use super::{
    model::{ItemInfo, StoreInfo},
    payload::{coerce_fields, decode_payload, parse_item_id},
    service::ItemService,
    store::ItemStore,
};
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Clone)]
pub struct AppState<S> {
    pub item_service: ItemService<S>,
}

impl<S: ItemStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            item_service: ItemService::new(store),
        }
    }
}

/// 请求体读取失败（例如超过长度上限）按 JSON 非法处理
fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, CoreError> {
    body.map_err(|rejection| CoreError::MalformedPayload(rejection.body_text()))
}

/// 增加商品（PUT/POST /item）
///
/// 请求体中的 item_id 会被忽略，由存储分配。
pub async fn create_item<S: ItemStore>(
    State(state): State<AppState<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse<ItemInfo>>, CoreError> {
    let body = read_body(body)?;
    let map = decode_payload(&body)?;
    let fields = coerce_fields(&map)?;
    let item = state.item_service.create_item(fields).await?;
    Ok(Json(ApiResponse::success(ItemInfo { item_info: item })))
}

/// 修改商品（POST /item/:item_id）
///
/// 先校验路径中的 item_id，再查看请求体。
pub async fn update_item<S: ItemStore>(
    State(state): State<AppState<S>>,
    raw_id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse<StoreInfo>>, CoreError> {
    let Path(raw_id) =
        raw_id.map_err(|rejection| CoreError::InvalidIdentifier(rejection.body_text()))?;
    let item_id = parse_item_id(&raw_id)?;
    let body = read_body(body)?;
    let map = decode_payload(&body)?;
    let fields = coerce_fields(&map)?;
    let item = state.item_service.update_item(item_id, fields).await?;
    Ok(Json(ApiResponse::success(StoreInfo { store_info: item })))
}

/// 查询商品（占位）
pub async fn get_item() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::placeholder())
}

/// 删除商品（占位）
pub async fn delete_item() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::placeholder())
}

pub fn routes<S: ItemStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/item", put(create_item::<S>).post(create_item::<S>))
        .route(
            "/item/:item_id",
            post(update_item::<S>).get(get_item).delete(delete_item),
        )
}
