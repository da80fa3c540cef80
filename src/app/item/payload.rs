//! 请求解析：请求体解码、路径参数解析、字段类型校验
//!
//! 请求体先解码成无类型的 `Map<String, Value>`，只检查 JSON 语法；
//! 然后 [`coerce_fields`] 逐字段检查类型并产出 [`ItemFields`]。
//! 字段缺失和类型不符都归为 [`FieldError`]，由调用方转换成
//! `CoreError::InvalidFieldValue`，不会以 panic 的形式离开处理器。

use serde_json::{Map, Value};
use validator::Validate;

use super::model::ItemFields;
use crate::core::error::CoreError;

/// 无类型字段表，只在解码和字段校验之间使用
pub type FieldMap = Map<String, Value>;

/// 字段校验错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("缺少字段: {field}")]
    Missing { field: &'static str },
    #[error("字段 {field} 类型错误: 期望 {expected}, 实际为 {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("字段取值无效: {0}")]
    Rejected(String),
}

impl From<FieldError> for CoreError {
    fn from(err: FieldError) -> Self {
        CoreError::InvalidFieldValue(err.to_string())
    }
}

/// 将请求体解码为字段表
///
/// 非 JSON 或顶层不是对象都属于 `MalformedPayload`。
pub fn decode_payload(body: &[u8]) -> Result<FieldMap, CoreError> {
    serde_json::from_slice::<FieldMap>(body).map_err(|e| CoreError::MalformedPayload(e.to_string()))
}

/// 解析路径中的 item_id
pub fn parse_item_id(raw: &str) -> Result<i64, CoreError> {
    raw.parse::<i64>()
        .map_err(|e| CoreError::InvalidIdentifier(format!("无法解析 {:?}: {}", raw, e)))
}

/// 从字段表中取出并校验 `name` 与 `price`
///
/// 不做跨类型的隐式转换：字符串形式的数字不会被当成 price。
pub fn coerce_fields(map: &FieldMap) -> Result<ItemFields, FieldError> {
    let name = required(map, "name")?
        .as_str()
        .ok_or_else(|| wrong_type(map, "name", "string"))?
        .to_string();

    let price = required(map, "price")?
        .as_f64()
        .ok_or_else(|| wrong_type(map, "price", "number"))?;

    let fields = ItemFields { name, price };
    fields.validate().map_err(|errors| {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} 校验失败", field))
                })
            })
            .collect();
        messages.sort();
        FieldError::Rejected(messages.join(", "))
    })?;

    Ok(fields)
}

fn required<'a>(map: &'a FieldMap, field: &'static str) -> Result<&'a Value, FieldError> {
    match map.get(field) {
        Some(value) => Ok(value),
        None => Err(FieldError::Missing { field }),
    }
}

fn wrong_type(map: &FieldMap, field: &'static str, expected: &'static str) -> FieldError {
    FieldError::WrongType {
        field,
        expected,
        found: map.get(field).map(json_kind).unwrap_or("null"),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map_of(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_decode_accepts_object() {
        let map = decode_payload(br#"{"name":"Pen","price":1.5,"extra":[1,2]}"#).unwrap();
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode_payload(b"name=Pen").unwrap_err();
        assert!(matches!(err, CoreError::MalformedPayload(_)));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let bodies: [&[u8]; 5] = [b"[1,2,3]", b"\"Pen\"", b"42", b"null", b""];
        for body in bodies {
            let err = decode_payload(body).unwrap_err();
            assert!(matches!(err, CoreError::MalformedPayload(_)));
        }
    }

    #[test]
    fn test_decode_does_not_check_fields() {
        let map = decode_payload(br#"{"price":"abc"}"#).unwrap();
        assert_eq!(map["price"], json!("abc"));
    }

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("999").unwrap(), 999);
        assert!(matches!(
            parse_item_id("abc"),
            Err(CoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            parse_item_id("1.5"),
            Err(CoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            parse_item_id("99999999999999999999"),
            Err(CoreError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_coerce_valid_fields() {
        let map = map_of(json!({"name": "Pen", "price": 1.5, "item_id": 7}));
        let fields = coerce_fields(&map).unwrap();
        assert_eq!(
            fields,
            ItemFields {
                name: "Pen".to_string(),
                price: 1.5
            }
        );
    }

    #[test]
    fn test_coerce_integer_price() {
        let map = map_of(json!({"name": "Pen", "price": 3}));
        assert_eq!(coerce_fields(&map).unwrap().price, 3.0);
    }

    #[test]
    fn test_coerce_missing_field() {
        let map = map_of(json!({"price": 1.5}));
        assert_eq!(
            coerce_fields(&map),
            Err(FieldError::Missing { field: "name" })
        );
    }

    #[test]
    fn test_coerce_numeric_string_price_fails() {
        let map = map_of(json!({"name": "Pen", "price": "1.5"}));
        assert_eq!(
            coerce_fields(&map),
            Err(FieldError::WrongType {
                field: "price",
                expected: "number",
                found: "string"
            })
        );
    }

    #[test]
    fn test_coerce_wrong_name_type() {
        let map = map_of(json!({"name": 12, "price": 1.5}));
        assert!(matches!(
            coerce_fields(&map),
            Err(FieldError::WrongType { field: "name", .. })
        ));

        let map = map_of(json!({"name": null, "price": 1.5}));
        assert!(matches!(
            coerce_fields(&map),
            Err(FieldError::WrongType { found: "null", .. })
        ));
    }

    #[test]
    fn test_coerce_rejects_empty_name_and_negative_price() {
        let map = map_of(json!({"name": "", "price": -1.0}));
        let err = coerce_fields(&map).unwrap_err();
        assert_eq!(
            err,
            FieldError::Rejected("name 不能为空, price 不能为负数".to_string())
        );
    }

    #[test]
    fn test_coerce_is_idempotent() {
        let good = map_of(json!({"name": "Pen", "price": 0.0}));
        assert_eq!(coerce_fields(&good), coerce_fields(&good));

        let bad = map_of(json!({"name": "", "price": -2}));
        assert_eq!(coerce_fields(&bad), coerce_fields(&bad));
    }

    #[test]
    fn test_field_error_converts_to_invalid_field_value() {
        let err: CoreError = FieldError::Missing { field: "price" }.into();
        match err {
            CoreError::InvalidFieldValue(detail) => assert_eq!(detail, "缺少字段: price"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
