//! Body and query-string encoding.
//!
//! Bodies arrive as `serde_json::Value` and are encoded according to the
//! declared [`ContentType`]. Form-style encodings flatten the top level:
//! each key becomes one field, or one field per element for arrays. String
//! values are sent raw, everything else as compact JSON.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{ContentType, FilePart, FormField, RequestBody};
use crate::sanitize::sanitize_json;

/// Encodes `body` for the wire. Only JSON bodies are sanitized.
pub fn encode_body(
    content_type: ContentType,
    body: &Value,
    files: &[(String, FilePart)],
) -> Result<RequestBody, ApiError> {
    let encoded = match content_type {
        ContentType::Json => {
            let sanitized = sanitize_json(body);
            RequestBody::Json(
                serde_json::to_string(&sanitized)
                    .map_err(|e| ApiError::SerializationError(e.to_string()))?,
            )
        }
        ContentType::FormData => {
            let mut fields: Vec<FormField> = flatten_pairs(body)?
                .into_iter()
                .map(|(name, value)| FormField::text(name, value))
                .collect();
            fields.extend(
                files
                    .iter()
                    .map(|(name, part)| FormField::file(name.clone(), part.clone())),
            );
            RequestBody::Form(fields)
        }
        ContentType::UrlEncoded => RequestBody::UrlEncoded(flatten_pairs(body)?),
        ContentType::Text => RequestBody::Text(match body {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }),
    };
    Ok(encoded)
}

/// Flattens the top level of an object into repeated `(key, value)` pairs.
fn flatten_pairs(body: &Value) -> Result<Vec<(String, String)>, ApiError> {
    let map = match body {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ApiError::SerializationError(format!(
                "form bodies must be objects, got {}",
                json_type_name(other)
            )))
        }
    };

    let mut pairs = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), stringify_item(item)));
                }
            }
            other => pairs.push((key.clone(), stringify_item(other))),
        }
    }
    Ok(pairs)
}

fn stringify_item(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Serializes a query object into ordered pairs.
///
/// `null` values are skipped, arrays repeat the key and strings are sent
/// raw. Anything that does not serialize to an object is rejected.
pub fn encode_query<Q: Serialize + ?Sized>(query: &Q) -> Result<Vec<(String, String)>, ApiError> {
    let value =
        serde_json::to_value(query).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ApiError::SerializationError(format!(
                "query must serialize to an object, got {}",
                json_type_name(&other)
            )))
        }
    };

    let mut pairs = Vec::new();
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => pairs.extend(
                items
                    .iter()
                    .filter(|v| !v.is_null())
                    .map(|v| (key.clone(), stringify_item(v))),
            ),
            other => pairs.push((key, stringify_item(&other))),
        }
    }
    Ok(pairs)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_body_is_sanitized_single_document() {
        let body = json!({"filters": {"connector": ["AWS"], "severity": []}, "cursor": null});
        let encoded = encode_body(ContentType::Json, &body, &[]).unwrap();
        let RequestBody::Json(text) = encoded else {
            panic!("expected JSON body");
        };
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, json!({"filters": {"connector": ["AWS"]}}));
    }

    #[test]
    fn form_body_has_field_per_key_and_element() {
        let body = json!({
            "name": "prod",
            "count": 3,
            "tags": ["a", "b"],
            "meta": {"k": "v"},
            "flag": true
        });
        let RequestBody::Form(fields) = encode_body(ContentType::FormData, &body, &[]).unwrap()
        else {
            panic!("expected form body");
        };
        let text: Vec<(String, String)> = fields
            .into_iter()
            .map(|f| match f.value {
                crate::http::FormValue::Text(v) => (f.name, v),
                crate::http::FormValue::File(_) => unreachable!(),
            })
            .collect();
        for expected in [
            ("name", "prod"),
            ("count", "3"),
            ("tags", "a"),
            ("tags", "b"),
            ("meta", r#"{"k":"v"}"#),
            ("flag", "true"),
        ] {
            assert!(
                text.contains(&(expected.0.to_string(), expected.1.to_string())),
                "missing {expected:?} in {text:?}"
            );
        }
        assert_eq!(text.len(), 6);
    }

    #[test]
    fn form_body_is_not_sanitized() {
        let body = json!({"description": ""});
        let RequestBody::Form(fields) = encode_body(ContentType::FormData, &body, &[]).unwrap()
        else {
            panic!("expected form body");
        };
        assert_eq!(fields, vec![FormField::text("description", "")]);
    }

    #[test]
    fn form_body_appends_files() {
        let part = FilePart::new("policy.yaml", b"id: x".to_vec()).with_mime("application/yaml");
        let body = json!({"kind": "control"});
        let RequestBody::Form(fields) =
            encode_body(ContentType::FormData, &body, &[("file".to_string(), part.clone())])
                .unwrap()
        else {
            panic!("expected form body");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1], FormField::file("file", part));
    }

    #[test]
    fn form_body_rejects_scalars() {
        let err = encode_body(ContentType::FormData, &json!(5), &[]).unwrap_err();
        assert!(matches!(err, ApiError::SerializationError(_)));
    }

    #[test]
    fn text_body_stringifies_non_strings() {
        assert_eq!(
            encode_body(ContentType::Text, &json!("SELECT 1"), &[]).unwrap(),
            RequestBody::Text("SELECT 1".to_string())
        );
        assert_eq!(
            encode_body(ContentType::Text, &json!({"a": 1}), &[]).unwrap(),
            RequestBody::Text(r#"{"a":1}"#.to_string())
        );
    }

    #[test]
    fn urlencoded_body_flattens_pairs() {
        let encoded =
            encode_body(ContentType::UrlEncoded, &json!({"a": "x", "b": [1, 2]}), &[]).unwrap();
        assert_eq!(
            encoded,
            RequestBody::UrlEncoded(vec![
                ("a".to_string(), "x".to_string()),
                ("b".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ])
        );
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Page {
        connector: Option<String>,
        page_size: u32,
        page_number: u32,
        tags: Vec<&'static str>,
    }

    #[test]
    fn query_skips_nulls_and_repeats_arrays() {
        let pairs = encode_query(&Page {
            connector: None,
            page_size: 10,
            page_number: 1,
            tags: vec!["x", "y"],
        })
        .unwrap();
        assert_eq!(
            pairs,
            vec![
                ("pageSize".to_string(), "10".to_string()),
                ("pageNumber".to_string(), "1".to_string()),
                ("tags".to_string(), "x".to_string()),
                ("tags".to_string(), "y".to_string()),
            ]
        );
    }

    #[test]
    fn query_rejects_non_objects() {
        assert!(encode_query(&[1, 2]).is_err());
        assert!(encode_query(&()).unwrap().is_empty());
    }
}
