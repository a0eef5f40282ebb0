//! Removal of empty fields from outbound JSON bodies.
//!
//! The backend rejects filters that are present but empty (`""`, `[]`), so
//! every JSON body is pruned before it leaves the client. A field is dropped
//! when its value is `null`, an empty string or an empty array, at any
//! depth. Objects nested in arrays are pruned too, but array elements are
//! never removed and objects that end up empty stay as `{}`. Both rules
//! keep the operation idempotent.

use serde_json::{Map, Value};

/// Returns a pruned copy of `value`.
pub fn sanitize_json(value: &Value) -> Value {
    let mut out = value.clone();
    sanitize_in_place(&mut out);
    out
}

/// Prunes `value` in place.
pub fn sanitize_in_place(value: &mut Value) {
    match value {
        Value::Object(map) => sanitize_map(map),
        Value::Array(items) => items.iter_mut().for_each(sanitize_in_place),
        _ => {}
    }
}

fn sanitize_map(map: &mut Map<String, Value>) {
    map.retain(|_, v| !is_empty_value(v));
    for v in map.values_mut() {
        sanitize_in_place(v);
    }
}

/// `true` for the values a field may not carry on the wire.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn removes_empty_fields_recursively() {
        let input = json!({"a": 1, "b": null, "c": [], "d": {"e": "", "f": 2}});
        assert_eq!(sanitize_json(&input), json!({"a": 1, "d": {"f": 2}}));
    }

    #[test]
    fn keeps_falsy_but_meaningful_values() {
        let input = json!({"zero": 0, "no": false, "space": " ", "obj": {}});
        assert_eq!(sanitize_json(&input), input);
    }

    #[test]
    fn prunes_objects_inside_arrays_without_dropping_elements() {
        let input = json!({"items": [{"id": "x", "tag": null}, "", null, [] ]});
        assert_eq!(
            sanitize_json(&input),
            json!({"items": [{"id": "x"}, "", null, []]})
        );
    }

    #[test]
    fn emptied_object_is_kept() {
        let input = json!({"filters": {"connector": [], "severity": ""}, "limit": 10});
        assert_eq!(sanitize_json(&input), json!({"filters": {}, "limit": 10}));
    }

    #[test]
    fn idempotent_on_nested_input() {
        let input = json!({
            "filters": {
                "benchmarkID": ["cis"],
                "connectionID": [],
                "nested": {"a": null, "b": [{"c": "", "d": [1]}]}
            },
            "sort": null,
            "afterSortKey": []
        });
        let once = sanitize_json(&input);
        let twice = sanitize_json(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(sanitize_json(&json!("")), json!(""));
        assert_eq!(sanitize_json(&Value::Null), Value::Null);
        assert_eq!(sanitize_json(&json!(3)), json!(3));
    }
}
