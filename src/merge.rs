use serde_json::{Map, Value};

/// Deep-merge `overlay` on top of `base` and return the combined value.
///
/// **Rules**
/// - If both sides are JSON objects, the result holds every key of
///   `base`; for each key of `overlay`, nested objects on both sides are
///   merged recursively and anything else is replaced by the overlay
///   value.
/// - If either side is not an object, the result is `overlay`.
///
/// Arrays are opaque: they replace and are replaced, never merged
/// element-wise. Neither input is modified.
///
/// ```
/// use serde_json::json;
/// use twiglet::merge::merge;
///
/// let merged = merge(&json!({"a": {"a": 1}, "b": 2}), &json!({"a": {"b": 1}, "b": 3}));
/// assert_eq!(merged, json!({"a": {"a": 1, "b": 1}, "b": 3}));
/// ```
pub fn merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => Value::Object(merge_maps(base, overlay)),
        _ => overlay.clone(),
    }
}

/// Object-only form of [`merge`].
pub fn merge_maps(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut result = base.clone();
    merge_into(&mut result, overlay);
    result
}

/// Merge `overlay` into a map the caller already owns.
///
/// Used by the record assembly pipeline, which builds a fresh map per
/// call and can therefore fold each layer in place.
pub(crate) fn merge_into(target: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        insert_merged(target, key.clone(), value.clone());
    }
}

fn insert_merged(target: &mut Map<String, Value>, key: String, value: Value) {
    if let (Some(Value::Object(existing)), Value::Object(incoming)) = (target.get_mut(&key), &value) {
        merge_into(existing, incoming);
        return;
    }
    target.insert(key, value);
}

/// Expand dotted keys into nested objects, recursively.
///
/// `{"service.name": "api"}` becomes `{"service": {"name": "api"}}`. When
/// several keys converge on the same path they are deep-merged in
/// iteration order, so later keys win on conflict. Keys with an empty
/// segment (`".a"`, `"a."`, `"a..b"`) are kept literally.
pub fn nest_dotted(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(nest_dotted_map(map)),
        Value::Array(items) => Value::Array(items.iter().map(nest_dotted).collect()),
        other => other.clone(),
    }
}

/// Object-only form of [`nest_dotted`].
pub fn nest_dotted_map(map: &Map<String, Value>) -> Map<String, Value> {
    let mut nested = Map::new();
    for (key, value) in map {
        let value = nest_dotted(value);
        match split_path(key) {
            Some((head, rest)) => {
                let inner = rest.iter().rev().fold(value, |inner, segment| {
                    let mut wrapper = Map::new();
                    wrapper.insert((*segment).to_string(), inner);
                    Value::Object(wrapper)
                });
                insert_merged(&mut nested, head.to_string(), inner);
            }
            None => insert_merged(&mut nested, key.clone(), value),
        }
    }
    nested
}

fn split_path(key: &str) -> Option<(&str, Vec<&str>)> {
    let mut segments = key.split('.');
    let head = segments.next()?;
    let rest: Vec<&str> = segments.collect();
    if rest.is_empty() || head.is_empty() || rest.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some((head, rest))
}
