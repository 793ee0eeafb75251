//! Dotted key-path lookup and presence classification over JSON values

use serde_json::Value;

use super::text::strip;

/// Resolve a dot-separated path (`branding.primaryColor`) inside `root`.
///
/// Returns `None` when any segment is absent or an intermediate value is not
/// an object. A JSON `null` is reported as absent.
pub fn resolve<'a>(root: &'a Value, dotted: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in dotted.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    if current.is_null() {
        return None;
    }
    Some(current)
}

/// Whether a resolved value counts as present.
///
/// Numbers and booleans are always present, including `0` and `false`.
pub fn is_non_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !strip(s).is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => true,
    }
}
