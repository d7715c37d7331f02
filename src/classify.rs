//! Value classification.
//!
//! Maps a dynamic value to its runtime type name, following the JSON data
//! model's own categories:
//! - null, boolean, number, string, array, object
//!
//! Absent values (a field that is not present at all) classify as
//! "undefined"; this is distinct from an explicit null.

use serde_json::Value;

/// Type-name label produced by classification.
pub type TypeName = &'static str;

/// Classification of an absent value.
pub const UNDEFINED_TYPE: TypeName = "undefined";

/// Returns the runtime type name of a value.
///
/// Pure and infallible. This is the default classifier used by
/// [`TypeChecker`](crate::TypeChecker); a checker may be configured
/// with a different one.
pub fn classify(value: &Value) -> TypeName {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
