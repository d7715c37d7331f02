//! typeguard - runtime type assertions for dynamic JSON values
//!
//! Validates `serde_json::Value`s against compact type descriptors: a
//! type name (`"string"`), an optional type name (`"string?"`, also
//! accepting null or an absent value), or an alternation of names
//! (`["string", "number"]`).
//!
//! ```
//! use serde_json::json;
//!
//! typeguard::check(&json!("string"), &json!("hello")).unwrap();
//! typeguard::check(&json!(["string", "number"]), &json!(5)).unwrap();
//! assert!(typeguard::check(&json!("number"), &json!("five")).is_err());
//! ```

pub mod checker;
pub mod classify;
pub mod descriptor;
pub mod errors;

pub use checker::{Classifier, TypeChecker};
pub use classify::{TypeName, UNDEFINED_TYPE};
pub use descriptor::{Descriptor, TypeSpec, OPTIONAL_MARKER};
pub use errors::{CheckError, CheckResult};

use serde_json::Value;

/// Validates a value against a descriptor using the native classifier.
///
/// Convenience wrapper over [`TypeChecker::check`]; construct a
/// [`TypeChecker`] to use a custom classifier or check absent values.
///
/// # Errors
///
/// - [`CheckError::InvalidDescriptor`] if the descriptor is neither a
///   string nor an array of strings
/// - [`CheckError::TypeMismatch`] if the value matches no entry
pub fn check(descriptor: &Value, value: &Value) -> CheckResult<()> {
    TypeChecker::new().check(descriptor, value)
}

/// Returns the native type name of a value.
pub fn classify(value: &Value) -> TypeName {
    classify::classify(value)
}
