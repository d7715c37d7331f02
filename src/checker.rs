//! The type checker.
//!
//! Validates values against descriptors by alternation: entries are tried
//! in order with a non-throwing match predicate, the first success
//! short-circuits, and a single `TypeMismatch` is raised only after every
//! entry is exhausted. Checking does not mutate anything and is
//! deterministic for a given classifier.

use serde_json::Value;
use tracing::{debug, trace};

use crate::classify::{self, TypeName, UNDEFINED_TYPE};
use crate::descriptor::{Descriptor, TypeSpec};
use crate::errors::{CheckError, CheckResult};

/// Classifier strategy mapping a value to its type name.
pub type Classifier = dyn Fn(&Value) -> TypeName + Send + Sync;

/// Validates dynamic values against type descriptors.
///
/// The checker holds its classifier as an injectable strategy. Default
/// construction uses the native JSON classification from
/// [`classify`](crate::classify); substituting a classifier changes what
/// every subsequent check through this checker considers a value's type.
pub struct TypeChecker {
    classifier: Box<Classifier>,
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChecker {
    /// Checker using the native classifier.
    pub fn new() -> Self {
        Self {
            classifier: Box::new(classify::classify),
        }
    }

    /// Checker using a custom classifier.
    pub fn with_classifier<F>(classifier: F) -> Self
    where
        F: Fn(&Value) -> TypeName + Send + Sync + 'static,
    {
        Self {
            classifier: Box::new(classifier),
        }
    }

    /// Replaces the classifier; affects all subsequent checks. Last
    /// assignment wins.
    pub fn set_classifier<F>(&mut self, classifier: F)
    where
        F: Fn(&Value) -> TypeName + Send + Sync + 'static,
    {
        self.classifier = Box::new(classifier);
    }

    /// Classifies a value with the current classifier.
    pub fn classify(&self, value: &Value) -> TypeName {
        (self.classifier)(value)
    }

    /// Validates `value` against a dynamic descriptor: a JSON string, or
    /// a JSON array of strings tried as an alternation.
    ///
    /// # Errors
    ///
    /// - `CheckError::InvalidDescriptor` if the descriptor is neither a
    ///   string nor an array of strings
    /// - `CheckError::TypeMismatch` if the value matches no entry
    pub fn check(&self, descriptor: &Value, value: &Value) -> CheckResult<()> {
        self.check_opt(descriptor, Some(value))
    }

    /// Same as [`check`](Self::check) for a possibly-absent value.
    ///
    /// `None` classifies as [`UNDEFINED_TYPE`] and satisfies optional
    /// entries, the same way an explicit null does.
    pub fn check_opt(&self, descriptor: &Value, value: Option<&Value>) -> CheckResult<()> {
        debug!(%descriptor, ?value, "checking value against descriptor");
        let parsed = Descriptor::parse(descriptor)?;
        self.check_parsed(&parsed, value)
    }

    /// Validates against an already-parsed descriptor, skipping the
    /// dynamic parse step.
    pub fn check_parsed(&self, descriptor: &Descriptor, value: Option<&Value>) -> CheckResult<()> {
        for spec in descriptor.entries() {
            if self.matches(spec, value) {
                return Ok(());
            }
            trace!(entry = %spec.spelling(), ?value, "entry did not match");
        }
        Err(CheckError::no_match(descriptor.expected_text()))
    }

    /// Validates against exactly one entry, reporting that entry's own
    /// spelling on mismatch instead of the alternation text.
    pub fn check_one(&self, entry: &str, value: Option<&Value>) -> CheckResult<()> {
        let spec = TypeSpec::parse(entry);
        if self.matches(&spec, value) {
            Ok(())
        } else {
            Err(CheckError::mismatch(spec.spelling(), self.classify_opt(value)))
        }
    }

    /// Single-entry match predicate. Never raises.
    fn matches(&self, spec: &TypeSpec, value: Option<&Value>) -> bool {
        if spec.name == self.classify_opt(value) {
            return true;
        }
        spec.optional && is_absent(value)
    }

    fn classify_opt(&self, value: Option<&Value>) -> TypeName {
        match value {
            Some(value) => (self.classifier)(value),
            None => UNDEFINED_TYPE,
        }
    }
}

/// Whether a value is one of the absence sentinels.
fn is_absent(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}
