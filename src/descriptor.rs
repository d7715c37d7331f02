//! Type descriptors.
//!
//! A descriptor names the acceptable type(s) for a value: a single type
//! name (`"string"`), or an ordered sequence of names tried as an
//! alternation (`["string", "number"]`). A name whose last character is
//! `?` is optional: the value may also be absent or null.
//!
//! The `?` marker is parsed once at construction into a structured
//! [`TypeSpec`]; matching never re-inspects the raw string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CheckError, CheckResult};

/// Marker character flagging a descriptor entry as optional.
pub const OPTIONAL_MARKER: char = '?';

/// A single parsed descriptor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpec {
    /// Bare type name, optional marker stripped.
    pub name: String,
    /// Whether the entry also accepts absent values.
    pub optional: bool,
}

impl TypeSpec {
    /// Parses one entry, stripping exactly one trailing marker.
    pub fn parse(entry: &str) -> Self {
        match entry.strip_suffix(OPTIONAL_MARKER) {
            Some(bare) => Self {
                name: bare.to_string(),
                optional: true,
            },
            None => Self {
                name: entry.to_string(),
                optional: false,
            },
        }
    }

    /// Original spelling of the entry, marker re-appended if optional.
    pub fn spelling(&self) -> String {
        if self.optional {
            format!("{}{}", self.name, OPTIONAL_MARKER)
        } else {
            self.name.clone()
        }
    }
}

/// An ordered sequence of acceptable type entries.
///
/// Serializable so descriptors can live in JSON configuration alongside
/// the data they validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    entries: Vec<TypeSpec>,
}

impl Descriptor {
    /// Descriptor accepting a single type.
    pub fn single(entry: &str) -> Self {
        Self {
            entries: vec![TypeSpec::parse(entry)],
        }
    }

    /// Descriptor accepting any of the given types, tried in order.
    pub fn any_of<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| TypeSpec::parse(entry.as_ref()))
                .collect(),
        }
    }

    /// Parses a dynamic descriptor: a JSON string, or a JSON array of
    /// strings. A single string is treated as a one-element sequence.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidDescriptor` for any other shape,
    /// including an array containing a non-string element.
    pub fn parse(raw: &Value) -> CheckResult<Self> {
        match raw {
            Value::String(entry) => Ok(Self::single(entry)),
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for item in items {
                    let entry = item.as_str().ok_or(CheckError::InvalidDescriptor)?;
                    entries.push(TypeSpec::parse(entry));
                }
                Ok(Self { entries })
            }
            _ => Err(CheckError::InvalidDescriptor),
        }
    }

    /// Entries in match order.
    pub fn entries(&self) -> &[TypeSpec] {
        &self.entries
    }

    /// Expected-text used when no entry matched: original spellings joined
    /// with ", " behind "any of: ". Singleton sequences are not
    /// special-cased.
    pub fn expected_text(&self) -> String {
        let spellings: Vec<String> = self.entries.iter().map(TypeSpec::spelling).collect();
        format!("any of: {}", spellings.join(", "))
    }
}
