//! Step schemas
//!
//! One pure validation function per wizard step turns a draft into typed
//! details or a set of field errors. Error keys are the camelCase field names
//! used in drafts; each offending field gets exactly one message.

pub mod address;
pub mod company;
pub mod services;

pub use address::validate as validate_address;
pub use company::validate as validate_company;
pub use services::validate as validate_services;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field name to human-readable message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field wins
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Offending field names in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Trimmed, non-empty text
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Required text field; records `message` and yields an empty string when blank
fn required(errors: &mut FieldErrors, field: &str, value: &Option<String>, message: &str) -> String {
    match present(value) {
        Some(text) => text.to_string(),
        None => {
            errors.add(field, message);
            String::new()
        }
    }
}

/// Optional text field; blank becomes `None`
fn optional(value: &Option<String>) -> Option<String> {
    present(value).map(str::to_string)
}

/// Coerce form text to a finite number
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
