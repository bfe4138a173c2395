//! Core value types for front matter handling
//!
//! This module provides a thin abstraction over YAML values with the accessors
//! the record needs and the "natural" string form used when a front matter
//! field has to stand in for a text body.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fmt;

/// A wrapper around YAML values for front matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatterValue {
    inner: Value,
}

impl FrontMatterValue {
    /// Create a new value from a YAML value
    pub fn new(value: Value) -> Self {
        Self { inner: value }
    }

    /// Create a null value
    pub fn null() -> Self {
        Self::new(Value::Null)
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Self::new(Value::String(s.into()))
    }

    /// Create an integer value
    pub fn int(i: i64) -> Self {
        Self::new(Value::Number(i.into()))
    }

    /// Create a float value
    pub fn float(f: f64) -> Self {
        Self::new(Value::Number(serde_yaml::Number::from(f)))
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        Self::new(Value::Bool(b))
    }

    /// Get a reference to the inner YAML value
    pub fn as_inner(&self) -> &Value {
        &self.inner
    }

    pub fn is_null(&self) -> bool {
        self.inner.is_null()
    }

    pub fn is_string(&self) -> bool {
        self.inner.is_string()
    }

    pub fn as_string(&self) -> Option<&str> {
        self.inner.as_str()
    }

    pub fn as_int(&self) -> Option<i64> {
        self.inner.as_i64()
    }

    pub fn as_float(&self) -> Option<f64> {
        self.inner.as_f64()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.inner.as_bool()
    }

    /// Whether the value counts as set: not null, `false`, zero, NaN or `""`
    pub fn is_truthy(&self) -> bool {
        truthy(&self.inner)
    }

    /// Render the value as plain text.
    ///
    /// Strings come back unchanged, numbers and booleans in their literal
    /// form, sequences as their elements joined by `,` and mappings as
    /// YAML text. Integral floats drop the fraction (`1.0` becomes `"1"`).
    pub fn to_natural_string(&self) -> String {
        natural_string(&self.inner)
    }
}

fn natural_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                float_string(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::Sequence(seq) => seq
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => natural_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        Value::Tagged(tagged) => natural_string(&tagged.value),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => truthy(&tagged.value),
    }
}

/// Plain decimal between 1e-6 and 1e21, exponent form (`1e+21`, `1e-7`) outside
fn float_string(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) {
        let exponent_form = format!("{:e}", f);
        match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponent_form,
        }
    } else {
        f.to_string()
    }
}

impl fmt::Display for FrontMatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_natural_string())
    }
}
