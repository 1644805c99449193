//! Parameter bags and the indexed form encoding of the SES query API.
//!
//! The query API accepts a flat list of `key=value` pairs. Lists are spelled
//! out with 1-based positional suffixes, so a list value stored under
//! `Destination.ToAddresses.member` becomes
//! `Destination.ToAddresses.member.1`, `Destination.ToAddresses.member.2`, ...
//!
//! # Example
//!
//! ```
//! use integrations_aws_ses_query::params::{encode, Parameters};
//!
//! let mut params = Parameters::new();
//! params.insert("EmailAddress", "user@example.com");
//! params.insert("Identities.member", vec!["a.com".to_string(), "b.com".to_string()]);
//!
//! let body = encode("GetIdentityVerificationAttributes", &params);
//! assert!(body.starts_with("Action=GetIdentityVerificationAttributes&"));
//! assert!(body.contains("Identities.member.2=b.com"));
//! ```

use std::collections::BTreeMap;

use serde_json::Value;
use url::form_urlencoded;

use crate::error::{SesError, SesResult};

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Sent as-is under its key.
    Scalar(String),
    /// Sent as its decimal string form.
    Integer(i64),
    /// Expanded into `<key>.1`, `<key>.2`, ... in order.
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<&[String]> for ParamValue {
    fn from(values: &[String]) -> Self {
        ParamValue::List(values.to_vec())
    }
}

/// An unordered bag of request parameters, built fresh for every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: BTreeMap<String, ParamValue>,
}

impl Parameters {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set `key` only when a value is present.
    ///
    /// `Some("")` is an explicit empty value and is kept.
    pub fn insert_opt<V>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self
    where
        V: Into<ParamValue>,
    {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Set a list value under `key`, omitting it entirely when empty.
    pub fn insert_list(&mut self, key: impl Into<String>, values: &[String]) -> &mut Self {
        if !values.is_empty() {
            self.insert(key, values);
        }
        self
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of (unexpanded) entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build a bag from a dynamically typed JSON object.
    ///
    /// Strings, integers and arrays of strings are accepted.
    ///
    /// # Errors
    ///
    /// [`SesError::UnsupportedParameterType`] naming the first key whose value
    /// has no form representation (booleans, floats, null, objects, arrays
    /// with non-string elements).
    pub fn from_json(value: &Value) -> SesResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SesError::UnsupportedParameterType {
                key: String::new(),
                found: format!("{} at top level", json_kind(value)),
            })?;

        let mut params = Parameters::new();
        for (key, value) in object {
            let param = match value {
                Value::String(s) => ParamValue::Scalar(s.clone()),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => ParamValue::Integer(i),
                    None => return Err(unsupported(key, value)),
                },
                Value::Array(items) => {
                    let mut list = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::String(s) => list.push(s.clone()),
                            other => {
                                return Err(SesError::UnsupportedParameterType {
                                    key: key.clone(),
                                    found: format!("array containing {}", json_kind(other)),
                                })
                            }
                        }
                    }
                    ParamValue::List(list)
                }
                _ => return Err(unsupported(key, value)),
            };
            params.values.insert(key.clone(), param);
        }

        Ok(params)
    }
}

fn unsupported(key: &str, value: &Value) -> SesError {
    SesError::UnsupportedParameterType {
        key: key.to_string(),
        found: json_kind(value).to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "floating point number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Flatten `parameters` and serialize them as an
/// `application/x-www-form-urlencoded` body.
///
/// `Action` is always the first pair; the remaining keys follow in sorted
/// order so identical bags produce identical bodies.
pub fn encode(action: &str, parameters: &Parameters) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("Action", action);

    for (key, value) in parameters.iter() {
        match value {
            ParamValue::Scalar(s) => {
                serializer.append_pair(key, s);
            }
            ParamValue::Integer(i) => {
                serializer.append_pair(key, &i.to_string());
            }
            ParamValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    serializer.append_pair(&format!("{}.{}", key, index + 1), item);
                }
            }
        }
    }

    serializer.finish()
}
