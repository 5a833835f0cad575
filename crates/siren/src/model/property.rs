//! Property values carried by entities.

use serde_json::Value;

/// A single entity property.
///
/// Siren properties are scalar: strings, booleans, and numbers. Numbers keep
/// their wire distinction between integral and fractional values.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl PropertyValue {
    /// Returns the string value, if this is a text property.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean property.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integral number property.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float value, if this is a fractional number property.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Converts a JSON value into a property value.
    ///
    /// Returns `None` for nulls, arrays, and objects, which are not valid
    /// Siren property values.
    pub fn from_json(value: &Value) -> Option<PropertyValue> {
        match value {
            Value::String(text) => Some(PropertyValue::Text(text.clone())),
            Value::Bool(flag) => Some(PropertyValue::Bool(*flag)),
            Value::Number(number) => match number.as_i64() {
                Some(int) => Some(PropertyValue::Int(int)),
                None => number.as_f64().map(PropertyValue::Float),
            },
            _ => None,
        }
    }

    /// Converts this property value into its JSON representation.
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Text(value) => Value::String(value.clone()),
            PropertyValue::Bool(value) => Value::Bool(*value),
            PropertyValue::Int(value) => Value::from(*value),
            PropertyValue::Float(value) => Value::from(*value),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value as i64)
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Int(value as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}
