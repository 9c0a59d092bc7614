use serde_json::Value;

use crate::{Error, Result};

/// A single named integer constant of a [`MetadataEnum`](crate::MetadataEnum).
///
/// # Examples
///
/// ```
/// use metadata_enum::MetadataEnumValue;
/// use serde_json::json;
///
/// let value = MetadataEnumValue::from_json(&json!({
///     "name": "RED",
///     "value": 0,
///     "description": "Painted red"
/// }))
/// .unwrap();
/// assert_eq!(value.name(), "RED");
/// assert_eq!(value.value(), 0);
/// assert_eq!(value.description(), Some("Painted red"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataEnumValue {
    name: String,
    value: i128,
    description: Option<String>,
    extras: Option<Value>,
    extensions: Option<Value>,
}

impl MetadataEnumValue {
    /// Creates a value with no description, extras or extensions.
    pub fn new(name: impl Into<String>, value: i128) -> Self {
        Self {
            name: name.into(),
            value,
            description: None,
            extras: None,
            extensions: None,
        }
    }

    /// Builds a value from its JSON object form.
    ///
    /// `name` must be a string and `value` an integer in the signed or
    /// unsigned 64-bit range.
    /// A non-string `description` is ignored; `extras` and `extensions` are
    /// kept as they are.
    pub fn from_json(json: &Value) -> Result<Self> {
        let object = json.as_object().ok_or_else(|| {
            Error::invalid_argument("value", "must be an object")
        })?;
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::invalid_argument("value.name", "must be a string")
            })?;
        let value = object
            .get("value")
            .and_then(|value| {
                value
                    .as_i64()
                    .map(i128::from)
                    .or_else(|| value.as_u64().map(i128::from))
            })
            .ok_or_else(|| {
                Error::invalid_argument("value.value", "must be an integer")
            })?;

        Ok(Self {
            name: name.to_string(),
            value,
            description: object
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            extras: object.get("extras").cloned(),
            extensions: object.get("extensions").cloned(),
        })
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn value(&self) -> i128 { self.value }

    pub fn description(&self) -> Option<&str> { self.description.as_deref() }

    /// Extras in the JSON object.
    pub fn extras(&self) -> Option<&Value> { self.extras.as_ref() }

    /// Extensions in the JSON object.
    pub fn extensions(&self) -> Option<&Value> { self.extensions.as_ref() }
}
