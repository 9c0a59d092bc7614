use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::{Error, MetadataEnumValue, MetadataType, Result};

/// The JSON shape of an enum definition inside a metadata schema.
///
/// Only `values` is required. Optional fields are kept loosely typed so that
/// unexpected shapes degrade to "absent" instead of failing construction.
#[derive(Debug, Deserialize)]
struct EnumDefinitionJson {
    values: Vec<Value>,
    #[serde(rename = "valueType")]
    value_type: Option<Value>,
    name: Option<Value>,
    description: Option<Value>,
    extras: Option<Value>,
    extensions: Option<Value>,
}

/// A metadata enum: a named set of integer constants used to classify
/// feature properties.
///
/// A `MetadataEnum` is built once from its JSON definition and never changes
/// afterwards. Besides the ordered list of values it keeps two lookup maps,
/// from integer value to name and from name to integer value. When two
/// entries share a value (or a name) the later entry wins in the
/// corresponding map; the ordered list still holds both.
///
/// # Examples
///
/// ```
/// use metadata_enum::{MetadataEnum, MetadataType};
/// use serde_json::json;
///
/// let colors = MetadataEnum::new(
///     "colors",
///     &json!({
///         "values": [
///             {"name": "RED", "value": 0},
///             {"name": "GREEN", "value": 1}
///         ]
///     }),
/// )
/// .unwrap();
///
/// assert_eq!(colors.values().len(), 2);
/// assert_eq!(colors.names_by_value()[&0], "RED");
/// assert_eq!(colors.values_by_name()["GREEN"], 1);
/// assert_eq!(colors.value_type(), MetadataType::Uint16);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataEnum {
    id: String,
    name: Option<String>,
    description: Option<String>,
    value_type: MetadataType,
    values: Vec<MetadataEnumValue>,
    names_by_value: HashMap<i128, String>,
    values_by_name: HashMap<String, i128>,
    extras: Option<Value>,
    extensions: Option<Value>,
}

impl MetadataEnum {
    /// Builds an enum from its ID and JSON definition.
    ///
    /// Fails with [`Error::InvalidArgument`] when `id` is empty, when
    /// `definition` is not an object, when it has no `values` array, or when
    /// any entry of `values` is not a valid [`MetadataEnumValue`].
    pub fn new(id: impl Into<String>, definition: &Value) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::invalid_argument(
                "options.id",
                "must be a non-empty string",
            ));
        }
        if !definition.is_object() {
            return Err(Error::invalid_argument(
                "options.enum",
                "must be an object",
            ));
        }
        let definition =
            EnumDefinitionJson::deserialize(definition).map_err(|e| {
                Error::invalid_argument("options.enum.values", e.to_string())
            })?;

        let mut names_by_value = HashMap::with_capacity(definition.values.len());
        let mut values_by_name = HashMap::with_capacity(definition.values.len());
        let mut values = Vec::with_capacity(definition.values.len());
        for (index, json) in definition.values.iter().enumerate() {
            let value = MetadataEnumValue::from_json(json).map_err(|e| {
                e.nested(&format!("options.enum.values[{}]", index))
            })?;
            if let Some(previous) =
                names_by_value.insert(value.value(), value.name().to_string())
            {
                trace!(
                    enum_id = %id,
                    value = %value.value(),
                    %previous,
                    name = value.name(),
                    "duplicate enum value overwrites earlier name"
                );
            }
            if let Some(previous) =
                values_by_name.insert(value.name().to_string(), value.value())
            {
                trace!(
                    enum_id = %id,
                    name = value.name(),
                    %previous,
                    value = %value.value(),
                    "duplicate enum name overwrites earlier value"
                );
            }
            values.push(value);
        }

        let value_type = definition
            .value_type
            .as_ref()
            .and_then(Value::as_str)
            .and_then(MetadataType::from_tag)
            .unwrap_or(MetadataType::DEFAULT_ENUM_VALUE_TYPE);

        debug!(
            enum_id = %id,
            count = values.len(),
            %value_type,
            "constructed metadata enum"
        );

        Ok(Self {
            id,
            name: into_string(definition.name),
            description: into_string(definition.description),
            value_type,
            values,
            names_by_value,
            values_by_name,
            extras: definition.extras,
            extensions: definition.extensions,
        })
    }

    /// Builds an enum from an options object of the form
    /// `{"id": ..., "enum": {...}}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use metadata_enum::MetadataEnum;
    /// use serde_json::json;
    ///
    /// let state = MetadataEnum::from_options(&json!({
    ///     "id": "state",
    ///     "enum": {
    ///         "valueType": "INT8",
    ///         "values": [{"name": "OFF", "value": 0}, {"name": "ON", "value": 1}]
    ///     }
    /// }))
    /// .unwrap();
    /// assert_eq!(state.id(), "state");
    /// assert_eq!(state.value_for_name("ON"), Some(1));
    ///
    /// assert!(MetadataEnum::from_options(&json!({"enum": {"values": []}})).is_err());
    /// ```
    pub fn from_options(options: &Value) -> Result<Self> {
        let id = options
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::invalid_argument("options.id", "must be a string")
            })?;
        let definition = options
            .get("enum")
            .ok_or_else(|| {
                Error::invalid_argument("options.enum", "must be an object")
            })?;
        Self::new(id, definition)
    }

    /// The ID of the enum.
    pub fn id(&self) -> &str { &self.id }

    /// The display name of the enum.
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }

    /// The description of the enum.
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }

    /// The integer type of every value, `UINT16` unless declared otherwise.
    pub fn value_type(&self) -> MetadataType { self.value_type }

    /// The enum values, in definition order.
    pub fn values(&self) -> &[MetadataEnumValue] { &self.values }

    /// Maps each integer value to its name.
    pub fn names_by_value(&self) -> &HashMap<i128, String> {
        &self.names_by_value
    }

    /// Maps each name to its integer value.
    pub fn values_by_name(&self) -> &HashMap<String, i128> {
        &self.values_by_name
    }

    /// Extras in the JSON object.
    pub fn extras(&self) -> Option<&Value> { self.extras.as_ref() }

    /// Extensions in the JSON object.
    pub fn extensions(&self) -> Option<&Value> { self.extensions.as_ref() }

    /// Returns the name assigned to `value`, if any.
    pub fn name_for_value(&self, value: i128) -> Option<&str> {
        self.names_by_value.get(&value).map(String::as_str)
    }

    /// Returns the integer value assigned to `name`, if any.
    pub fn value_for_name(&self, name: &str) -> Option<i128> {
        self.values_by_name.get(name).copied()
    }

    /// Returns the number of values in the definition, duplicates included.
    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

fn into_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
