use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A projected JSON value.
///
/// Literals always become [`JsonValue::Scalar`]s. There is no coercion into numbers or booleans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JsonValue {
    Scalar(String),
    Object(JsonObject),
    Array(Vec<JsonValue>),
}

impl JsonValue {
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(object) => Some(object),
            JsonValue::Scalar(_) | JsonValue::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(elements) => Some(elements.as_slice()),
            JsonValue::Scalar(_) | JsonValue::Object(_) => None,
        }
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        Self::Object(value)
    }
}

/// A JSON object whose fields keep their insertion order when serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsonObject {
    fields: Vec<(String, JsonValue)>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing an existing field with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: JsonValue) {
        let key = key.into();
        match self.fields.iter().position(|(existing, _)| *existing == key) {
            Some(idx) => self.fields[idx].1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Scalar(value) => serializer.serialize_str(value),
            JsonValue::Object(object) => object.serialize(serializer),
            JsonValue::Array(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Scalar(value) => serde_json::Value::String(value),
            JsonValue::Object(object) => object.into(),
            JsonValue::Array(elements) => {
                serde_json::Value::Array(elements.into_iter().map(Into::into).collect())
            }
        }
    }
}

impl From<JsonObject> for serde_json::Value {
    fn from(value: JsonObject) -> Self {
        serde_json::Value::Object(
            value
                .fields
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}
