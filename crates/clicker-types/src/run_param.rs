use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{MalformedInputError, Mode};

/// Parameters of a run request: what to do, with which script and how fast.
///
/// Every field may be unset (`None`); missing keys are not an error and no
/// defaults are filled in here. Consumers decide what an unset field means.
///
/// Deserializing goes through [`RunParam::create_from`], so a JSON string
/// holding the encoded object is accepted wherever the object is.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct RunParam {
    /// Execution mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// Name of the script file to record into or replay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,
    /// Minimum interval between two clicks, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_interval: Option<i64>,
    /// Number of replay cycles, `0` meaning no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<i64>,
}

/// Where a [`RunParam`] is read from.
#[derive(Clone, Debug, PartialEq)]
pub enum RunSource {
    /// JSON text, decoded before the fields are read.
    RawText(String),
    /// An already decoded JSON object.
    Structured(Map<String, Value>),
}

impl Default for RunSource {
    fn default() -> Self {
        RunSource::Structured(Map::new())
    }
}

impl From<&str> for RunSource {
    fn from(text: &str) -> Self {
        RunSource::RawText(text.to_owned())
    }
}

impl From<String> for RunSource {
    fn from(text: String) -> Self {
        RunSource::RawText(text)
    }
}

impl From<Map<String, Value>> for RunSource {
    fn from(map: Map<String, Value>) -> Self {
        RunSource::Structured(map)
    }
}

impl TryFrom<Value> for RunSource {
    type Error = MalformedInputError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(RunSource::RawText(text)),
            Value::Object(map) => Ok(RunSource::Structured(map)),
            other => Err(MalformedInputError::UnsupportedSource(json_kind(&other))),
        }
    }
}

impl RunParam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a run request from JSON text or from a decoded JSON object.
    ///
    /// Only `mode`, `configName`, `minInterval` and `cycle` are read, other
    /// keys are ignored. A missing key or `null` leaves the field unset.
    /// Values are taken as they are: a key holding the wrong JSON type is
    /// reported as [`MalformedInputError::Field`], text that does not parse
    /// as [`MalformedInputError::Json`].
    pub fn create_from<S: Into<RunSource>>(source: S) -> Result<Self, MalformedInputError> {
        let source: RunSource = source.into();
        Self::try_from(source)
    }
}

impl TryFrom<RunSource> for RunParam {
    type Error = MalformedInputError;

    fn try_from(source: RunSource) -> Result<Self, Self::Error> {
        let map = match source {
            RunSource::RawText(text) => match serde_json::from_str::<Value>(&text)? {
                Value::Object(map) => map,
                other => return Err(MalformedInputError::UnsupportedSource(json_kind(&other))),
            },
            RunSource::Structured(map) => map,
        };

        Ok(RunParam {
            mode: field(&map, "mode")?,
            config_name: field(&map, "configName")?,
            min_interval: field(&map, "minInterval")?,
            cycle: field(&map, "cycle")?,
        })
    }
}

impl TryFrom<Value> for RunParam {
    type Error = MalformedInputError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::create_from(RunSource::try_from(value)?)
    }
}

impl FromStr for RunParam {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create_from(s)
    }
}

fn field<T: DeserializeOwned>(
    map: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<T>, MalformedInputError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|error| MalformedInputError::Field { field: key, error }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
