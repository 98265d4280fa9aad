//! Opaque caller-supplied locations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stop supplied by the caller.
///
/// The solver never interprets the fields; they are echoed back in visiting
/// order. Key order survives a round trip.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use ruteo_core::Location;
///
/// let location: Location = serde_json::from_value(json!({"id": 7, "label": "depot"}))?;
/// assert_eq!(location.get("label"), Some(&json!("depot")));
/// assert_eq!(serde_json::to_string(&location)?, r#"{"id":7,"label":"depot"}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(Map<String, Value>);

impl Location {
    /// Wrap an existing JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a single field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow every field.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the location, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Location {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Accepts JSON objects only; anything else is handed back unchanged.
impl TryFrom<Value> for Location {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}

impl From<Location> for Value {
    fn from(location: Location) -> Self {
        Self::Object(location.into_fields())
    }
}
