use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EtlError;

pub const EXTRACTED_MESSAGE: &str = "File extracted successfully";
pub const TRANSFORMED_MESSAGE: &str = "Data transformed successfully";
pub const LOADED_MESSAGE: &str = "Data loaded successfully";

/// Uniform `{statusCode, body}` response returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded `{message, <field>}` object.
    pub body: String,
}

// Keeps `message` ahead of the payload field in the encoded body
struct Body<'a, T> {
    message: &'a str,
    field: &'a str,
    value: &'a T,
}

impl<T: Serialize> Serialize for Body<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("message", self.message)?;
        map.serialize_entry(self.field, self.value)?;
        map.end()
    }
}

impl Envelope {
    pub fn ok<T: Serialize>(message: &str, field: &str, value: &T) -> Result<Self, EtlError> {
        let body = serde_json::to_string(&Body {
            message,
            field,
            value,
        })?;
        Ok(Self {
            status_code: 200,
            body,
        })
    }

    pub fn decode_body(&self) -> Result<Value, EtlError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
