//! Invocation events delivered by the platform.

use aws_lambda_events::event::s3::S3Event;
use serde::Deserialize;
use serde_json::Value;

use crate::error::EtlError;

/// Object-created notification from the object store.
#[derive(Debug, Clone)]
pub struct StorageEvent(pub S3Event);

/// Bucket and decoded key of a stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl StorageEvent {
    pub fn from_value(value: Value) -> Result<Self, EtlError> {
        serde_json::from_value(value)
            .map(StorageEvent)
            .map_err(|e| EtlError::malformed(format!("invalid storage event: {e}")))
    }

    // Only the first record is processed, matching one object per notification
    pub fn first_location(&self) -> Result<ObjectLocation, EtlError> {
        let record = self
            .0
            .records
            .first()
            .ok_or_else(|| EtlError::malformed("storage event has no Records"))?;
        let bucket = record
            .s3
            .bucket
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| EtlError::malformed("bucket name is missing or empty"))?;
        let raw_key = record
            .s3
            .object
            .key
            .as_deref()
            .ok_or_else(|| EtlError::malformed("object key is missing"))?;
        let key = decode_object_key(raw_key)?;
        if key.is_empty() {
            return Err(EtlError::malformed("object key is empty"));
        }
        Ok(ObjectLocation { bucket, key })
    }
}

// Notification keys are form-encoded: '+' stands for a space
pub fn decode_object_key(raw: &str) -> Result<String, EtlError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|key| key.into_owned())
        .map_err(|e| EtlError::malformed(format!("object key {raw:?} is not decodable: {e}")))
}

/// `{"body": string}` payload consumed by the transformer and the loader.
#[derive(Debug, Clone, Deserialize)]
pub struct PayloadEvent {
    pub body: String,
}

impl PayloadEvent {
    pub fn from_value(value: Value) -> Result<Self, EtlError> {
        serde_json::from_value(value)
            .map_err(|e| EtlError::malformed(format!("invalid payload event: {e}")))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    /// `ObjectCreated:Put` notification as the platform delivers it.
    pub fn object_created(bucket: Option<&str>, key: Option<&str>) -> Value {
        json!({
            "Records": [{
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventTime": "2024-05-01T12:00:00.000Z",
                "eventName": "ObjectCreated:Put",
                "userIdentity": { "principalId": "EXAMPLE" },
                "requestParameters": { "sourceIPAddress": "127.0.0.1" },
                "responseElements": {
                    "x-amz-request-id": "EXAMPLE123456789",
                    "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
                },
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "configurationId": "etl-extract",
                    "bucket": {
                        "name": bucket,
                        "ownerIdentity": { "principalId": "EXAMPLE" },
                        "arn": "arn:aws:s3:::raw-data"
                    },
                    "object": {
                        "key": key,
                        "size": 5,
                        "eTag": "5d41402abc4b2a76b9719d911017c592",
                        "sequencer": "0A1B2C3D4E5F678901"
                    }
                }
            }]
        })
    }

    pub fn storage_event(bucket: &str, key: &str) -> Value {
        object_created(Some(bucket), Some(key))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{object_created, storage_event};
    use super::*;
    use serde_json::json;

    fn location_of(value: Value) -> Result<ObjectLocation, EtlError> {
        StorageEvent::from_value(value).and_then(|event| event.first_location())
    }

    #[test]
    fn reads_first_record_location() {
        assert_eq!(
            location_of(storage_event("raw-data", "input.txt")).unwrap(),
            ObjectLocation {
                bucket: "raw-data".into(),
                key: "input.txt".into()
            }
        );
    }

    #[test]
    fn decodes_notification_keys() {
        let location =
            location_of(storage_event("raw-data", "daily+reports/%C3%A9t%C3%A9.txt")).unwrap();
        assert_eq!(location.key, "daily reports/été.txt");
    }

    #[test]
    fn missing_records_is_malformed() {
        assert!(matches!(
            location_of(json!({ "body": "hello" })),
            Err(EtlError::MalformedEvent(_))
        ));
    }

    #[test]
    fn empty_records_is_malformed() {
        assert!(matches!(
            location_of(json!({ "Records": [] })),
            Err(EtlError::MalformedEvent(_))
        ));
    }

    #[test]
    fn missing_or_empty_bucket_and_key_are_malformed() {
        let events = [
            object_created(None, Some("input.txt")),
            object_created(Some(""), Some("input.txt")),
            object_created(Some("raw-data"), None),
            object_created(Some("raw-data"), Some("")),
        ];
        for event in events {
            assert!(matches!(
                location_of(event),
                Err(EtlError::MalformedEvent(_))
            ));
        }
    }

    #[test]
    fn payload_body_must_be_a_string() {
        assert_eq!(
            PayloadEvent::from_value(json!({ "body": "hello" })).unwrap().body,
            "hello"
        );
        for bad in [json!({}), json!({ "body": 42 }), json!({ "body": null })] {
            assert!(matches!(
                PayloadEvent::from_value(bad),
                Err(EtlError::MalformedEvent(_))
            ));
        }
    }
}
