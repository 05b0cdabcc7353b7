use serde_json::Value;
use tracing::{info, warn};

use crate::envelope::{Envelope, EXTRACTED_MESSAGE, LOADED_MESSAGE, TRANSFORMED_MESSAGE};
use crate::error::EtlError;
use crate::event::{ObjectLocation, PayloadEvent, StorageEvent};
use crate::storage::{ObjectStore, RecordTable, WriteAck};

// Fetch the object and decode it as UTF-8 text
pub async fn extract_text(
    store: &dyn ObjectStore,
    location: &ObjectLocation,
) -> Result<String, EtlError> {
    let bytes = store.get_object(&location.bucket, &location.key).await?;
    String::from_utf8(bytes).map_err(|e| {
        EtlError::Decoding(format!(
            "s3://{}/{}: {e}",
            location.bucket, location.key
        ))
    })
}

// Placeholder transformation: text in, text out, no side effects
pub fn transform_text(text: &str) -> String {
    text.to_uppercase()
}

pub async fn load_text(
    table: &dyn RecordTable,
    record_id: &str,
    text: &str,
) -> Result<WriteAck, EtlError> {
    table.put_record(record_id, text).await
}

/// Extractor: storage notification in, object text out.
#[tracing::instrument(skip_all)]
pub async fn extract(store: &dyn ObjectStore, event: Value) -> Result<Envelope, EtlError> {
    let location = StorageEvent::from_value(event)
        .and_then(|event| event.first_location())
        .inspect_err(|e| warn!(error = %e, "rejected storage event"))?;
    let content = extract_text(store, &location).await?;
    info!(
        bucket = %location.bucket,
        key = %location.key,
        bytes = content.len(),
        "extracted object"
    );
    Envelope::ok(EXTRACTED_MESSAGE, "content", &content)
}

/// Transformer: `{"body": text}` in, uppercased text out.
#[tracing::instrument(skip_all)]
pub fn transform(event: Value) -> Result<Envelope, EtlError> {
    let payload = PayloadEvent::from_value(event)
        .inspect_err(|e| warn!(error = %e, "rejected transform event"))?;
    let data = transform_text(&payload.body);
    info!(chars = data.chars().count(), "transformed payload");
    Envelope::ok(TRANSFORMED_MESSAGE, "data", &data)
}

/// Loader: `{"body": text}` in, write acknowledgment out.
#[tracing::instrument(skip(table, event))]
pub async fn load(
    table: &dyn RecordTable,
    record_id: &str,
    event: Value,
) -> Result<Envelope, EtlError> {
    let payload = PayloadEvent::from_value(event)
        .inspect_err(|e| warn!(error = %e, "rejected load event"))?;
    let ack = load_text(table, record_id, &payload.body).await?;
    info!(table = %ack.table_name, id = %ack.id, "loaded record");
    Envelope::ok(LOADED_MESSAGE, "response", &ack)
}
