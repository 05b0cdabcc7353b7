//! Extract, transform and load chained in one invocation.

use serde_json::Value;
use tracing::{info, warn};

use crate::envelope::{Envelope, LOADED_MESSAGE};
use crate::error::EtlError;
use crate::event::StorageEvent;
use crate::handler::{extract_text, load_text, transform_text};
use crate::storage::{ObjectStore, RecordTable};

/// Runs all three stages for the object named by a storage notification.
/// Any stage failure aborts the run before later stages execute.
#[tracing::instrument(skip(store, table, event))]
pub async fn run_pipeline(
    store: &dyn ObjectStore,
    table: &dyn RecordTable,
    record_id: &str,
    event: Value,
) -> Result<Envelope, EtlError> {
    let location = StorageEvent::from_value(event)
        .and_then(|event| event.first_location())
        .inspect_err(|e| warn!(error = %e, "rejected storage event"))?;
    let text = extract_text(store, &location).await?;
    let transformed = transform_text(&text);
    let ack = load_text(table, record_id, &transformed).await?;
    info!(
        bucket = %location.bucket,
        key = %location.key,
        table = %ack.table_name,
        "pipeline completed"
    );
    Envelope::ok(LOADED_MESSAGE, "response", &ack)
}
