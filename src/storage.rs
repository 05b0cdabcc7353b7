//! Adapters over the object store and the key-value table.
//!
//! Handlers only see the two traits; the AWS-backed implementations are
//! constructed once per container and passed in by the binaries.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::RequestId;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};

use crate::error::EtlError;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, EtlError>;
}

/// Acknowledgment of a completed table write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAck {
    pub table_name: String,
    pub id: String,
    pub http_status_code: u16,
    pub request_id: Option<String>,
}

// The SDK only yields an output for a 2xx reply, and PutItem answers 200
const PUT_ITEM_SUCCESS_STATUS: u16 = 200;

#[async_trait]
pub trait RecordTable: Send + Sync {
    /// Upserts `{id, data}`, replacing any record already stored under `id`.
    async fn put_record(&self, id: &str, data: &str) -> Result<WriteAck, EtlError>;
}

pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, EtlError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                EtlError::StorageAccess(format!(
                    "failed to get s3://{bucket}/{key}: {}",
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                ))
            })?;
        let bytes = output.body.collect().await.map_err(|e| {
            EtlError::StorageAccess(format!("failed to read body of s3://{bucket}/{key}: {e}"))
        })?;
        Ok(bytes.into_bytes().to_vec())
    }
}

pub struct DynamoTable {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoTable {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl RecordTable for DynamoTable {
    async fn put_record(&self, id: &str, data: &str) -> Result<WriteAck, EtlError> {
        let output = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(id.to_string()))
            .item("data", AttributeValue::S(data.to_string()))
            .send()
            .await
            .map_err(|e| {
                EtlError::StorageAccess(format!(
                    "failed to put record {id} into {}: {}",
                    self.table_name,
                    aws_sdk_dynamodb::error::DisplayErrorContext(&e)
                ))
            })?;
        Ok(WriteAck {
            table_name: self.table_name.clone(),
            id: id.to_string(),
            http_status_code: PUT_ITEM_SUCCESS_STATUS,
            request_id: output.request_id().map(str::to_string),
        })
    }
}
