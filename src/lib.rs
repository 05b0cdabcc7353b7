//! Extract, transform and load Lambda functions over S3 and DynamoDB.
//!
//! Each stage is its own binary under `src/bin/`; the default binary chains
//! all three for a single storage notification.

pub mod config;
pub mod envelope;
pub mod error;
pub mod event;
pub mod handler;
pub mod pipeline;
pub mod storage;

pub use config::EtlConfig;
pub use envelope::Envelope;
pub use error::EtlError;
