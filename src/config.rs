use std::env;

use crate::error::EtlError;

pub const DEFAULT_TABLE_NAME: &str = "ETLProcessedData";
pub const DEFAULT_RECORD_ID: &str = "1";

pub const TABLE_NAME_VAR: &str = "ETL_TABLE_NAME";
pub const RECORD_ID_VAR: &str = "ETL_RECORD_ID";

/// Settings read once per container at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtlConfig {
    pub table_name: String,
    /// Key of the single record the loader overwrites on every invocation.
    pub record_id: String,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            record_id: DEFAULT_RECORD_ID.to_string(),
        }
    }
}

impl EtlConfig {
    pub fn from_env() -> Result<Self, EtlError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    // Unset variables fall back to the defaults, empty ones are rejected
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EtlError> {
        let defaults = Self::default();
        Ok(Self {
            table_name: read_setting(&lookup, TABLE_NAME_VAR, defaults.table_name)?,
            record_id: read_setting(&lookup, RECORD_ID_VAR, defaults.record_id)?,
        })
    }
}

fn read_setting(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    fallback: String,
) -> Result<String, EtlError> {
    match lookup(name) {
        None => Ok(fallback),
        Some(value) if value.trim().is_empty() => {
            Err(EtlError::Config(format!("{name} must not be empty")))
        }
        Some(value) => Ok(value),
    }
}
