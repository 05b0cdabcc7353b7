use thiserror::Error;

// Every failure a handler can raise; none are recovered locally
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("malformed event: {0}")]
    MalformedEvent(String),
    #[error("storage access failed: {0}")]
    StorageAccess(String),
    #[error("object content is not valid UTF-8: {0}")]
    Decoding(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to encode response body: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl EtlError {
    pub fn malformed(message: impl Into<String>) -> Self {
        EtlError::MalformedEvent(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure_kind() {
        assert_eq!(
            EtlError::malformed("missing Records").to_string(),
            "malformed event: missing Records"
        );
        assert_eq!(
            EtlError::StorageAccess("NoSuchKey".into()).to_string(),
            "storage access failed: NoSuchKey"
        );
    }

    #[test]
    fn converts_into_lambda_error() {
        let error: lambda_runtime::Error = EtlError::Decoding("invalid byte at 3".into()).into();
        assert!(error.to_string().contains("not valid UTF-8"));
    }
}
