//! API Errors
//!
//! Failures raised inside the client. They never cross the client boundary:
//! the public fetch operations log them and hand back `None`.

use serde_json::error::Category as JsonCategory;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The two failure kinds a caller can observe in the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport error, non-2xx status or malformed JSON
    NetworkOrParse,
    /// Well-formed JSON that lacks an expected field
    NoData,
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Decode { source, .. } if source.classify() == JsonCategory::Data => {
                FailureKind::NoData
            }
            _ => FailureKind::NetworkOrParse,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ApiError::Request { url, .. } | ApiError::Status { url, .. } | ApiError::Decode { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogPage;

    fn decode_error(body: &str) -> ApiError {
        let source = serde_json::from_str::<CatalogPage>(body).unwrap_err();
        ApiError::Decode { url: "http://test/pokemon".into(), source }
    }

    #[test]
    fn test_missing_field_is_no_data() {
        assert_eq!(decode_error(r#"{"count": 3}"#).kind(), FailureKind::NoData);
    }

    #[test]
    fn test_malformed_json_is_network_or_parse() {
        assert_eq!(decode_error(r#"{"results": [tru"#).kind(), FailureKind::NetworkOrParse);
        assert_eq!(decode_error("<html>").kind(), FailureKind::NetworkOrParse);
    }

    #[test]
    fn test_status_error() {
        let err = ApiError::Status { url: "http://test/type/fire".into(), status: 404 };
        assert_eq!(err.kind(), FailureKind::NetworkOrParse);
        assert_eq!(err.url(), "http://test/type/fire");
        assert_eq!(err.to_string(), "http://test/type/fire answered with status 404");
    }
}
