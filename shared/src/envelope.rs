//! Upstream response envelope
//!
//! Every response from the upstream employee service is wrapped as
//! `{ "data": T, "status": "..." }`. Both fields are required.

use serde::{Deserialize, Serialize};

/// `{ data, status }` wrapper returned by every upstream call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamResponse<T> {
    pub data: T,
    pub status: String,
}

impl<T> UpstreamResponse<T> {
    pub fn new(data: T, status: impl Into<String>) -> Self {
        Self {
            data,
            status: status.into(),
        }
    }

    /// Unwrap the payload, dropping the status text
    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bool_envelope() {
        let json = r#"{"data":true,"status":"Successfully processed request."}"#;
        let envelope: UpstreamResponse<bool> = serde_json::from_str(json).unwrap();
        assert!(envelope.data);
        assert_eq!(envelope.status, "Successfully processed request.");
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let json = r#"{"data":[]}"#;
        let result: Result<UpstreamResponse<Vec<String>>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_data_is_rejected() {
        let json = r#"{"status":"ok"}"#;
        let result: Result<UpstreamResponse<bool>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
