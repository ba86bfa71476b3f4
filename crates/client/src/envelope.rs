// crates/client/src/envelope.rs
//! Report envelopes: the service wraps every operation payload in a
//! `{"status": ..., "reports": [payload, ...]}` response. The first report
//! carries the operation result.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

#[derive(Debug, Clone, Deserialize)]
pub struct ReportEnvelope {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub reports: Vec<Value>,
}

impl ReportEnvelope {
    /// Take the first report and decode it into the expected payload type.
    pub fn into_first_report<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        let report = self
            .reports
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyReport)?;
        serde_json::from_value(report).map_err(|e| ClientError::decode(e.to_string()))
    }

    /// Take the first report as raw JSON.
    pub fn into_first_value(self) -> Result<Value, ClientError> {
        self.reports
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyReport)
    }
}
