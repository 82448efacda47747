// wire types and error taxonomy for the backend gateway
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

// transport, parse and format failures stay distinct here even though both
// frontends render them the same way
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Invalid JSON response from server")]
    InvalidJson,
    #[error("Unexpected response format")]
    UnexpectedFormat,
}

impl GatewayError {
    // uniform failure body shared by the CLI and the dashboard API
    pub fn into_body(self) -> Value {
        json!({ "error": self.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Pending,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub instrument_id: String,
    pub status: ApprovalStatus,
}

impl ApprovalRequest {
    pub fn pending(instrument_id: &str) -> Self {
        Self {
            instrument_id: instrument_id.to_string(),
            status: ApprovalStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub instrument_id: String,
    pub counterparty: String,
    pub amount: f64,
    // the backend rejects unconfirmed trades and no confirmation round-trip
    // exists on the wire, so the constructor pins this to true
    confirmed: bool,
}

impl TradeRequest {
    pub fn new(instrument_id: &str, counterparty: &str, amount: f64) -> Self {
        Self {
            instrument_id: instrument_id.to_string(),
            counterparty: counterparty.to_string(),
            amount,
            confirmed: true,
        }
    }
}

// a trade that comes back as JSON is a fill report; a plain-text body is an
// acknowledgment without details and is surfaced as a warning downstream
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TradeOutcome {
    Report(Value),
    Message { message: String },
}

impl TradeOutcome {
    pub fn into_body(self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
