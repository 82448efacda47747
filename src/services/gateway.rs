use crate::types::{ApprovalRequest, Config, GatewayError, TradeOutcome, TradeRequest};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

#[derive(Clone)]
pub struct GatewayService {
    client: Client,
    config: Config,
}

impl GatewayService {
    // client initialization
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    // GET /instrument/{id}: opaque backend JSON, passed through unchanged.
    // 404 is not distinguished from 500 or network-down.
    pub async fn fetch_instrument(&self, instrument_id: &str) -> Result<Value, GatewayError> {
        let url = format!("{}/instrument/{}", self.config.base_url, instrument_id);
        log::debug!("GET {}", url);
        let text = self.get_text(&url).await?;
        serde_json::from_str(&text).map_err(|_| GatewayError::InvalidJson)
    }

    // GET /instruments: identifiers on success, an empty list on ANY failure.
    // Callers cannot tell "no instruments" from "the call failed"; the
    // failure is only visible in the warn log.
    pub async fn list_instruments(&self) -> Vec<String> {
        match self.try_list_instruments().await {
            Ok(ids) => ids,
            Err(err) => {
                log::warn!("instrument listing failed, returning empty list: {}", err);
                Vec::new()
            }
        }
    }

    async fn try_list_instruments(&self) -> Result<Vec<String>, GatewayError> {
        let url = format!("{}/instruments", self.config.base_url);
        log::debug!("GET {}", url);
        let text = self.get_text(&url).await?;
        let ids: Value = serde_json::from_str(&text).map_err(|_| GatewayError::InvalidJson)?;
        serde_json::from_value(ids).map_err(|_| GatewayError::UnexpectedFormat)
    }

    // POST /approval-request: the status on the wire is always PENDING
    pub async fn submit_approval_request(
        &self,
        instrument_id: &str,
    ) -> Result<Value, GatewayError> {
        let url = format!("{}/approval-request", self.config.base_url);
        log::debug!("POST {} for {}", url, instrument_id);
        let body = ApprovalRequest::pending(instrument_id);
        let text = self.post_text(&url, &body).await?;
        serde_json::from_str(&text).map_err(|_| GatewayError::InvalidJson)
    }

    // GET /limit/{counterparty}: accepted shapes are a bare number or an
    // object carrying a numeric availableLimit; anything else is a format
    // error, kept distinct from transport and parse failures
    pub async fn fetch_available_limit(&self, counterparty: &str) -> Result<f64, GatewayError> {
        let url = format!("{}/limit/{}", self.config.base_url, counterparty);
        log::debug!("GET {}", url);
        let text = self.get_text(&url).await?;
        let body: Value = serde_json::from_str(&text).map_err(|_| GatewayError::InvalidJson)?;

        match &body {
            Value::Number(n) => n.as_f64().ok_or(GatewayError::UnexpectedFormat),
            Value::Object(fields) => fields
                .get("availableLimit")
                .and_then(Value::as_f64)
                .ok_or(GatewayError::UnexpectedFormat),
            _ => Err(GatewayError::UnexpectedFormat),
        }
    }

    // POST /trade: JSON responses pass through as fill reports; a plain-text
    // acknowledgment becomes {"message": <text>} instead of an error
    pub async fn execute_trade(
        &self,
        instrument_id: &str,
        counterparty: &str,
        amount: f64,
    ) -> Result<TradeOutcome, GatewayError> {
        let url = format!("{}/trade", self.config.base_url);
        log::debug!("POST {} for {} / {}", url, instrument_id, counterparty);
        let body = TradeRequest::new(instrument_id, counterparty, amount);
        let text = self.post_text(&url, &body).await?;

        match serde_json::from_str(&text) {
            Ok(report) => Ok(TradeOutcome::Report(report)),
            Err(_) => Ok(TradeOutcome::Message {
                message: text.trim().to_string(),
            }),
        }
    }

    // single attempt, no retry: connect errors, timeouts and error statuses
    // all collapse into the transport variant
    async fn get_text(&self, url: &str) -> Result<String, GatewayError> {
        let response = self.client.get(url).send().await.map_err(transport)?;
        let response = response.error_for_status().map_err(transport)?;
        response.text().await.map_err(transport)
    }

    async fn post_text<B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        let response = response.error_for_status().map_err(transport)?;
        response.text().await.map_err(transport)
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}
