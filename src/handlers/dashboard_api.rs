use crate::{services::GatewayService, types::*};
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

// health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// instrument search
pub async fn get_instrument(
    State(gateway): State<GatewayService>,
    Path(instrument_id): Path<String>,
) -> Json<Value> {
    match gateway.fetch_instrument(&instrument_id).await {
        Ok(instrument) => Json(instrument),
        Err(err) => Json(err.into_body()),
    }
}

// instrument picker for the trade form; an empty array doubles as the
// failure signal
pub async fn get_instruments(State(gateway): State<GatewayService>) -> Json<Vec<String>> {
    Json(gateway.list_instruments().await)
}

// approval fallback for unrecognized instruments
pub async fn post_approval_request(
    State(gateway): State<GatewayService>,
    Json(form): Json<ApprovalForm>,
) -> Json<Value> {
    match gateway.submit_approval_request(&form.instrument_id).await {
        Ok(receipt) => Json(receipt),
        Err(err) => Json(err.into_body()),
    }
}

// counterparty limit check
pub async fn get_limit(
    State(gateway): State<GatewayService>,
    Path(counterparty): Path<String>,
) -> Json<Value> {
    match gateway.fetch_available_limit(&counterparty).await {
        Ok(limit) => Json(json!(limit)),
        Err(err) => Json(err.into_body()),
    }
}

// trade execution with the instrument precheck. Unknown instruments get a
// needs_approval response; the client submits the approval request as its
// own call and retries, so no hidden confirmation state lives here.
pub async fn post_trade(
    State(gateway): State<GatewayService>,
    Json(form): Json<TradeForm>,
) -> Json<Value> {
    if let Err(err) = gateway.fetch_instrument(&form.instrument_id).await {
        return Json(json!({
            "status": "needs_approval",
            "instrumentId": form.instrument_id,
            "reason": err.to_string(),
        }));
    }

    match gateway
        .execute_trade(&form.instrument_id, &form.counterparty, form.amount)
        .await
    {
        Ok(outcome) => Json(outcome.into_body()),
        Err(err) => Json(err.into_body()),
    }
}
