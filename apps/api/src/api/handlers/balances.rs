use axum::{body::Bytes, extract::State, Json};

use crate::api::body::decode_json;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::balance::{BalanceRequest, BalanceResponse};

/// Look up a balance through the external balance API
///
/// POST /balances
pub async fn get_balance(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BalanceResponse>, ApiError> {
    let request: BalanceRequest = decode_json(&body)?;
    tracing::info!(
        address = %request.address,
        contract = %request.contract,
        "Balance request received"
    );

    let response = state.balances.lookup(&request).await?;
    tracing::info!(balance = %response.balance, "Balance API responded");

    Ok(Json(response))
}
