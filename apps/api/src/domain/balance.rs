use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::customer::null_as_empty;

/// Balance query forwarded to the external balance API
///
/// Serialized as `{"Address": .., "Contract": ..}`; lowercase keys are
/// accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BalanceRequest {
    #[serde(alias = "address", deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(alias = "contract", deserialize_with = "null_as_empty")]
    pub contract: String,
}

/// Balance returned by the external balance API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BalanceResponse {
    #[serde(alias = "balance", deserialize_with = "null_as_empty")]
    pub balance: String,
}

/// Errors raised while talking to the balance API
#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("Balance API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Balance API returned status {0}")]
    Status(u16),

    #[error("Balance API returned an invalid body: {0}")]
    Decode(String),
}

/// Port for looking up token balances
#[async_trait]
pub trait BalanceLookup: Send + Sync {
    async fn lookup(&self, request: &BalanceRequest) -> Result<BalanceResponse, BalanceError>;
}
