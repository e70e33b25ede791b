//! Contract info and simulated call handlers

use crate::api::rest::state::AppState;
use crate::chain;
use crate::error::{ApiError, ApiResult};
use crate::storage::ReceiptStorage;
use crate::types::{ReceiptKind, TransactionReceipt};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Contract info response
#[derive(Debug, Serialize)]
pub struct ContractInfoResponse {
    pub contract_address: String,
    pub network: &'static str,
    pub rpc_url: String,
    pub connected: bool,
}

/// Report the static contract configuration
pub async fn contract_info(State(state): State<AppState>) -> Json<ContractInfoResponse> {
    Json(ContractInfoResponse {
        contract_address: state.chain.contract_address.clone(),
        network: state.chain.network(),
        rpc_url: state.chain.rpc_url.clone(),
        connected: state.chain.connected(),
    })
}

/// Contract call request
#[derive(Debug, Serialize, Deserialize)]
pub struct ContractCallRequest {
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

/// Contract call response
#[derive(Debug, Serialize)]
pub struct ContractCallResponse {
    pub method: String,
    pub params: serde_json::Map<String, serde_json::Value>,
    pub result: String,
    pub transaction_hash: String,
    pub gas_used: u64,
}

/// Simulate a contract method call. No contract is invoked; the response
/// echoes the request with a canned result and a fabricated receipt.
pub async fn call_contract(
    State(state): State<AppState>,
    Json(call): Json<ContractCallRequest>,
) -> ApiResult<Json<ContractCallResponse>> {
    let payload = serde_json::to_string(&call).map_err(|e| ApiError::Internal(e.to_string()))?;
    let transaction_hash = chain::transaction_hash(&payload);

    state
        .storage
        .store_receipt(TransactionReceipt::new(
            ReceiptKind::ContractCall,
            None,
            transaction_hash.clone(),
        ))
        .await?;

    tracing::info!(method = %call.method, "Simulated contract call");

    Ok(Json(ContractCallResponse {
        result: format!("Mock result for {}", call.method),
        method: call.method,
        params: call.params,
        transaction_hash,
        gas_used: chain::MOCK_GAS_USED,
    }))
}
