//! Transaction log handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use crate::storage::ReceiptStorage;
use crate::types::TransactionReceipt;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Transaction log query parameters
#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub limit: Option<usize>,
}

/// Transaction log response
#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionReceipt>,
    pub total: usize,
}

/// List the most recent fabricated transaction receipts, oldest first
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionsQuery>,
) -> ApiResult<Json<TransactionListResponse>> {
    let limit = query.limit.unwrap_or(100).min(1000);
    let transactions = state.storage.recent_receipts(limit).await?;
    let total = state.storage.receipt_count().await?;

    Ok(Json(TransactionListResponse {
        transactions,
        total,
    }))
}
