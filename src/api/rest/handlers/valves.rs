//! Valve registry handlers

use crate::api::rest::state::AppState;
use crate::chain;
use crate::error::{ApiError, ApiResult};
use crate::storage::{ReceiptStorage, ValveStorage};
use crate::types::{ReceiptKind, TransactionReceipt, ValveRecord};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Valve list response
#[derive(Debug, Serialize)]
pub struct ValveListResponse {
    pub valves: Vec<ValveRecord>,
    pub total: usize,
}

/// List all valves
pub async fn list_valves(State(state): State<AppState>) -> ApiResult<Json<ValveListResponse>> {
    let valves = state.storage.list_valves().await?;
    let total = valves.len();
    Ok(Json(ValveListResponse { valves, total }))
}

/// Get a specific valve
pub async fn get_valve(
    State(state): State<AppState>,
    Path(valve_id): Path<String>,
) -> ApiResult<Json<ValveRecord>> {
    let valve = state
        .storage
        .get_valve(&valve_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Valve {} not found", valve_id)))?;

    Ok(Json(valve))
}

/// Register valve request
#[derive(Debug, Deserialize)]
pub struct RegisterValveRequest {
    pub valve_id: String,
    pub status: String,
    pub location: String,
    pub last_maintenance: Option<String>,
}

/// Register valve response
#[derive(Debug, Serialize)]
pub struct RegisterValveResponse {
    pub success: bool,
    pub valve: ValveRecord,
    pub transaction_hash: String,
}

/// Register a new valve. Duplicate ids are accepted silently; the record is
/// appended unconditionally.
pub async fn create_valve(
    State(state): State<AppState>,
    Json(request): Json<RegisterValveRequest>,
) -> ApiResult<Json<RegisterValveResponse>> {
    let valve = ValveRecord::register(
        request.valve_id,
        request.status,
        request.location,
        request.last_maintenance,
    );

    let payload =
        serde_json::to_string(&valve).map_err(|e| ApiError::Internal(e.to_string()))?;
    let transaction_hash = chain::transaction_hash(&payload);

    state.storage.append_valve(valve.clone()).await?;
    state
        .storage
        .store_receipt(TransactionReceipt::new(
            ReceiptKind::ValveRegistered,
            Some(valve.valve_id.clone()),
            transaction_hash.clone(),
        ))
        .await?;

    tracing::info!(valve_id = %valve.valve_id, "Registered valve");

    Ok(Json(RegisterValveResponse {
        success: true,
        valve,
        transaction_hash,
    }))
}

/// Status update query parameters
#[derive(Debug, Deserialize)]
pub struct UpdateStatusQuery {
    pub status: Option<String>,
}

/// Status update body
#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

/// Status update response
#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub valve_id: String,
    pub new_status: String,
    pub transaction_hash: String,
}

/// Update a valve's status. The new status is read from the `status` query
/// parameter, falling back to a JSON body; any string is accepted.
pub async fn update_valve_status(
    State(state): State<AppState>,
    Path(valve_id): Path<String>,
    Query(query): Query<UpdateStatusQuery>,
    body: Option<Json<UpdateStatusBody>>,
) -> ApiResult<Json<UpdateStatusResponse>> {
    let status = query
        .status
        .or(body.map(|Json(b)| b.status))
        .ok_or_else(|| {
            ApiError::BadRequest("status is required (query parameter or JSON body)".to_string())
        })?;

    let valve = state.storage.update_status(&valve_id, &status).await?;

    let transaction_hash = chain::transaction_hash(&format!("{}{}", valve.valve_id, valve.status));
    state
        .storage
        .store_receipt(TransactionReceipt::new(
            ReceiptKind::StatusUpdated,
            Some(valve.valve_id.clone()),
            transaction_hash.clone(),
        ))
        .await?;

    tracing::info!(valve_id = %valve.valve_id, status = %valve.status, "Updated valve status");

    Ok(Json(UpdateStatusResponse {
        success: true,
        valve_id: valve.valve_id,
        new_status: valve.status,
        transaction_hash,
    }))
}
