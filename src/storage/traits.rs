//! Storage trait definitions

use crate::error::StorageError;
use crate::types::{TransactionReceipt, ValveRecord};
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Combined storage trait
#[async_trait]
pub trait Storage: ValveStorage + ReceiptStorage + Send + Sync {}

/// Storage for valve records
#[async_trait]
pub trait ValveStorage: Send + Sync {
    /// Get the first valve with a matching id
    async fn get_valve(&self, valve_id: &str) -> StorageResult<Option<ValveRecord>>;

    /// List all valves in insertion order
    async fn list_valves(&self) -> StorageResult<Vec<ValveRecord>>;

    /// Append a valve unconditionally (duplicate ids are accepted)
    async fn append_valve(&self, valve: ValveRecord) -> StorageResult<()>;

    /// Update the status of the first valve with a matching id, returning
    /// the updated record
    async fn update_status(&self, valve_id: &str, status: &str) -> StorageResult<ValveRecord>;
}

/// Storage for synthetic transaction receipts
#[async_trait]
pub trait ReceiptStorage: Send + Sync {
    /// Record a receipt
    async fn store_receipt(&self, receipt: TransactionReceipt) -> StorageResult<()>;

    /// Get the most recent receipts, oldest first
    async fn recent_receipts(&self, limit: usize) -> StorageResult<Vec<TransactionReceipt>>;

    /// Number of receipts currently retained
    async fn receipt_count(&self) -> StorageResult<usize>;
}
