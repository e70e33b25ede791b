//! In-memory storage implementation

use super::traits::*;
use crate::error::StorageError;
use crate::types::{seed_valves, TransactionReceipt, ValveRecord};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory store backing the registry.
///
/// Valves live in an insertion-ordered `Vec`; lookups are linear scans and
/// the first record with a matching id wins. Each operation takes a single
/// guard, so a lookup-and-mutate is atomic with respect to concurrent
/// requests.
#[derive(Debug)]
pub struct InMemoryStorage {
    valves: RwLock<Vec<ValveRecord>>,
    receipts: RwLock<Vec<TransactionReceipt>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            valves: RwLock::new(Vec::new()),
            receipts: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the two startup sample valves
    pub fn seeded() -> Self {
        Self {
            valves: RwLock::new(seed_valves()),
            receipts: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ValveStorage for InMemoryStorage {
    async fn get_valve(&self, valve_id: &str) -> StorageResult<Option<ValveRecord>> {
        let valves = self.valves.read().await;
        Ok(valves.iter().find(|v| v.valve_id == valve_id).cloned())
    }

    async fn list_valves(&self) -> StorageResult<Vec<ValveRecord>> {
        let valves = self.valves.read().await;
        Ok(valves.clone())
    }

    async fn append_valve(&self, valve: ValveRecord) -> StorageResult<()> {
        let mut valves = self.valves.write().await;
        valves.push(valve);
        Ok(())
    }

    async fn update_status(&self, valve_id: &str, status: &str) -> StorageResult<ValveRecord> {
        let mut valves = self.valves.write().await;
        let valve = valves
            .iter_mut()
            .find(|v| v.valve_id == valve_id)
            .ok_or_else(|| StorageError::NotFound(format!("Valve {} not found", valve_id)))?;

        valve.status = status.to_string();
        Ok(valve.clone())
    }
}

#[async_trait]
impl ReceiptStorage for InMemoryStorage {
    async fn store_receipt(&self, receipt: TransactionReceipt) -> StorageResult<()> {
        let mut receipts = self.receipts.write().await;
        receipts.push(receipt);

        // Keep only the last 10000 receipts in memory
        if receipts.len() > 10_000 {
            receipts.drain(0..1_000);
        }

        Ok(())
    }

    async fn recent_receipts(&self, limit: usize) -> StorageResult<Vec<TransactionReceipt>> {
        let receipts = self.receipts.read().await;
        let start = receipts.len().saturating_sub(limit);
        Ok(receipts[start..].to_vec())
    }

    async fn receipt_count(&self) -> StorageResult<usize> {
        let receipts = self.receipts.read().await;
        Ok(receipts.len())
    }
}

impl Storage for InMemoryStorage {}
