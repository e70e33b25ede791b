//! Domain types for the valve registry

use crate::chain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A valve tracked by the registry, with its mocked on-chain association.
///
/// `valve_id` is caller-supplied and not checked for uniqueness; on lookup
/// the first record with a matching id wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValveRecord {
    pub valve_id: String,
    /// Synthetic placeholder formatted like a contract address, derived
    /// from `valve_id`. Not a real on-chain identifier.
    pub contract_address: String,
    /// Free-form status string; no enumerated values are enforced.
    pub status: String,
    pub location: String,
    /// Unvalidated date string.
    pub last_maintenance: Option<String>,
    pub on_chain: bool,
}

impl ValveRecord {
    /// Build a new registry record, deriving the contract address from the id.
    pub fn register(
        valve_id: impl Into<String>,
        status: impl Into<String>,
        location: impl Into<String>,
        last_maintenance: Option<String>,
    ) -> Self {
        let valve_id = valve_id.into();
        let contract_address = chain::contract_address(&valve_id);
        Self {
            valve_id,
            contract_address,
            status: status.into(),
            location: location.into(),
            last_maintenance,
            on_chain: true,
        }
    }
}

/// The two records every fresh process starts with.
pub fn seed_valves() -> Vec<ValveRecord> {
    vec![
        ValveRecord {
            valve_id: "V001".to_string(),
            contract_address: "0x1234567890123456789012345678901234567890".to_string(),
            status: "ACTIVE".to_string(),
            location: "Plant A - Section 1".to_string(),
            last_maintenance: Some("2024-01-15".to_string()),
            on_chain: true,
        },
        ValveRecord {
            valve_id: "V002".to_string(),
            contract_address: "0x2345678901234567890123456789012345678901".to_string(),
            status: "MAINTENANCE".to_string(),
            location: "Plant B - Section 2".to_string(),
            last_maintenance: Some("2024-01-10".to_string()),
            on_chain: true,
        },
    ]
}

/// What a fabricated transaction hash was handed out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptKind {
    ValveRegistered,
    StatusUpdated,
    ContractCall,
}

/// A synthetic transaction receipt recorded for every mutating operation.
/// No real transaction is submitted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub kind: ReceiptKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valve_id: Option<String>,
    pub gas_used: u64,
    pub timestamp: DateTime<Utc>,
}

impl TransactionReceipt {
    pub fn new(kind: ReceiptKind, valve_id: Option<String>, transaction_hash: String) -> Self {
        Self {
            transaction_hash,
            kind,
            valve_id,
            gas_used: chain::MOCK_GAS_USED,
            timestamp: Utc::now(),
        }
    }
}
