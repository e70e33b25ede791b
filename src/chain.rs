//! Synthetic blockchain identifiers
//!
//! Everything here is a placeholder. Addresses and transaction hashes are
//! blake3 digests of their inputs truncated to the conventional widths, so
//! identical inputs always produce identical output, including across
//! restarts. Nothing is signed and nothing is submitted to a chain.

/// Gas figure reported for every simulated transaction.
pub const MOCK_GAS_USED: u64 = 21_000;

const ADDRESS_HEX_LEN: usize = 40;
const TX_HASH_HEX_LEN: usize = 64;

/// Derive a contract-address-shaped string (`0x` + 40 hex digits) from a
/// valve id.
pub fn contract_address(valve_id: &str) -> String {
    let hex = blake3::hash(valve_id.as_bytes()).to_hex();
    format!("0x{}", &hex.as_str()[..ADDRESS_HEX_LEN])
}

/// Derive a transaction-hash-shaped string (`0x` + 64 hex digits) from an
/// arbitrary payload.
pub fn transaction_hash(payload: &str) -> String {
    let hex = blake3::hash(payload.as_bytes()).to_hex();
    format!("0x{}", &hex.as_str()[..TX_HASH_HEX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    #[test]
    fn test_contract_address_shape() {
        let addr = contract_address("V003");
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 2 + ADDRESS_HEX_LEN);
        assert!(is_lower_hex(&addr[2..]));
    }

    #[test]
    fn test_transaction_hash_shape() {
        let hash = transaction_hash("V001INACTIVE");
        assert!(hash.starts_with("0x"));
        assert_eq!(hash.len(), 2 + TX_HASH_HEX_LEN);
        assert!(is_lower_hex(&hash[2..]));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(contract_address("V003"), contract_address("V003"));
        assert_eq!(transaction_hash("payload"), transaction_hash("payload"));
    }

    #[test]
    fn test_distinct_inputs_differ() {
        assert_ne!(contract_address("V001"), contract_address("V002"));
        assert_ne!(transaction_hash("a"), transaction_hash("b"));
    }
}
