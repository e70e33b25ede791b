//! API request handlers

mod contract;
mod health;
mod transactions;
mod valves;

pub use contract::*;
pub use health::*;
pub use transactions::*;
pub use valves::*;
