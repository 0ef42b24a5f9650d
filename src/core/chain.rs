//! Options chain snapshot
//!
//! The normalized input to the detector: every call and put for one ticker
//! at a point in time, in the order the loader produced them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contract::{OptionContract, OptionType};

/// A snapshot of a ticker's options chain
///
/// Built by a data loader per analysis request and discarded after detection.
/// Contract order is preserved end to end; the detector never re-sorts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainSnapshot {
    /// Ticker symbol (e.g., "AAPL")
    pub ticker: String,
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,
    /// All contracts, calls and puts, in loader order
    pub contracts: Vec<OptionContract>,
}

impl ChainSnapshot {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            timestamp: Utc::now(),
            contracts: Vec::new(),
        }
    }

    /// Build from an already-collected contract list
    pub fn with_contracts(ticker: impl Into<String>, contracts: Vec<OptionContract>) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            timestamp: Utc::now(),
            contracts,
        }
    }

    /// Append a contract, keeping loader order
    pub fn add_contract(&mut self, contract: OptionContract) {
        self.contracts.push(contract);
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Call contracts only, in snapshot order
    pub fn calls(&self) -> impl Iterator<Item = &OptionContract> {
        self.contracts.iter().filter(|c| c.is_call())
    }

    /// Put contracts only, in snapshot order
    pub fn puts(&self) -> impl Iterator<Item = &OptionContract> {
        self.contracts.iter().filter(|c| c.is_put())
    }

    /// All distinct strikes, ascending
    pub fn strikes(&self) -> Vec<f64> {
        let mut strikes: Vec<f64> = self.contracts.iter().map(|c| c.strike).collect();
        strikes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        strikes.dedup();
        strikes
    }

    /// Total traded volume across the chain
    pub fn total_volume(&self) -> u64 {
        self.contracts.iter().map(|c| c.volume).sum()
    }

    /// Total open interest across the chain
    pub fn total_open_interest(&self) -> u64 {
        self.contracts.iter().map(|c| c.open_interest).sum()
    }

    /// Count contracts of one type
    pub fn count_of(&self, option_type: OptionType) -> usize {
        self.contracts
            .iter()
            .filter(|c| c.option_type == option_type)
            .count()
    }
}
