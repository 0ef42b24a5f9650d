//! Chain-wide baseline statistics
//!
//! The anomaly reference point is the arithmetic mean of volume and open
//! interest across the whole chain, calls and puts pooled. A single
//! chain-wide baseline tracks the ticker's general activity level, so the
//! same multiplier works across tickers with very different liquidity.

use serde::{Deserialize, Serialize};

use crate::core::ChainSnapshot;

/// Baseline activity for one chain snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChainBaseline {
    /// Mean volume across all contracts
    pub avg_volume: f64,
    /// Mean open interest across all contracts
    pub avg_open_interest: f64,
    /// Number of contracts the means were taken over
    pub contracts: usize,
}

impl ChainBaseline {
    /// Compute the baseline, or `None` for an empty snapshot
    ///
    /// An all-zero chain yields a zero baseline; that is meaningful (any
    /// nonzero activity against it is unusual) and is not special-cased.
    pub fn from_snapshot(snapshot: &ChainSnapshot) -> Option<Self> {
        if snapshot.is_empty() {
            return None;
        }

        let n = snapshot.len() as f64;
        let avg_volume = snapshot.total_volume() as f64 / n;
        let avg_open_interest = snapshot.total_open_interest() as f64 / n;

        Some(Self {
            avg_volume,
            avg_open_interest,
            contracts: snapshot.len(),
        })
    }

    /// Volume level that trips the anomaly condition
    pub fn volume_threshold(&self, multiplier: f64) -> f64 {
        self.avg_volume * multiplier
    }

    /// Open-interest level that trips the anomaly condition
    pub fn open_interest_threshold(&self, multiplier: f64) -> f64 {
        self.avg_open_interest * multiplier
    }
}
