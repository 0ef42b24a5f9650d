//! Unusual options activity detection
//!
//! Flags contracts whose activity stands out against the rest of the chain.
//!
//! Two trigger conditions, checked independently per contract:
//! - **Volume**: today's traded volume exceeds the chain average times the multiplier
//! - **Open interest**: outstanding contracts exceed the chain average times the multiplier
//!
//! The pipeline is a single linear scan:
//! 1. **Baseline**: chain-wide mean volume and open interest, calls and puts pooled
//! 2. **Threshold rule**: strict `>` against baseline times multiplier, per condition
//! 3. **Report**: flagged contracts in snapshot order, with the baselines attached

mod baseline;
mod config;
mod detector;

pub use baseline::*;
pub use config::*;
pub use detector::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{FlowError, FlowResult, OptionContract};

/// One flagged contract
///
/// Owns a copy of the contract plus the baselines it was judged against, so
/// a consumer can render "3.2x average volume" without recomputation. Built
/// fresh on every detection run and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    /// The flagged contract
    pub contract: OptionContract,
    /// Chain-wide mean volume at detection time
    pub baseline_volume: f64,
    /// Chain-wide mean open interest at detection time
    pub baseline_open_interest: f64,
    /// Volume exceeded baseline times multiplier
    pub volume_triggered: bool,
    /// Open interest exceeded baseline times multiplier
    pub oi_triggered: bool,
}

impl Anomaly {
    /// Volume as a multiple of the baseline (`None` on a zero baseline)
    pub fn volume_ratio(&self) -> Option<f64> {
        if self.baseline_volume > 0.0 {
            Some(self.contract.volume as f64 / self.baseline_volume)
        } else {
            None
        }
    }

    /// Open interest as a multiple of the baseline (`None` on a zero baseline)
    pub fn open_interest_ratio(&self) -> Option<f64> {
        if self.baseline_open_interest > 0.0 {
            Some(self.contract.open_interest as f64 / self.baseline_open_interest)
        } else {
            None
        }
    }

    /// Short label for what tripped: "Volume", "OI", or "Volume+OI"
    pub fn trigger_label(&self) -> &'static str {
        match (self.volume_triggered, self.oi_triggered) {
            (true, true) => "Volume+OI",
            (true, false) => "Volume",
            (false, true) => "OI",
            // detect only emits anomalies with at least one trigger set
            (false, false) => "None",
        }
    }

    /// One-line description for tables and tooltips
    ///
    /// e.g. `Call K=105 | Vol 500 (2.5x avg) | OI 210 | IV 32.1% | Volume`
    pub fn summary_line(&self) -> String {
        let vol_part = match self.volume_ratio() {
            Some(r) => format!("Vol {} ({:.1}x avg)", self.contract.volume, r),
            None => format!("Vol {}", self.contract.volume),
        };
        format!(
            "{} K={:.0} | {} | OI {} | IV {} | {}",
            self.contract.option_type.label(),
            self.contract.strike,
            vol_part,
            self.contract.open_interest,
            self.contract.implied_vol_label(),
            self.trigger_label()
        )
    }
}

/// Result of one detection run
///
/// `has_data` distinguishes "the snapshot was empty" from "analysis ran and
/// found nothing" - the two drive different user-facing messages and must
/// never be conflated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowReport {
    /// Ticker the snapshot was for
    pub ticker: String,
    /// False iff the snapshot contained no contracts
    pub has_data: bool,
    /// Baseline the anomalies were judged against (`None` without data)
    pub baseline: Option<ChainBaseline>,
    /// Flagged contracts, in snapshot order
    pub anomalies: Vec<Anomaly>,
    /// Configuration used for this run
    pub config: ThresholdConfig,
    /// Timestamp of the snapshot the analysis ran on
    pub timestamp: DateTime<Utc>,
}

impl FlowReport {
    /// Number of anomalies found
    pub fn count(&self) -> usize {
        self.anomalies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anomalies.is_empty()
    }

    /// Anomalies tripped by volume
    pub fn volume_triggered(&self) -> Vec<&Anomaly> {
        self.anomalies.iter().filter(|a| a.volume_triggered).collect()
    }

    /// Anomalies tripped by open interest
    pub fn oi_triggered(&self) -> Vec<&Anomaly> {
        self.anomalies.iter().filter(|a| a.oi_triggered).collect()
    }

    /// Call anomalies only
    pub fn calls(&self) -> Vec<&Anomaly> {
        self.anomalies.iter().filter(|a| a.contract.is_call()).collect()
    }

    /// Put anomalies only
    pub fn puts(&self) -> Vec<&Anomaly> {
        self.anomalies.iter().filter(|a| a.contract.is_put()).collect()
    }

    /// Notification text for this outcome
    ///
    /// The three outcomes read differently on purpose: no data, clean chain,
    /// and anomalies found.
    pub fn headline(&self) -> String {
        if !self.has_data {
            format!("No options data available for {}", self.ticker)
        } else if self.anomalies.is_empty() {
            format!("No unusual options activity detected for {}", self.ticker)
        } else {
            format!(
                "{} unusual options activities detected for {}",
                self.count(),
                self.ticker
            )
        }
    }

    /// Serialize for hand-off to a presentation or notification layer
    pub fn to_json(&self) -> FlowResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FlowError::serialization(e.to_string()))
    }
}
