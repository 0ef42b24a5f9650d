//! # Options Flow - Unusual Options Activity Detection
//!
//! Detects unusual options-market activity for a stock ticker by comparing
//! each contract's volume and open interest against a baseline derived from
//! the same chain.
//!
//! ## Overview
//!
//! Given a snapshot of an options chain, the detector computes the chain-wide
//! average volume and open interest, then flags every contract whose activity
//! exceeds that baseline times a configurable multiplier. The result is a
//! report of flagged contracts with the baselines attached, ready for a table
//! view or a notification message.
//!
//! ## Key Components
//!
//! - **ChainSnapshot**: Normalized chain for one ticker (calls + puts)
//! - **ThresholdConfig**: Volume and open-interest multipliers (UI range 1-10)
//! - **FlowDetector**: The detection pipeline facade
//! - **FlowReport**: Flagged contracts, baselines, and notification text
//!
//! ## Usage
//!
//! ```rust
//! use options_flow::prelude::*;
//!
//! let snapshot = ChainSnapshot::with_contracts(
//!     "AAPL",
//!     vec![
//!         OptionContract::call(100.0, 50, 200),
//!         OptionContract::call(105.0, 500, 210),
//!         OptionContract::put(95.0, 40, 190),
//!     ],
//! );
//!
//! let report = detect_anomalies(&snapshot, 2.0).unwrap();
//! assert_eq!(report.count(), 1);
//! println!("{}", report.headline());
//! ```
//!
//! ## What This Crate Does
//!
//! - Computes chain-wide baseline volume and open interest
//! - Flags contracts exceeding baseline times multiplier, preserving order
//! - Distinguishes "no data" from "no anomalies found"
//! - Produces display strings and JSON for downstream consumers
//!
//! ## What This Crate Does NOT Do
//!
//! - Fetch market data (the loader hands it a finished snapshot)
//! - Render tables or deliver desktop notifications
//! - Price options or model implied volatility (IV is display-only)
//! - Schedule or retry network calls

pub mod core;
pub mod flow;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{ChainSnapshot, FlowError, FlowResult, OptionContract, OptionType};

    // Detection
    pub use crate::flow::{
        detect_anomalies,
        detect_anomalies_with_config,
        Anomaly,
        ChainBaseline,
        // Detector
        FlowDetector,
        FlowReport,
        // Config
        ThresholdConfig,
        UI_MAX_MULTIPLIER,
        UI_MIN_MULTIPLIER,
    };
}

// Re-export main types at crate root
pub use crate::core::{FlowError, FlowResult};
pub use crate::flow::{FlowDetector, FlowReport, ThresholdConfig};
