//! Option contract definitions
//!
//! One contract is one row of an options chain: identity (type, strike,
//! expiry) plus the market activity used for anomaly detection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Display label for table rows ("Call" / "Put")
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

/// One row of an options chain
///
/// `volume` is trades today, `open_interest` is outstanding contracts.
/// `implied_vol` is a pass-through display attribute; it does not
/// participate in anomaly scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionContract {
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Expiration date (identity only; detection does not use it)
    pub expiry: Option<NaiveDate>,
    /// Trading volume today
    pub volume: u64,
    /// Open interest
    pub open_interest: u64,
    /// Implied volatility, if the provider reported one
    pub implied_vol: Option<f64>,
    /// Contract symbol (provider-specific)
    pub symbol: Option<String>,
}

impl OptionContract {
    /// Create a contract with the fields detection cares about
    pub fn new(option_type: OptionType, strike: f64, volume: u64, open_interest: u64) -> Self {
        Self {
            option_type,
            strike,
            expiry: None,
            volume,
            open_interest,
            implied_vol: None,
            symbol: None,
        }
    }

    /// Shorthand for a call
    pub fn call(strike: f64, volume: u64, open_interest: u64) -> Self {
        Self::new(OptionType::Call, strike, volume, open_interest)
    }

    /// Shorthand for a put
    pub fn put(strike: f64, volume: u64, open_interest: u64) -> Self {
        Self::new(OptionType::Put, strike, volume, open_interest)
    }

    /// Build from raw provider counts
    ///
    /// Providers report volume and open interest as signed integers that may
    /// be missing or (on bad rows) negative. Negative counts are clamped to
    /// zero so one bad row cannot skew the chain baseline.
    pub fn from_provider(
        option_type: OptionType,
        strike: f64,
        volume: Option<i64>,
        open_interest: Option<i64>,
        implied_vol: Option<f64>,
    ) -> Self {
        let mut contract = Self::new(
            option_type,
            strike,
            volume.unwrap_or(0).max(0) as u64,
            open_interest.unwrap_or(0).max(0) as u64,
        );
        contract.implied_vol = implied_vol.filter(|iv| *iv >= 0.0);
        contract
    }

    pub fn is_call(&self) -> bool {
        self.option_type == OptionType::Call
    }

    pub fn is_put(&self) -> bool {
        self.option_type == OptionType::Put
    }

    /// Implied vol formatted for display ("32.1%", or "-" when absent)
    pub fn implied_vol_label(&self) -> String {
        match self.implied_vol {
            Some(iv) => format!("{:.1}%", iv * 100.0),
            None => "-".to_string(),
        }
    }
}
