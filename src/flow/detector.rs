//! FlowDetector - facade for the anomaly detection pipeline
//!
//! A pure transformation from snapshot + config to report: no state between
//! calls, no shared resources, safe to run concurrently per ticker.

use super::{Anomaly, ChainBaseline, FlowReport, ThresholdConfig};
use crate::core::{ChainSnapshot, FlowResult};

/// Detects unusual options activity in a chain snapshot
pub struct FlowDetector {
    config: ThresholdConfig,
}

impl FlowDetector {
    /// Create a detector with default configuration
    pub fn new() -> Self {
        Self {
            config: ThresholdConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Update configuration
    pub fn set_config(&mut self, config: ThresholdConfig) {
        self.config = config;
    }

    /// Run anomaly detection on a snapshot
    ///
    /// # Arguments
    /// * `snapshot` - Full chain for one ticker (calls and puts)
    ///
    /// # Returns
    /// A report with flagged contracts in snapshot order. An empty snapshot
    /// yields `Ok` with `has_data = false`; the only error is an invalid
    /// multiplier.
    pub fn detect(&self, snapshot: &ChainSnapshot) -> FlowResult<FlowReport> {
        self.config.validate()?;

        let baseline = match ChainBaseline::from_snapshot(snapshot) {
            Some(b) => b,
            None => {
                return Ok(FlowReport {
                    ticker: snapshot.ticker.clone(),
                    has_data: false,
                    baseline: None,
                    anomalies: Vec::new(),
                    config: self.config,
                    timestamp: snapshot.timestamp,
                });
            }
        };

        let volume_threshold = baseline.volume_threshold(self.config.volume_multiplier);
        let oi_threshold =
            baseline.open_interest_threshold(self.config.open_interest_multiplier);

        tracing::debug!(
            ticker = %snapshot.ticker,
            contracts = snapshot.len(),
            avg_volume = baseline.avg_volume,
            avg_open_interest = baseline.avg_open_interest,
            "running flow detection"
        );

        // Strict > keeps the zero-baseline rule: against an all-zero chain,
        // any nonzero count is flagged regardless of the multiplier.
        let anomalies: Vec<Anomaly> = snapshot
            .contracts
            .iter()
            .filter_map(|contract| {
                let volume_triggered = contract.volume as f64 > volume_threshold;
                let oi_triggered = contract.open_interest as f64 > oi_threshold;

                if volume_triggered || oi_triggered {
                    Some(Anomaly {
                        contract: contract.clone(),
                        baseline_volume: baseline.avg_volume,
                        baseline_open_interest: baseline.avg_open_interest,
                        volume_triggered,
                        oi_triggered,
                    })
                } else {
                    None
                }
            })
            .collect();

        Ok(FlowReport {
            ticker: snapshot.ticker.clone(),
            has_data: true,
            baseline: Some(baseline),
            anomalies,
            config: self.config,
            timestamp: snapshot.timestamp,
        })
    }
}

impl Default for FlowDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function: detect with one multiplier for both conditions
pub fn detect_anomalies(snapshot: &ChainSnapshot, multiplier: f64) -> FlowResult<FlowReport> {
    FlowDetector::with_config(ThresholdConfig::uniform(multiplier)).detect(snapshot)
}

/// Convenience function with a full config
pub fn detect_anomalies_with_config(
    snapshot: &ChainSnapshot,
    config: ThresholdConfig,
) -> FlowResult<FlowReport> {
    FlowDetector::with_config(config).detect(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FlowError, OptionContract};

    fn sample_snapshot() -> ChainSnapshot {
        ChainSnapshot::with_contracts(
            "AAPL",
            vec![
                OptionContract::call(100.0, 50, 200),
                OptionContract::call(105.0, 500, 210),
                OptionContract::put(95.0, 40, 190),
            ],
        )
    }

    #[test]
    fn test_concrete_scenario() {
        // baseline_volume ~= 196.7, threshold ~= 393.3 at 2x
        // baseline_oi = 200, threshold = 400 at 2x
        let report = detect_anomalies(&sample_snapshot(), 2.0).unwrap();

        assert!(report.has_data);
        assert_eq!(report.count(), 1);

        let anomaly = &report.anomalies[0];
        assert!((anomaly.contract.strike - 105.0).abs() < 0.01);
        assert!(anomaly.volume_triggered);
        assert!(!anomaly.oi_triggered);
        assert!((anomaly.baseline_volume - 590.0 / 3.0).abs() < 0.1);
        assert!((anomaly.baseline_open_interest - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_multiplier_is_an_error() {
        let snap = sample_snapshot();
        assert!(matches!(
            detect_anomalies(&snap, 0.0),
            Err(FlowError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            detect_anomalies(&snap, -1.0),
            Err(FlowError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_empty_snapshot_is_no_data_not_an_error() {
        let report = detect_anomalies(&ChainSnapshot::new("AAPL"), 2.0).unwrap();
        assert!(!report.has_data);
        assert!(report.baseline.is_none());
        assert!(report.is_empty());
    }

    #[test]
    fn test_anomalies_are_a_subsequence_of_the_input() {
        let snap = ChainSnapshot::with_contracts(
            "SPY",
            vec![
                OptionContract::call(400.0, 900, 10),
                OptionContract::put(395.0, 10, 10),
                OptionContract::call(405.0, 800, 10),
                OptionContract::put(390.0, 5, 10),
            ],
        );
        let report = detect_anomalies(&snap, 1.5).unwrap();

        // Snapshot order preserved, nothing invented or duplicated
        assert_eq!(report.count(), 2);
        assert_eq!(report.anomalies[0].contract.strike, 400.0);
        assert_eq!(report.anomalies[1].contract.strike, 405.0);
    }

    #[test]
    fn test_count_is_monotone_in_the_multiplier() {
        let snap = ChainSnapshot::with_contracts(
            "TSLA",
            vec![
                OptionContract::call(200.0, 100, 50),
                OptionContract::call(210.0, 300, 600),
                OptionContract::put(190.0, 700, 80),
                OptionContract::put(180.0, 20, 900),
                OptionContract::call(220.0, 450, 450),
            ],
        );

        let mut last = usize::MAX;
        for multiplier in [0.5, 1.0, 1.5, 2.0, 3.0, 5.0, 10.0] {
            let count = detect_anomalies(&snap, multiplier).unwrap().count();
            assert!(
                count <= last,
                "count rose from {} to {} at multiplier {}",
                last,
                count,
                multiplier
            );
            last = count;
        }
    }

    #[test]
    fn test_zero_baseline_rule() {
        // All-zero volumes: zero baseline, nothing volume-triggered
        let quiet = ChainSnapshot::with_contracts(
            "XYZ",
            (0..20)
                .map(|i| OptionContract::call(50.0 + i as f64, 0, 0))
                .collect(),
        );
        let report = detect_anomalies(&quiet, 2.0).unwrap();
        assert!(report.has_data);
        assert_eq!(report.count(), 0);

        // One contract with volume 1 against an otherwise dead chain is
        // flagged across the whole UI multiplier range: the pooled mean is
        // 1/21, so even at 10x the threshold stays below 1.
        let mut active = quiet.clone();
        active.add_contract(OptionContract::call(70.0, 1, 0));
        for multiplier in [1.0, 2.0, 10.0] {
            let report = detect_anomalies(&active, multiplier).unwrap();
            let flagged = report.volume_triggered();
            assert_eq!(flagged.len(), 1, "multiplier {}", multiplier);
            assert_eq!(flagged[0].contract.volume, 1);
        }
    }

    #[test]
    fn test_both_triggers_recorded() {
        let snap = ChainSnapshot::with_contracts(
            "NVDA",
            vec![
                OptionContract::call(100.0, 10, 10),
                OptionContract::call(110.0, 10, 10),
                OptionContract::call(120.0, 1000, 1000),
            ],
        );
        let report = detect_anomalies(&snap, 2.0).unwrap();
        assert_eq!(report.count(), 1);
        let a = &report.anomalies[0];
        assert!(a.volume_triggered && a.oi_triggered);
        assert_eq!(a.trigger_label(), "Volume+OI");
    }

    #[test]
    fn test_separate_multipliers() {
        // OI is uniform (never trips), volume has one spike
        let snap = ChainSnapshot::with_contracts(
            "AMD",
            vec![
                OptionContract::call(100.0, 10, 300),
                OptionContract::call(105.0, 400, 300),
                OptionContract::put(95.0, 10, 300),
            ],
        );
        let config = ThresholdConfig {
            volume_multiplier: 2.0,
            open_interest_multiplier: 1.01,
        };
        let report = detect_anomalies_with_config(&snap, config).unwrap();

        assert_eq!(report.count(), 1);
        assert!(report.anomalies[0].volume_triggered);
        assert!(report.oi_triggered().is_empty());
    }

    #[test]
    fn test_detector_facade_config_roundtrip() {
        let mut detector = FlowDetector::new();
        assert_eq!(detector.config().volume_multiplier, 2.0);

        detector.set_config(ThresholdConfig::conservative());
        assert_eq!(detector.config().volume_multiplier, 3.0);

        let report = detector.detect(&sample_snapshot()).unwrap();
        assert_eq!(report.config.volume_multiplier, 3.0);
    }
}
