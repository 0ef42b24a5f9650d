//! Options Flow CLI
//!
//! Command-line walkthrough of the anomaly detection pipeline on a
//! synthetic chain. Wire a real loader in front of `FlowDetector` to
//! analyze live data.

use options_flow::prelude::*;

fn main() {
    println!("Options Flow Analyzer");
    println!("=====================\n");

    // Build a sample AAPL chain with one planted volume spike and one
    // planted open-interest spike
    let mut snapshot = ChainSnapshot::new("AAPL");
    for i in 0..10 {
        let strike = 95.0 + i as f64 * 2.5;
        let mut call = OptionContract::call(strike, 80 + i * 5, 400);
        call.implied_vol = Some(0.22 + i as f64 * 0.005);
        snapshot.add_contract(call);

        let mut put = OptionContract::put(strike, 70 + i * 5, 380);
        put.implied_vol = Some(0.24 + i as f64 * 0.005);
        snapshot.add_contract(put);
    }
    // Unusual activity: heavy call buying at 110, heavy put positioning at 100
    let mut hot_call = OptionContract::call(110.0, 2400, 450);
    hot_call.implied_vol = Some(0.31);
    snapshot.add_contract(hot_call);
    let mut hot_put = OptionContract::put(100.0, 90, 3800);
    hot_put.implied_vol = Some(0.29);
    snapshot.add_contract(hot_put);

    println!("Snapshot: {} contracts for {}", snapshot.len(), snapshot.ticker);
    println!(
        "  Calls: {}  Puts: {}",
        snapshot.calls().count(),
        snapshot.puts().count()
    );

    let config = ThresholdConfig::default();
    println!(
        "\nThreshold multipliers: volume {:.1}x, open interest {:.1}x",
        config.volume_multiplier, config.open_interest_multiplier
    );

    let detector = FlowDetector::with_config(config);
    let report = match detector.detect(&snapshot) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(baseline) = &report.baseline {
        println!(
            "Baseline: avg volume {:.1}, avg open interest {:.1} over {} contracts",
            baseline.avg_volume, baseline.avg_open_interest, baseline.contracts
        );
    }

    println!("\nDetected anomalies:");
    for anomaly in &report.anomalies {
        println!("  {}", anomaly.summary_line());
    }

    println!("\n{}", report.headline());
}
