//! Example: Analyze a chain snapshot at several thresholds
//!
//! Run with: cargo run --example analyze_chain

use options_flow::prelude::*;

fn main() {
    // Create sample data: strikes around ATM with uniform activity
    let spot = 500.0;
    let mut snapshot = ChainSnapshot::new("QQQ");
    for i in 0..21 {
        let strike = spot - 10.0 + i as f64;
        snapshot.add_contract(OptionContract::call(strike, 120, 900));
        snapshot.add_contract(OptionContract::put(strike, 110, 850));
    }

    // Plant a volume spike at the 505 call and an OI spike at the 495 put
    snapshot.add_contract(OptionContract::call(505.0, 1800, 950));
    snapshot.add_contract(OptionContract::put(495.0, 130, 9000));

    // Sweep the UI multiplier range: higher thresholds keep fewer anomalies
    for multiplier in [1.0, 2.0, 4.0, 8.0] {
        let report = detect_anomalies(&snapshot, multiplier).unwrap();
        println!("multiplier {:>4.1}x -> {} anomalies", multiplier, report.count());
        for anomaly in &report.anomalies {
            println!("    {}", anomaly.summary_line());
        }
    }

    // A custom config can hold the two conditions to different standards
    let config = ThresholdConfig {
        volume_multiplier: 5.0,
        open_interest_multiplier: 2.0,
    };
    let report = detect_anomalies_with_config(&snapshot, config).unwrap();
    println!("\ncustom config -> {}", report.headline());
}
