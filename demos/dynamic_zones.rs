//! Dynamically Keyed Zones
//!
//! This example loads zone definitions from JSON instead of declaring
//! enums, using the `String` implementations of `Signal` and `Zone`.
//! Deployments whose zones are provisioned from configuration rather
//! than compiled in use this shape.
//!
//! Run with: cargo run --example dynamic_zones

use zonegate::AutomatonBuilder;

const ZONE_CONFIG: &str = r#"
{
    "alphabet": ["CD", "FP", "RT", "PN", "FC", "VC", "BC", "AO"],
    "zones": [
        ["LO", ["CD", "PN", "FC", "FP"]],
        ["SR", ["FP", "RT", "BC", "AO"]]
    ]
}
"#;

#[derive(serde::Deserialize)]
struct ZoneConfig {
    alphabet: Vec<String>,
    zones: Vec<(String, Vec<String>)>,
}

fn main() {
    println!("=== Dynamically Keyed Zones ===\n");

    let config: ZoneConfig = serde_json::from_str(ZONE_CONFIG).unwrap();

    let automaton = AutomatonBuilder::new()
        .alphabet(config.alphabet)
        .zones(config.zones)
        .build()
        .unwrap();

    println!("Zones loaded from configuration:");
    for (state, zone) in automaton.accepting_states() {
        println!("  {zone} accepted at state {}", state.index());
    }
    println!();

    let attempts: Vec<Vec<String>> = vec![
        to_signals(&["CD", "PN", "FC", "FP"]),
        to_signals(&["FP", "RT", "BC", "AO"]),
        to_signals(&["FP", "RT", "BC"]),
        to_signals(&["CD", "QR", "FP", "FP"]),
    ];

    for attempt in &attempts {
        let (decision, trace) = automaton.evaluate_traced(attempt);
        println!(
            "Input: {attempt:?} -> {decision} (visited {} states)",
            trace.path().len()
        );
    }

    println!("\n=== Example Complete ===");
}

fn to_signals(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}
