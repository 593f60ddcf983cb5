//! Smart Building Access Control
//!
//! This example builds the automaton for an eight-zone smart building
//! and evaluates a batch of authentication attempts against it.
//!
//! Key concepts:
//! - Fixed alphabet of eight authentication signals
//! - One exact required sequence per zone
//! - Invalid signals (here: QR) denied with diagnostic detail
//! - Incomplete and over-long attempts denied
//!
//! Run with: cargo run --example building_access

use zonegate::{signal_enum, zone_enum, AutomatonBuilder};

signal_enum! {
    pub enum AuthSignal {
        /// Card swipe
        CD,
        /// Fingerprint scan
        FP,
        /// Retina scan
        RT,
        /// PIN entry
        PN,
        /// Face recognition
        FC,
        /// Voice confirmation
        VC,
        /// Badge tap
        BC,
        /// Authorization override
        AO,
        /// QR code - readable by the hardware, accepted by no zone
        QR,
    }
}

zone_enum! {
    pub enum BuildingZone {
        LO,
        LAB,
        SR,
        EL,
        RW,
        DC,
        MR,
        SO,
    }
}

fn main() {
    use AuthSignal::{AO, BC, CD, FC, FP, PN, QR, RT, VC};
    use BuildingZone::{DC, EL, LAB, LO, MR, RW, SO, SR};

    println!("=== Smart Building Access Control ===\n");

    let automaton = AutomatonBuilder::new()
        .alphabet([CD, FP, RT, PN, FC, VC, BC, AO])
        .zone(LO, [CD, PN, FC, FP])
        .zone(LAB, [CD, FP, RT, PN, FC])
        .zone(SR, [FP, RT, BC, AO])
        .zone(EL, [CD, FC, PN, AO])
        .zone(RW, [VC, FP, RT, PN, BC])
        .zone(DC, [FP, BC, RT, AO])
        .zone(MR, [CD, PN, VC, FP])
        .zone(SO, [AO, FP, RT, PN])
        .build()
        .unwrap();

    println!(
        "Automaton built: {} states over {} signals, {} zones\n",
        automaton.state_count(),
        automaton.alphabet().len(),
        automaton.accepting_states().count()
    );

    let attempts: Vec<Vec<AuthSignal>> = vec![
        vec![CD, PN, FC, FP],     // LO correct
        vec![FP, RT, BC, AO],     // SR correct
        vec![CD, PN, VC, FP],     // MR correct
        vec![CD, PN, FC],         // Incomplete LO
        vec![FP, RT, BC, AO, CD], // Extra after SR
        vec![CD, QR, FP, FP],     // Invalid signal
        vec![AO, FP, RT, PN],     // SO correct
    ];

    for attempt in &attempts {
        println!("Input: {attempt:?} -> {}", automaton.evaluate(attempt));
    }

    println!("\n=== Example Complete ===");
}
