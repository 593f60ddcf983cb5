//! Zonegate: a deterministic finite automaton engine for zone access control
//!
//! Zonegate grants or denies access to physical zones based on whether a
//! presented sequence of authentication signals exactly matches one of
//! several predefined per-zone sequences. The automaton is built once at
//! startup as an immutable value; evaluation is a pure table walk with no
//! side effects, so one automaton can serve any number of concurrent
//! callers without locking.
//!
//! # Core Concepts
//!
//! - **Signal**: an authentication signal value via the `Signal` trait
//! - **Zone**: an access-controlled zone identifier via the `Zone` trait
//! - **Automaton**: the built, immutable transition table with an
//!   absorbing reject state and accepting-state zone labels
//! - **Decision**: the classification of one input sequence - granted
//!   for a zone, denied, or denied on an invalid signal
//!
//! # Example
//!
//! ```rust
//! use zonegate::{signal_enum, zone_enum, AutomatonBuilder, Decision};
//!
//! signal_enum! {
//!     pub enum AuthSignal {
//!         CD,
//!         PN,
//!         FC,
//!         FP,
//!     }
//! }
//!
//! zone_enum! {
//!     pub enum BuildingZone {
//!         Lobby,
//!     }
//! }
//!
//! let seq = [AuthSignal::CD, AuthSignal::PN, AuthSignal::FC, AuthSignal::FP];
//!
//! let automaton = AutomatonBuilder::new()
//!     .alphabet(seq)
//!     .zone(BuildingZone::Lobby, seq)
//!     .build()
//!     .unwrap();
//!
//! // Only the exact sequence is granted.
//! assert_eq!(
//!     automaton.evaluate(&seq),
//!     Decision::Granted(BuildingZone::Lobby)
//! );
//! assert_eq!(automaton.evaluate(&seq[..3]), Decision::Denied);
//!
//! let mut trailing = seq.to_vec();
//! trailing.push(AuthSignal::CD);
//! assert_eq!(automaton.evaluate(&trailing), Decision::Denied);
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod eval;

// Re-export commonly used types
pub use automaton::Automaton;
pub use builder::{AutomatonBuilder, BuildError};
pub use core::{Alphabet, EvaluationTrace, Signal, StateId, TraceStep, Zone};
pub use eval::Decision;
