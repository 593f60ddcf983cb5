//! Builder API for automaton construction.
//!
//! This module provides the fluent builder that turns zone definitions
//! into an immutable [`Automaton`], plus macros for declaring signal and
//! zone enums with minimal boilerplate.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::automaton::Automaton;
use crate::core::{Alphabet, Signal, StateId, Zone};
use std::collections::HashMap;

/// Builder for constructing automatons with a fluent API.
///
/// Collects the alphabet and the per-zone required sequences, then
/// `build()` validates everything and produces the immutable automaton.
/// Construction runs once at startup; evaluation holds the result
/// read-only for the rest of the process.
///
/// # Example
///
/// ```rust
/// use zonegate::{AutomatonBuilder, Decision};
///
/// let cd = || "CD".to_string();
/// let pn = || "PN".to_string();
///
/// let automaton = AutomatonBuilder::new()
///     .alphabet([cd(), pn()])
///     .zone("LO".to_string(), [cd(), pn()])
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     automaton.evaluate(&[cd(), pn()]),
///     Decision::Granted("LO".to_string())
/// );
/// ```
pub struct AutomatonBuilder<Y: Signal, Z: Zone> {
    alphabet: Option<Vec<Y>>,
    zones: Vec<(Z, Vec<Y>)>,
}

impl<Y: Signal, Z: Zone> AutomatonBuilder<Y, Z> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            alphabet: None,
            zones: Vec::new(),
        }
    }

    /// Set the signal alphabet (required).
    pub fn alphabet<I>(mut self, signals: I) -> Self
    where
        I: IntoIterator<Item = Y>,
    {
        self.alphabet = Some(signals.into_iter().collect());
        self
    }

    /// Add a zone and its required signal sequence.
    pub fn zone<I>(mut self, zone: Z, sequence: I) -> Self
    where
        I: IntoIterator<Item = Y>,
    {
        self.zones.push((zone, sequence.into_iter().collect()));
        self
    }

    /// Add multiple zone definitions at once.
    pub fn zones<I>(mut self, definitions: I) -> Self
    where
        I: IntoIterator<Item = (Z, Vec<Y>)>,
    {
        self.zones.extend(definitions);
        self
    }

    /// Build the automaton.
    ///
    /// Walks each zone's sequence from the start state, reusing shared
    /// prefixes and allocating a fresh state per unmatched step, then
    /// labels each terminal state with its zone. Rows are allocated
    /// fully pointing at reject, which makes the table total and the
    /// reject state absorbing without a backfill pass.
    ///
    /// Returns an error if required fields are missing or a zone
    /// definition is invalid; no partial automaton is ever returned.
    pub fn build(self) -> Result<Automaton<Y, Z>, BuildError> {
        let symbols = self.alphabet.ok_or(BuildError::MissingAlphabet)?;
        if symbols.is_empty() {
            return Err(BuildError::EmptyAlphabet);
        }
        let alphabet = Alphabet::from_symbols(symbols).map_err(|duplicate| {
            BuildError::DuplicateAlphabetSymbol {
                symbol: duplicate.code().to_string(),
            }
        })?;
        if self.zones.is_empty() {
            return Err(BuildError::NoZones);
        }

        let width = alphabet.len();
        let mut table = vec![vec![StateId::REJECT; width]; 2];
        let mut accepting: HashMap<StateId, Z> = HashMap::new();

        for (zone, sequence) in self.zones {
            if accepting.values().any(|registered| *registered == zone) {
                return Err(BuildError::DuplicateZone {
                    zone: zone.id().to_string(),
                });
            }
            if sequence.is_empty() {
                return Err(BuildError::EmptySequence {
                    zone: zone.id().to_string(),
                });
            }

            let mut current = StateId::START;
            for signal in &sequence {
                let column =
                    alphabet
                        .index_of(signal)
                        .ok_or_else(|| BuildError::UnknownSymbol {
                            zone: zone.id().to_string(),
                            symbol: signal.code().to_string(),
                        })?;

                // No explicit transition ever targets reject, so a reject
                // entry means the step is still unwritten.
                let next = table[current.index()][column];
                current = if next == StateId::REJECT {
                    let fresh = StateId(table.len());
                    table.push(vec![StateId::REJECT; width]);
                    table[current.index()][column] = fresh;
                    fresh
                } else {
                    next
                };
            }

            if let Some(existing) = accepting.get(&current) {
                return Err(BuildError::DuplicateSequence {
                    zone: zone.id().to_string(),
                    existing: existing.id().to_string(),
                });
            }
            accepting.insert(current, zone);
        }

        let automaton = Automaton::from_parts(alphabet, table, accepting);
        debug_assert!(automaton.is_well_formed());
        Ok(automaton)
    }
}

impl<Y: Signal, Z: Zone> Default for AutomatonBuilder<Y, Z> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn builder_requires_alphabet() {
        let result = AutomatonBuilder::<String, String>::new().build();
        assert_eq!(result.unwrap_err(), BuildError::MissingAlphabet);
    }

    #[test]
    fn builder_rejects_empty_alphabet() {
        let result = AutomatonBuilder::<String, String>::new()
            .alphabet([])
            .build();
        assert_eq!(result.unwrap_err(), BuildError::EmptyAlphabet);
    }

    #[test]
    fn builder_rejects_duplicate_alphabet_symbols() {
        let result = AutomatonBuilder::<String, String>::new()
            .alphabet(letters(&["CD", "FP", "CD"]))
            .zone("LO".to_string(), letters(&["CD"]))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateAlphabetSymbol {
                symbol: "CD".to_string()
            }
        );
    }

    #[test]
    fn builder_requires_zones() {
        let result = AutomatonBuilder::<String, String>::new()
            .alphabet(letters(&["CD"]))
            .build();
        assert_eq!(result.unwrap_err(), BuildError::NoZones);
    }

    #[test]
    fn builder_rejects_duplicate_zone_definitions() {
        let result = AutomatonBuilder::new()
            .alphabet(letters(&["CD", "FP"]))
            .zone("LO".to_string(), letters(&["CD"]))
            .zone("LO".to_string(), letters(&["FP"]))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateZone {
                zone: "LO".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_empty_sequence() {
        let result = AutomatonBuilder::new()
            .alphabet(letters(&["CD"]))
            .zone("LO".to_string(), [])
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::EmptySequence {
                zone: "LO".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_sequence_symbol_outside_alphabet() {
        let result = AutomatonBuilder::new()
            .alphabet(letters(&["CD", "FP"]))
            .zone("LO".to_string(), letters(&["CD", "QR"]))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::UnknownSymbol {
                zone: "LO".to_string(),
                symbol: "QR".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_duplicate_sequences() {
        let result = AutomatonBuilder::new()
            .alphabet(letters(&["CD", "PN"]))
            .zone("LO".to_string(), letters(&["CD", "PN"]))
            .zone("EL".to_string(), letters(&["CD", "PN"]))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateSequence {
                zone: "EL".to_string(),
                existing: "LO".to_string()
            }
        );
    }

    #[test]
    fn shared_prefixes_reuse_states() {
        // LO and MR agree on their first two steps; only the tails
        // allocate separate states: 2 fixed + 2 shared + 2 + 2.
        let automaton = AutomatonBuilder::new()
            .alphabet(letters(&["CD", "PN", "FC", "VC", "FP"]))
            .zone("LO".to_string(), letters(&["CD", "PN", "FC", "FP"]))
            .zone("MR".to_string(), letters(&["CD", "PN", "VC", "FP"]))
            .build()
            .unwrap();

        assert_eq!(automaton.state_count(), 8);
        assert!(automaton.is_well_formed());
    }

    #[test]
    fn disjoint_sequences_share_nothing() {
        let automaton = AutomatonBuilder::new()
            .alphabet(letters(&["CD", "PN", "FP", "RT"]))
            .zone("LO".to_string(), letters(&["CD", "PN"]))
            .zone("SR".to_string(), letters(&["FP", "RT"]))
            .build()
            .unwrap();

        assert_eq!(automaton.state_count(), 6);
    }

    #[test]
    fn zone_may_be_prefix_of_another() {
        let automaton = AutomatonBuilder::new()
            .alphabet(letters(&["CD", "FP"]))
            .zone("LO".to_string(), letters(&["CD"]))
            .zone("LAB".to_string(), letters(&["CD", "FP"]))
            .build()
            .unwrap();

        // The LO terminal sits on the path to LAB and keeps its label.
        let lo_terminal = automaton
            .transition(StateId::START, &"CD".to_string())
            .unwrap();
        assert_eq!(automaton.zone_for(lo_terminal), Some(&"LO".to_string()));

        let lab_terminal = automaton
            .transition(lo_terminal, &"FP".to_string())
            .unwrap();
        assert_eq!(automaton.zone_for(lab_terminal), Some(&"LAB".to_string()));
    }

    #[test]
    fn zones_helper_adds_definitions_in_order() {
        let automaton = AutomatonBuilder::new()
            .alphabet(letters(&["CD", "FP"]))
            .zones(vec![
                ("LO".to_string(), letters(&["CD"])),
                ("SR".to_string(), letters(&["FP"])),
            ])
            .build()
            .unwrap();

        assert_eq!(automaton.accepting_states().count(), 2);
    }

    #[test]
    fn error_messages_name_the_offender() {
        let error = BuildError::UnknownSymbol {
            zone: "LO".to_string(),
            symbol: "QR".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("LO"));
        assert!(message.contains("QR"));
    }
}
