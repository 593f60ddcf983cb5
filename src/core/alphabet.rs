//! The fixed signal alphabet of an automaton.

use super::signal::Signal;
use serde::{Deserialize, Serialize};

/// The fixed, duplicate-free set of signals an automaton understands.
///
/// Each signal owns one column of the transition table; the column index
/// is the signal's position in the definition order. The alphabet is
/// immutable after construction - any input signal outside it is
/// classified as invalid at evaluation time.
///
/// Lookup is a linear scan. Alphabets are small fixed sets (the reference
/// deployment has eight signals), so scanning beats hashing in the
/// evaluation path and keeps the type trivially serializable.
///
/// # Example
///
/// ```rust
/// use zonegate::AutomatonBuilder;
///
/// let automaton = AutomatonBuilder::new()
///     .alphabet(["CD".to_string(), "PN".to_string()])
///     .zone("LO".to_string(), ["CD".to_string(), "PN".to_string()])
///     .build()
///     .unwrap();
///
/// let alphabet = automaton.alphabet();
/// assert_eq!(alphabet.len(), 2);
/// assert!(alphabet.contains(&"CD".to_string()));
/// assert_eq!(alphabet.index_of(&"PN".to_string()), Some(1));
/// assert_eq!(alphabet.index_of(&"QR".to_string()), None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Alphabet<Y: Signal> {
    symbols: Vec<Y>,
}

impl<Y: Signal> Alphabet<Y> {
    /// Build an alphabet from validated symbols.
    ///
    /// Returns the first duplicated symbol as the error. Emptiness is
    /// checked by the automaton builder before this runs.
    pub(crate) fn from_symbols(symbols: Vec<Y>) -> Result<Self, Y> {
        for (position, symbol) in symbols.iter().enumerate() {
            if symbols[..position].contains(symbol) {
                return Err(symbol.clone());
            }
        }
        Ok(Self { symbols })
    }

    /// Number of signals in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no signals.
    ///
    /// Never true for an alphabet reached through a successful build.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether the signal is part of the alphabet.
    pub fn contains(&self, signal: &Y) -> bool {
        self.symbols.contains(signal)
    }

    /// Column index of the signal, or `None` for invalid signals.
    pub fn index_of(&self, signal: &Y) -> Option<usize> {
        self.symbols.iter().position(|s| s == signal)
    }

    /// The signals in definition order.
    pub fn symbols(&self) -> &[Y] {
        &self.symbols
    }
}
