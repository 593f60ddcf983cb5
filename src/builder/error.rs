//! Build errors for automaton construction.

use thiserror::Error;

/// Errors that can occur when building an automaton.
///
/// All variants are fatal to construction: `build()` returns the error
/// and no partial automaton is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Alphabet not specified. Call .alphabet(signals) before .build()")]
    MissingAlphabet,

    #[error("Alphabet is empty. Define at least one signal")]
    EmptyAlphabet,

    #[error("Signal '{symbol}' appears more than once in the alphabet")]
    DuplicateAlphabetSymbol { symbol: String },

    #[error("No zones defined. Add at least one zone sequence")]
    NoZones,

    #[error("Zone '{zone}' is defined more than once")]
    DuplicateZone { zone: String },

    #[error("Zone '{zone}' has an empty required sequence")]
    EmptySequence { zone: String },

    #[error("Zone '{zone}' requires signal '{symbol}' which is outside the alphabet")]
    UnknownSymbol { zone: String, symbol: String },

    #[error("Zone '{zone}' repeats the exact sequence already registered for zone '{existing}'")]
    DuplicateSequence { zone: String, existing: String },
}
