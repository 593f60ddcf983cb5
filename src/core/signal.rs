//! Core Signal trait for authentication signals.
//!
//! Every symbol presented to the automaton must implement this trait,
//! which provides pure methods for inspecting the signal without side
//! effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for authentication signal values.
///
/// Signals are the alphabet symbols of the automaton. A signal *type* may
/// carry more values than any particular alphabet admits: values outside
/// the alphabet are ordinary values of the type and are classified as
/// invalid at evaluation time, never at compile time.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: signals are stored in sequences and traces
/// - `Eq` + `Hash`: signals are compared and indexed by the alphabet
/// - `Debug`: signals must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: signals must be serializable so that
///   automatons and traces can be serialized
///
/// # Example
///
/// ```rust
/// use zonegate::core::Signal;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum AuthSignal {
///     Card,
///     Fingerprint,
///     Pin,
/// }
///
/// impl Signal for AuthSignal {
///     fn code(&self) -> &str {
///         match self {
///             Self::Card => "Card",
///             Self::Fingerprint => "Fingerprint",
///             Self::Pin => "Pin",
///         }
///     }
/// }
/// ```
pub trait Signal:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the signal's code for display/logging.
    ///
    /// Returns a string reference for zero-cost naming.
    fn code(&self) -> &str;
}

/// Dynamically keyed deployments can use plain strings as signals.
///
/// # Example
///
/// ```rust
/// use zonegate::core::Signal;
///
/// let signal = String::from("CD");
/// assert_eq!(signal.code(), "CD");
/// ```
impl Signal for String {
    fn code(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestSignal {
        Card,
        Pin,
    }

    impl Signal for TestSignal {
        fn code(&self) -> &str {
            match self {
                Self::Card => "Card",
                Self::Pin => "Pin",
            }
        }
    }

    #[test]
    fn code_returns_correct_value() {
        assert_eq!(TestSignal::Card.code(), "Card");
        assert_eq!(TestSignal::Pin.code(), "Pin");
    }

    #[test]
    fn string_signals_are_their_own_code() {
        let signal = String::from("FP");
        assert_eq!(signal.code(), "FP");
    }

    #[test]
    fn signal_serializes_correctly() {
        let signal = TestSignal::Card;
        let json = serde_json::to_string(&signal).unwrap();
        let deserialized: TestSignal = serde_json::from_str(&json).unwrap();
        assert_eq!(signal, deserialized);
    }

    #[test]
    fn signal_is_comparable() {
        assert_eq!(TestSignal::Card, TestSignal::Card);
        assert_ne!(TestSignal::Card, TestSignal::Pin);
    }
}
