//! Automaton state identifiers.
//!
//! States are opaque small-integer indices into the transition table
//! arena. String-keyed state names never appear in the evaluation path.

use serde::{Deserialize, Serialize};

/// Opaque identifier of an automaton state.
///
/// Two indices are fixed for every automaton: [`StateId::START`] is the
/// state evaluation begins in, and [`StateId::REJECT`] is the absorbing
/// sink entered once no zone sequence can still be matched. All other
/// states are allocated during construction, one per unmatched
/// (state, signal) step of a zone sequence.
///
/// # Example
///
/// ```rust
/// use zonegate::core::StateId;
///
/// assert_ne!(StateId::START, StateId::REJECT);
/// assert_eq!(StateId::START.index(), 0);
/// assert_eq!(StateId::REJECT.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// The state every evaluation begins in.
    pub const START: StateId = StateId(0);

    /// The absorbing reject state.
    ///
    /// Every alphabet signal transitions reject back to reject, so once
    /// entered no further input can grant access.
    pub const REJECT: StateId = StateId(1);

    /// Index of this state in the transition table arena.
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_reject_are_distinct() {
        assert_ne!(StateId::START, StateId::REJECT);
    }

    #[test]
    fn fixed_states_have_fixed_indices() {
        assert_eq!(StateId::START.index(), 0);
        assert_eq!(StateId::REJECT.index(), 1);
    }

    #[test]
    fn state_id_serializes_correctly() {
        let state = StateId(7);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_id_is_copyable() {
        let state = StateId(3);
        let copy = state;
        assert_eq!(state, copy);
    }
}
