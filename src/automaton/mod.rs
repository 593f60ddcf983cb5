//! The built, immutable automaton value.
//!
//! An [`Automaton`] is the output of a successful
//! [`AutomatonBuilder::build`](crate::builder::AutomatonBuilder::build):
//! the dense transition table, the state arena, and the accepting-state
//! labels, packaged as one read-only value. Callers hold it explicitly
//! and may share it freely - every method takes `&self`, so concurrent
//! evaluations need no locking.

use crate::core::{Alphabet, Signal, StateId, Zone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A deterministic finite automaton over a fixed signal alphabet.
///
/// The transition table is *total by construction*: every state row is
/// allocated fully pointing at [`StateId::REJECT`] and individual entries
/// are overwritten as zone sequences are walked, so every (state, signal)
/// pair has exactly one successor and the reject row - never overwritten -
/// is absorbing. [`is_well_formed`](Automaton::is_well_formed) re-checks
/// both invariants as an explicit postcondition.
///
/// Accepting states carry the zone their full sequence grants, as a
/// sparse map from state index to zone; a state is accepting iff it
/// appears in the map.
///
/// # Example
///
/// ```rust
/// use zonegate::{AutomatonBuilder, StateId};
///
/// let automaton = AutomatonBuilder::new()
///     .alphabet(["CD".to_string(), "PN".to_string()])
///     .zone("LO".to_string(), ["CD".to_string(), "PN".to_string()])
///     .build()
///     .unwrap();
///
/// // start, reject, and one state per sequence step
/// assert_eq!(automaton.state_count(), 4);
/// assert!(automaton.is_well_formed());
///
/// // the first signal of the sequence leaves the start state
/// let next = automaton
///     .transition(StateId::START, &"CD".to_string())
///     .unwrap();
/// assert_ne!(next, StateId::REJECT);
///
/// // anything else falls into the absorbing reject state
/// let rejected = automaton
///     .transition(StateId::START, &"PN".to_string())
///     .unwrap();
/// assert_eq!(rejected, StateId::REJECT);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Automaton<Y: Signal, Z: Zone> {
    alphabet: Alphabet<Y>,
    table: Vec<Vec<StateId>>,
    accepting: HashMap<StateId, Z>,
}

impl<Y: Signal, Z: Zone> Automaton<Y, Z> {
    /// Assemble the value the builder produced.
    pub(crate) fn from_parts(
        alphabet: Alphabet<Y>,
        table: Vec<Vec<StateId>>,
        accepting: HashMap<StateId, Z>,
    ) -> Self {
        Self {
            alphabet,
            table,
            accepting,
        }
    }

    /// The alphabet this automaton was built over.
    pub fn alphabet(&self) -> &Alphabet<Y> {
        &self.alphabet
    }

    /// The state evaluation begins in.
    pub fn start_state(&self) -> StateId {
        StateId::START
    }

    /// The absorbing reject state.
    pub fn reject_state(&self) -> StateId {
        StateId::REJECT
    }

    /// Number of states in the arena, reject included.
    pub fn state_count(&self) -> usize {
        self.table.len()
    }

    /// All states in the arena.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.table.len()).map(StateId)
    }

    /// Successor of `from` on `signal`.
    ///
    /// Returns `None` when the signal is outside the alphabet or the
    /// state belongs to a different automaton's arena. For in-range
    /// arguments the table is total, so a successor always exists.
    pub fn transition(&self, from: StateId, signal: &Y) -> Option<StateId> {
        let column = self.alphabet.index_of(signal)?;
        self.table.get(from.index()).map(|row| row[column])
    }

    /// Table lookup on a pre-resolved column. Evaluation hot path.
    pub(crate) fn step(&self, from: StateId, column: usize) -> StateId {
        self.table[from.index()][column]
    }

    /// Whether the state terminates some zone's full sequence.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains_key(&state)
    }

    /// The zone granted at this state, if it is accepting.
    pub fn zone_for(&self, state: StateId) -> Option<&Z> {
        self.accepting.get(&state)
    }

    /// Zones and their accepting states.
    pub fn accepting_states(&self) -> impl Iterator<Item = (StateId, &Z)> {
        self.accepting.iter().map(|(state, zone)| (*state, zone))
    }

    /// Explicit postcondition check over the construction invariants.
    ///
    /// Verifies that the table is total (every row spans the alphabet and
    /// every entry stays inside the arena), that the reject row is
    /// absorbing, and that neither start nor reject is accepting. Holds
    /// for every automaton a builder returns; exposed so tests and
    /// deserialized values can assert it.
    pub fn is_well_formed(&self) -> bool {
        let width = self.alphabet.len();
        let states = self.table.len();

        let total = self
            .table
            .iter()
            .all(|row| row.len() == width && row.iter().all(|s| s.index() < states));

        let absorbing = self
            .table
            .get(StateId::REJECT.index())
            .is_some_and(|row| row.iter().all(|s| *s == StateId::REJECT));

        let labels_valid = self.accepting.keys().all(|s| {
            s.index() < states && *s != StateId::START && *s != StateId::REJECT
        });

        total && absorbing && labels_valid
    }
}
