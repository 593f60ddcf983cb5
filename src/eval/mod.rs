//! Evaluation of input sequences against a built automaton.
//!
//! Evaluation is pure and synchronous: one table walk per input signal,
//! no allocation on the untraced path, and a [`Decision`] for every
//! input. Classification never fails - an invalid signal is a decision,
//! not an error.

use crate::automaton::Automaton;
use crate::core::{EvaluationTrace, Signal, StateId, TraceStep, Zone};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of evaluating one input sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Decision<Z: Zone> {
    /// The input exactly matched the zone's required sequence.
    Granted(Z),

    /// The input ended in a non-accepting state, or entered the
    /// absorbing reject state along the way.
    Denied,

    /// The input presented a signal outside the alphabet. Evaluation
    /// halted at `position` without consuming further signals.
    InvalidSignal { signal: String, position: usize },
}

impl<Z: Zone> Decision<Z> {
    /// Whether access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    /// The granted zone, if any.
    pub fn zone(&self) -> Option<&Z> {
        match self {
            Self::Granted(zone) => Some(zone),
            _ => None,
        }
    }
}

impl<Z: Zone> fmt::Display for Decision<Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted(zone) => write!(f, "Access Granted: {}", zone.id()),
            Self::Denied => write!(f, "Access Denied"),
            Self::InvalidSignal { signal, position } => {
                write!(
                    f,
                    "Access Denied (Invalid symbol '{signal}' at position {position})"
                )
            }
        }
    }
}

impl<Y: Signal, Z: Zone> Automaton<Y, Z> {
    /// Evaluate an input sequence to a [`Decision`].
    ///
    /// Walks the transition table from the start state, one signal at a
    /// time. A signal outside the alphabet halts immediately with
    /// [`Decision::InvalidSignal`]; entering the reject state halts with
    /// [`Decision::Denied`] (reject is absorbing, so this is observably
    /// identical to consuming the rest of the input). An exhausted input
    /// is granted iff its final state is accepting.
    ///
    /// The empty input is denied: the start state is never accepting
    /// since every zone sequence has at least one signal.
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
    /// assert_eq!(automaton.evaluate(&[cd()]), Decision::Denied);
    /// assert_eq!(automaton.evaluate(&[]), Decision::Denied);
    /// ```
    pub fn evaluate(&self, input: &[Y]) -> Decision<Z> {
        let mut current = StateId::START;
        for (position, signal) in input.iter().enumerate() {
            let Some(column) = self.alphabet().index_of(signal) else {
                return Decision::InvalidSignal {
                    signal: signal.code().to_string(),
                    position,
                };
            };
            current = self.step(current, column);
            if current == StateId::REJECT {
                return Decision::Denied;
            }
        }
        match self.zone_for(current) {
            Some(zone) => Decision::Granted(zone.clone()),
            None => Decision::Denied,
        }
    }

    /// Evaluate an input sequence, recording every step taken.
    ///
    /// Same classification as [`evaluate`](Automaton::evaluate), paired
    /// with the immutable [`EvaluationTrace`] of the walk. Early halts
    /// leave the trace truncated at the halt point: an invalid signal
    /// records no step for itself, and a rejected input's last step is
    /// the one that entered reject.
    pub fn evaluate_traced(&self, input: &[Y]) -> (Decision<Z>, EvaluationTrace<Y>) {
        let mut trace = EvaluationTrace::new();
        let mut current = StateId::START;
        for (position, signal) in input.iter().enumerate() {
            let Some(column) = self.alphabet().index_of(signal) else {
                return (
                    Decision::InvalidSignal {
                        signal: signal.code().to_string(),
                        position,
                    },
                    trace,
                );
            };
            let next = self.step(current, column);
            trace = trace.record(TraceStep {
                from: current,
                signal: signal.clone(),
                to: next,
                timestamp: Utc::now(),
            });
            current = next;
            if current == StateId::REJECT {
                return (Decision::Denied, trace);
            }
        }
        let decision = match self.zone_for(current) {
            Some(zone) => Decision::Granted(zone.clone()),
            None => Decision::Denied,
        };
        (decision, trace)
    }
}
