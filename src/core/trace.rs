//! Evaluation trace tracking.
//!
//! Provides immutable records of the states an evaluation walked through,
//! following functional programming principles. Access-control callers
//! keep traces as the audit record of an attempt.

use super::signal::Signal;
use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single evaluation step.
///
/// Steps are immutable values representing one consumed signal and the
/// transition it caused.
///
/// # Example
///
/// ```rust
/// use zonegate::core::{StateId, TraceStep};
/// use chrono::Utc;
///
/// let step = TraceStep {
///     from: StateId::START,
///     signal: "CD".to_string(),
///     to: StateId::REJECT,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(step.from, StateId::START);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TraceStep<Y: Signal> {
    /// The state the step left
    pub from: StateId,
    /// The signal consumed by the step
    pub signal: Y,
    /// The state the step entered
    pub to: StateId,
    /// When the step was taken
    pub timestamp: DateTime<Utc>,
}

/// Ordered trace of one evaluation.
///
/// Traces are immutable - the `record` method returns a new trace with
/// the step added, following functional programming principles. An
/// evaluation that halts early (invalid signal, or entering the
/// absorbing reject state) leaves the trace truncated at the halt point.
///
/// # Example
///
/// ```rust
/// use zonegate::core::{EvaluationTrace, StateId, TraceStep};
/// use chrono::Utc;
///
/// let trace = EvaluationTrace::new();
///
/// let trace = trace.record(TraceStep {
///     from: StateId::START,
///     signal: "CD".to_string(),
///     to: StateId::REJECT,
///     timestamp: Utc::now(),
/// });
///
/// let path = trace.path();
/// assert_eq!(path, vec![StateId::START, StateId::REJECT]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EvaluationTrace<Y: Signal> {
    steps: Vec<TraceStep<Y>>,
}

impl<Y: Signal> Default for EvaluationTrace<Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Y: Signal> EvaluationTrace<Y> {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new trace.
    ///
    /// This is a pure function - it does not mutate the existing trace
    /// but returns a new one with the step added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zonegate::core::{EvaluationTrace, StateId, TraceStep};
    /// use chrono::Utc;
    ///
    /// let trace = EvaluationTrace::new();
    /// let step = TraceStep {
    ///     from: StateId::START,
    ///     signal: "FP".to_string(),
    ///     to: StateId::REJECT,
    ///     timestamp: Utc::now(),
    /// };
    ///
    /// let new_trace = trace.record(step);
    /// assert_eq!(new_trace.steps().len(), 1);
    /// assert_eq!(trace.steps().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, step: TraceStep<Y>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Get the path of states visited.
    ///
    /// Returns states in order: the state the evaluation started in,
    /// then the destination of each step. Empty for an empty trace.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(first.from);
        }
        for step in &self.steps {
            path.push(step.to);
        }
        path
    }

    /// Calculate total duration from first to last step.
    ///
    /// Returns `None` if there are no steps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all steps.
    ///
    /// Returns a slice of all recorded steps in order.
    pub fn steps(&self) -> &[TraceStep<Y>] {
        &self.steps
    }
}
