//! Bounded log of state transitions.
//!
//! The controller appends one record per transition. Only the most recent
//! records are retained so a long-running driver loop does not grow memory.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use motorstate::core::{MotorState, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: MotorState::Idle,
///     to: MotorState::Running,
///     tick: 2,
///     speed: 20,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, MotorState::Running);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Tick number (1-based) on which the transition happened
    pub tick: u64,
    /// Speed observed by the update rule that requested the transition
    pub speed: i32,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Most recent transitions, oldest first.
///
/// # Example
///
/// ```rust
/// use motorstate::core::{MotorState, TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = TransitionHistory::with_capacity(2);
/// for (tick, (from, to)) in [
///     (MotorState::Idle, MotorState::Running),
///     (MotorState::Running, MotorState::Error),
/// ]
/// .into_iter()
/// .enumerate()
/// {
///     history.record(TransitionRecord {
///         from,
///         to,
///         tick: tick as u64 + 1,
///         speed: 0,
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(
///     history.path(),
///     vec![MotorState::Idle, MotorState::Running, MotorState::Error]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", from = "RawHistory<S>")]
pub struct TransitionHistory<S: State> {
    capacity: usize,
    records: VecDeque<TransitionRecord<S>>,
}

/// Unchecked wire form; converted through `with_capacity` on load.
#[derive(Deserialize)]
#[serde(bound = "")]
struct RawHistory<S: State> {
    capacity: usize,
    records: VecDeque<TransitionRecord<S>>,
}

impl<S: State> From<RawHistory<S>> for TransitionHistory<S> {
    fn from(raw: RawHistory<S>) -> Self {
        let mut history = Self::with_capacity(raw.capacity);
        for record in raw.records {
            history.record(record);
        }
        history
    }
}

impl<S: State> TransitionHistory<S> {
    /// Create an empty history that keeps at most `capacity` records.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: TransitionRecord<S>) {
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &TransitionRecord<S>> {
        self.records.iter()
    }

    /// Most recent record, if any.
    pub fn last(&self) -> Option<&TransitionRecord<S>> {
        self.records.back()
    }

    /// States traversed: the source of the oldest retained record, then the
    /// target of every record.
    pub fn path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Maximum number of records retained; always at least one.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records currently retained.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no transition has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
