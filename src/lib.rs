//! Sort Trace
//!
//! Instrumented sorting algorithms that record every comparison, swap and
//! assignment they perform, so a client can replay the run as an animation.
//! Each sorter works on its own copy of the input and returns the complete
//! action log; the caller's array is never touched.

pub mod action;
pub mod bubble;
pub mod direction;
pub mod error;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod request;
pub mod selection;
mod tracer;

pub use action::{Action, ActionCounts, ActionLog};
pub use direction::SortDirection;
pub use error::TraceError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait for instrumented sorting implementations
pub trait Sorter {
    /// Sort a private copy of `data` in `direction` and return the recorded steps
    fn sort<T: Ord + Clone>(&self, data: &[T], direction: SortDirection) -> ActionLog<T>;
}

/// Which snapshot of the two positions a sorter stores in its `Swap` values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapValues {
    BeforeExchange,
    AfterExchange,
}

/// The available sorters, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Insertion and selection record swaps before exchanging, bubble and
    /// quick after. Merge never swaps.
    ///
    /// Replay only uses swap positions, so this matters only to clients that
    /// display the recorded values.
    pub fn swap_values(self) -> Option<SwapValues> {
        match self {
            Algorithm::Insertion | Algorithm::Selection => Some(SwapValues::BeforeExchange),
            Algorithm::Bubble | Algorithm::Quick => Some(SwapValues::AfterExchange),
            Algorithm::Merge => None,
        }
    }

    pub fn sort<T: Ord + Clone>(self, data: &[T], direction: SortDirection) -> ActionLog<T> {
        let log = match self {
            Algorithm::Bubble => bubble::BubbleSort.sort(data, direction),
            Algorithm::Insertion => insertion::InsertionSort.sort(data, direction),
            Algorithm::Selection => selection::SelectionSort.sort(data, direction),
            Algorithm::Merge => merge::MergeSort.sort(data, direction),
            Algorithm::Quick => quick::QuickSort.sort(data, direction),
        };
        tracing::debug!(
            algorithm = self.name(),
            %direction,
            len = data.len(),
            steps = log.total_steps(),
            "traced sort"
        );
        log
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| TraceError::UnknownAlgorithm(s.to_string()))
    }
}

/// A finished trace: the log plus what replaying it produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace<T> {
    pub algorithm: Algorithm,
    pub direction: SortDirection,
    pub actions: ActionLog<T>,
    pub total_steps: usize,
    pub final_array: Vec<T>,
}

/// Run `algorithm` over `data` and bundle the result
pub fn trace<T: Ord + Clone>(
    algorithm: Algorithm,
    data: &[T],
    direction: SortDirection,
) -> Trace<T> {
    let actions = algorithm.sort(data, direction);
    let final_array = actions.replay(data);
    Trace {
        algorithm,
        direction,
        total_steps: actions.total_steps(),
        actions,
        final_array,
    }
}
