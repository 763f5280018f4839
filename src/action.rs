//! Recorded sort steps and the log that holds them.

use serde::{Deserialize, Serialize};

/// One primitive step of an instrumented sort.
///
/// Serialized with a `type` tag so each step reads
/// `{"type":"swap","positions":[0,1],"values":[1,3]}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action<T> {
    /// Two positions inspected. Never changes the array.
    Compare {
        positions: [usize; 2],
        values: [T; 2],
    },
    /// Two distinct positions exchanged.
    Swap {
        positions: [usize; 2],
        values: [T; 2],
    },
    /// One position overwritten with a value.
    Set {
        positions: [usize; 1],
        values: [T; 1],
    },
}

impl<T> Action<T> {
    pub fn compare(i: usize, j: usize, a: T, b: T) -> Self {
        Action::Compare {
            positions: [i, j],
            values: [a, b],
        }
    }

    pub fn swap(i: usize, j: usize, a: T, b: T) -> Self {
        Action::Swap {
            positions: [i, j],
            values: [a, b],
        }
    }

    pub fn set(k: usize, value: T) -> Self {
        Action::Set {
            positions: [k],
            values: [value],
        }
    }

    pub fn positions(&self) -> &[usize] {
        match self {
            Action::Compare { positions, .. } | Action::Swap { positions, .. } => &positions[..],
            Action::Set { positions, .. } => &positions[..],
        }
    }

    pub fn values(&self) -> &[T] {
        match self {
            Action::Compare { values, .. } | Action::Swap { values, .. } => &values[..],
            Action::Set { values, .. } => &values[..],
        }
    }

    /// Swaps and sets change the array, compares don't
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Action::Compare { .. })
    }
}

impl<T: Clone> Action<T> {
    /// Apply this step to `data`.
    ///
    /// A swap exchanges its two positions without looking at the recorded
    /// values, so replay is exact whichever snapshot the sorter recorded.
    pub fn apply(&self, data: &mut [T]) {
        match self {
            Action::Compare { .. } => {}
            Action::Swap { positions, .. } => data.swap(positions[0], positions[1]),
            Action::Set { positions, values } => data[positions[0]] = values[0].clone(),
        }
    }
}

/// Per-kind totals for a log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCounts {
    pub compares: usize,
    pub swaps: usize,
    pub sets: usize,
}

/// Chronological, append-only sequence of actions from one sort call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLog<T> {
    actions: Vec<Action<T>>,
}

impl<T> Default for ActionLog<T> {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
        }
    }
}

impl<T> ActionLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, action: Action<T>) {
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of steps a client has to play back
    pub fn total_steps(&self) -> usize {
        self.actions.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action<T>> {
        self.actions.iter()
    }

    pub fn as_slice(&self) -> &[Action<T>] {
        &self.actions
    }

    pub fn into_vec(self) -> Vec<Action<T>> {
        self.actions
    }

    pub fn counts(&self) -> ActionCounts {
        let mut counts = ActionCounts::default();
        for action in &self.actions {
            match action {
                Action::Compare { .. } => counts.compares += 1,
                Action::Swap { .. } => counts.swaps += 1,
                Action::Set { .. } => counts.sets += 1,
            }
        }
        counts
    }
}

impl<T: Clone> ActionLog<T> {
    /// Play every step against a copy of `original` and return the result
    pub fn replay(&self, original: &[T]) -> Vec<T> {
        let mut data = original.to_vec();
        for action in &self.actions {
            action.apply(&mut data);
        }
        data
    }
}

impl<'a, T> IntoIterator for &'a ActionLog<T> {
    type Item = &'a Action<T>;
    type IntoIter = std::slice::Iter<'a, Action<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl<T> IntoIterator for ActionLog<T> {
    type Item = Action<T>;
    type IntoIter = std::vec::IntoIter<Action<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}
