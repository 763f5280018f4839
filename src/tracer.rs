use crate::action::{Action, ActionLog};
use crate::direction::SortDirection;

/// A sorter's private working copy plus the log it appends to.
///
/// Every mutation of the working array goes through this type, which keeps
/// the log replayable: a recorded swap or set always matches what happened
/// to `data`.
pub(crate) struct Tracer<T> {
    data: Vec<T>,
    log: ActionLog<T>,
    direction: SortDirection,
}

impl<T: Ord + Clone> Tracer<T> {
    pub(crate) fn new(input: &[T], direction: SortDirection) -> Self {
        Self {
            data: input.to_vec(),
            log: ActionLog::new(),
            direction,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> &T {
        &self.data[index]
    }

    pub(crate) fn slice(&self, lo: usize, hi: usize) -> Vec<T> {
        self.data[lo..hi].to_vec()
    }

    /// Strict "belongs before" under this call's direction
    #[inline]
    pub(crate) fn precedes(&self, a: &T, b: &T) -> bool {
        self.direction.precedes(a, b)
    }

    pub(crate) fn compare(&mut self, i: usize, j: usize) {
        let (a, b) = (self.data[i].clone(), self.data[j].clone());
        self.log.push(Action::compare(i, j, a, b));
    }

    /// Exchange then record the post-swap contents
    pub(crate) fn swap_after(&mut self, i: usize, j: usize) {
        debug_assert_ne!(i, j);
        self.data.swap(i, j);
        self.record_swap(i, j);
    }

    /// Record the pre-swap contents then exchange
    pub(crate) fn swap_before(&mut self, i: usize, j: usize) {
        debug_assert_ne!(i, j);
        self.record_swap(i, j);
        self.data.swap(i, j);
    }

    fn record_swap(&mut self, i: usize, j: usize) {
        let (a, b) = (self.data[i].clone(), self.data[j].clone());
        self.log.push(Action::swap(i, j, a, b));
    }

    /// Write `value` at `k`, logging only when the slot actually changes
    pub(crate) fn set(&mut self, k: usize, value: T) {
        if self.data[k] != value {
            self.log.push(Action::set(k, value.clone()));
        }
        self.data[k] = value;
    }

    pub(crate) fn finish(self) -> ActionLog<T> {
        debug_assert!(self.direction.is_sorted(&self.data));
        self.log
    }
}
