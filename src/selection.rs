use crate::action::ActionLog;
use crate::direction::SortDirection;
use crate::tracer::Tracer;
use crate::Sorter;

/// Selection sort.
///
/// Compares always pair the current best index with the scan index, so the
/// left position moves whenever a new best is found. The single swap per
/// pass records the pre-swap values and is skipped when the best is already
/// in place.
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn sort<T: Ord + Clone>(&self, data: &[T], direction: SortDirection) -> ActionLog<T> {
        let mut tracer = Tracer::new(data, direction);
        let n = tracer.len();

        for i in 0..n {
            let mut best = i;

            for j in i + 1..n {
                tracer.compare(best, j);
                if tracer.precedes(tracer.get(j), tracer.get(best)) {
                    best = j;
                }
            }

            if best != i {
                tracer.swap_before(i, best);
            }
        }

        tracer.finish()
    }
}
