use crate::action::ActionLog;
use crate::direction::SortDirection;
use crate::tracer::Tracer;
use crate::Sorter;

/// Classic O(n²) bubble sort.
///
/// Always runs every pass, even on sorted input, so the trace length depends
/// only on the input size and how many swaps it needs.
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn sort<T: Ord + Clone>(&self, data: &[T], direction: SortDirection) -> ActionLog<T> {
        let mut tracer = Tracer::new(data, direction);
        let n = tracer.len();

        for i in 0..n {
            for j in 0..n - i - 1 {
                tracer.compare(j, j + 1);
                // Strict: equal neighbours stay put
                if tracer.precedes(tracer.get(j + 1), tracer.get(j)) {
                    tracer.swap_after(j, j + 1);
                }
            }
        }

        tracer.finish()
    }
}
