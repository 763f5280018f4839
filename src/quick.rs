use crate::action::ActionLog;
use crate::direction::SortDirection;
use crate::tracer::Tracer;
use crate::Sorter;

/// Lomuto-partition quicksort with the rightmost element as pivot.
///
/// Elements equal to the pivot go to its left. Swaps record post-swap
/// values and are skipped when both positions coincide.
pub struct QuickSort;

impl Sorter for QuickSort {
    fn sort<T: Ord + Clone>(&self, data: &[T], direction: SortDirection) -> ActionLog<T> {
        let mut tracer = Tracer::new(data, direction);
        if tracer.len() > 1 {
            let hi = tracer.len() - 1;
            quick_sort(&mut tracer, 0, hi);
        }
        tracer.finish()
    }
}

/// Sort the inclusive range `lo..=hi`
fn quick_sort<T: Ord + Clone>(tracer: &mut Tracer<T>, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }

    let pivot = partition(tracer, lo, hi);
    if pivot > lo {
        quick_sort(tracer, lo, pivot - 1);
    }
    quick_sort(tracer, pivot + 1, hi);
}

/// Returns the pivot's final index
fn partition<T: Ord + Clone>(tracer: &mut Tracer<T>, lo: usize, hi: usize) -> usize {
    // Next slot for an element that belongs left of the pivot
    let mut store = lo;

    // The pivot stays at `hi` until the final swap
    for j in lo..hi {
        tracer.compare(j, hi);
        if !tracer.precedes(tracer.get(hi), tracer.get(j)) {
            if store != j {
                tracer.swap_after(store, j);
            }
            store += 1;
        }
    }

    if store != hi {
        tracer.swap_after(store, hi);
    }
    store
}
