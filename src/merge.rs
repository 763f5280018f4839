use crate::action::ActionLog;
use crate::direction::SortDirection;
use crate::tracer::Tracer;
use crate::Sorter;

/// Top-down merge sort.
///
/// Merging compares values held in temporary buffers rather than live array
/// positions, so this sorter emits no compares at all. Only writes that
/// actually change a slot show up, as `Set` actions.
pub struct MergeSort;

impl Sorter for MergeSort {
    fn sort<T: Ord + Clone>(&self, data: &[T], direction: SortDirection) -> ActionLog<T> {
        let mut tracer = Tracer::new(data, direction);
        if tracer.len() > 1 {
            let hi = tracer.len() - 1;
            merge_sort(&mut tracer, 0, hi);
        }
        tracer.finish()
    }
}

/// Sort the inclusive range `lo..=hi`
fn merge_sort<T: Ord + Clone>(tracer: &mut Tracer<T>, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    merge_sort(tracer, lo, mid);
    merge_sort(tracer, mid + 1, hi);
    merge(tracer, lo, mid, hi);
}

fn merge<T: Ord + Clone>(tracer: &mut Tracer<T>, lo: usize, mid: usize, hi: usize) {
    let left = tracer.slice(lo, mid + 1);
    let right = tracer.slice(mid + 1, hi + 1);

    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        // Left wins ties, which keeps equal keys in input order
        if !tracer.precedes(&right[j], &left[i]) {
            tracer.set(k, left[i].clone());
            i += 1;
        } else {
            tracer.set(k, right[j].clone());
            j += 1;
        }
        k += 1;
    }

    for value in left[i..].iter().chain(&right[j..]) {
        tracer.set(k, value.clone());
        k += 1;
    }
}
