use crate::action::ActionLog;
use crate::direction::SortDirection;
use crate::tracer::Tracer;
use crate::Sorter;

/// Insertion sort by adjacent exchanges.
///
/// Each swap is recorded with the values as they were *before* the exchange.
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn sort<T: Ord + Clone>(&self, data: &[T], direction: SortDirection) -> ActionLog<T> {
        let mut tracer = Tracer::new(data, direction);

        for i in 1..tracer.len() {
            let mut j = i;
            // j is one past the left index of the pair under inspection
            while j > 0 {
                tracer.compare(j - 1, j);
                if !tracer.precedes(tracer.get(j), tracer.get(j - 1)) {
                    break;
                }
                tracer.swap_before(j - 1, j);
                j -= 1;
            }
        }

        tracer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_pre_swap_values() {
        let log = InsertionSort.sort(&[2, 1], SortDirection::Ascending);
        assert_eq!(
            log.as_slice(),
            &[Action::compare(0, 1, 2, 1), Action::swap(0, 1, 2, 1)]
        );
    }

    #[test]
    fn test_stops_at_first_ordered_pair() {
        // Already sorted: exactly one comparison per outer step
        let log = InsertionSort.sort(&[1, 2, 3, 4], SortDirection::Ascending);
        assert_eq!(log.len(), 3);
        assert_eq!(log.counts().swaps, 0);
    }

    #[test]
    fn test_walks_back_to_front() {
        let data = [2, 3, 1];
        let log = InsertionSort.sort(&data, SortDirection::Ascending);
        let positions: Vec<Vec<usize>> = log.iter().map(|a| a.positions().to_vec()).collect();
        assert_eq!(
            positions,
            vec![vec![0, 1], vec![1, 2], vec![1, 2], vec![0, 1], vec![0, 1]]
        );
        assert_eq!(log.replay(&data), vec![1, 2, 3]);
    }

    #[test]
    fn test_descending() {
        let data = [1, 2, 3];
        let log = InsertionSort.sort(&data, SortDirection::Descending);
        assert_eq!(log.replay(&data), vec![3, 2, 1]);
    }

    #[test]
    fn test_equal_values_never_move() {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let log = InsertionSort.sort(&[5, 5, 5], direction);
            assert_eq!(log.counts().swaps, 0);
            assert_eq!(log.counts().compares, 2);
        }
    }

    #[test]
    fn test_duplicates_ascending() {
        let log = InsertionSort.sort(&[2, 1, 2], SortDirection::Ascending);
        assert_eq!(
            log.into_vec(),
            vec![
                Action::compare(0, 1, 2, 1),
                Action::swap(0, 1, 2, 1),
                Action::compare(1, 2, 2, 2),
            ]
        );
    }

    #[test]
    fn test_duplicates_descending() {
        // The walk stops at the equal pair instead of passing it
        let log = InsertionSort.sort(&[2, 1, 2], SortDirection::Descending);
        assert_eq!(
            log.into_vec(),
            vec![
                Action::compare(0, 1, 2, 1),
                Action::compare(1, 2, 1, 2),
                Action::swap(1, 2, 1, 2),
                Action::compare(0, 1, 2, 2),
            ]
        );
    }
}
