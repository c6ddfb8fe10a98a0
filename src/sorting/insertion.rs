//! Insertion sort over an inclusive sub-range
//!
//! Used standalone and as the small-range base case of introsort.

use super::Tracer;
use crate::snapshot::{tag_range, Role};

/// Sort the whole array
pub fn insertion_sort(arr: &mut [u32], tracer: &mut Tracer) {
    if !arr.is_empty() {
        let high = arr.len() - 1;
        insertion_sort_range(arr, 0, high, tracer);
    }
    tracer.finish(arr);
}

/// Sort `arr[low..=high]` in place; elements outside the range are untouched
///
/// The key at each position is shifted left one slot at a time, with a frame
/// after every shift. `low >= high` is a no-op.
pub fn insertion_sort_range(arr: &mut [u32], low: usize, high: usize, tracer: &mut Tracer) {
    if low >= high {
        return;
    }

    for i in low + 1..=high {
        let key = arr[i];
        let mut tags = tag_range(low..i, Role::Sorted);
        tags.insert(i, Role::InsertionActive);

        // `j` is the slot the key would land in
        let mut j = i;
        while j > low {
            tracer.stats_mut().comparisons += 1;
            if arr[j - 1] <= key {
                break;
            }

            arr[j] = arr[j - 1];
            tracer.stats_mut().shifts += 1;
            tags.insert(j - 1, Role::Comparing);
            tags.insert(j, Role::InsertionActive);
            tracer.emit(arr, Some(tags.clone()));
            tags.remove(&(j - 1));
            j -= 1;
        }

        arr[j] = key;
        tags.insert(j, Role::Sorted);
        tracer.emit(arr, Some(tags));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{NullRenderer, RecordingRenderer};

    #[test]
    fn test_sorts_sub_range_only() {
        let mut data = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut renderer = NullRenderer;
        let mut tracer = Tracer::new(&mut renderer);

        insertion_sort_range(&mut data, 2, 6, &mut tracer);

        assert_eq!(data, [9, 8, 3, 4, 5, 6, 7, 2, 1]);
    }

    #[test]
    fn test_shift_frames() {
        let mut data = [2, 3, 1];
        let mut recorder = RecordingRenderer::new(usize::MAX);
        let mut tracer = Tracer::new(&mut recorder);

        insertion_sort_range(&mut data, 0, 2, &mut tracer);
        let stats = tracer.into_stats();

        assert_eq!(data, [1, 2, 3]);
        assert_eq!(stats.shifts, 2);

        let history = recorder.history();
        // i = 1: no shift, just the placement frame
        let placed = history.get(0).unwrap();
        assert_eq!(placed.role_at(0), Role::Sorted);
        assert_eq!(placed.role_at(1), Role::Sorted);

        // i = 2: first shift moves 3 right
        let shift = history.get(1).unwrap();
        assert_eq!(shift.values(), &[2, 3, 3]);
        assert_eq!(shift.role_at(1), Role::Comparing);
        assert_eq!(shift.role_at(2), Role::InsertionActive);
        assert_eq!(shift.role_at(0), Role::Sorted);

        // second shift; the previous source tag has been dropped
        let shift = history.get(2).unwrap();
        assert_eq!(shift.values(), &[2, 2, 3]);
        assert_eq!(shift.role_at(0), Role::Comparing);
        assert_eq!(shift.role_at(1), Role::InsertionActive);

        let last = history.last().unwrap();
        assert_eq!(last.values(), &[1, 2, 3]);
        assert_eq!(last.role_at(0), Role::Sorted);
    }

    #[test]
    fn test_empty_range_is_noop() {
        let mut data = [3, 2, 1];
        let mut recorder = RecordingRenderer::new(usize::MAX);
        let mut tracer = Tracer::new(&mut recorder);

        insertion_sort_range(&mut data, 1, 1, &mut tracer);
        insertion_sort_range(&mut data, 2, 0, &mut tracer);
        drop(tracer);

        assert_eq!(data, [3, 2, 1]);
        assert!(recorder.history().is_empty());
    }

    #[test]
    fn test_standalone_finishes_sorted() {
        let mut data = [4, 4, 1, 4];
        let mut recorder = RecordingRenderer::new(usize::MAX);
        let mut tracer = Tracer::new(&mut recorder);

        insertion_sort(&mut data, &mut tracer);
        drop(tracer);

        assert_eq!(data, [1, 4, 4, 4]);
        assert!(recorder.history().last().unwrap().is_all_sorted());
    }
}
