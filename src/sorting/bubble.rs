//! Bubble sort with early exit

use super::{roles, Tracer};
use crate::snapshot::{tag_range, Role};

/// Sort `arr` by repeated adjacent swaps
///
/// Each pass settles the largest remaining element at the end of the unsorted
/// prefix. A pass without any swap ends the sort.
pub fn bubble_sort(arr: &mut [u32], tracer: &mut Tracer) {
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        tracer.stats_mut().passes += 1;
        let mut swapped = false;

        for j in 0..n - i - 1 {
            let mut tags = tag_range(n - i..n, Role::Sorted);
            tags.insert(j, Role::Comparing);
            tags.insert(j + 1, Role::Comparing);
            tracer.emit(arr, Some(tags));

            tracer.stats_mut().comparisons += 1;
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                tracer.stats_mut().swaps += 1;
                tracer.emit(arr, Some(roles([(j, Role::Swapping), (j + 1, Role::Swapping)])));
            }
        }

        if !swapped {
            break;
        }
    }

    tracer.finish(arr);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::RecordingRenderer;

    fn sort(data: &mut [u32]) -> (crate::sorting::SortStats, RecordingRenderer) {
        let mut recorder = RecordingRenderer::new(usize::MAX);
        let mut tracer = Tracer::new(&mut recorder);
        bubble_sort(data, &mut tracer);
        let stats = tracer.into_stats();
        (stats, recorder)
    }

    #[test]
    fn test_sorted_input_exits_after_one_pass() {
        let mut data = [1, 2, 3, 4, 5];
        let (stats, _) = sort(&mut data);

        assert_eq!(data, [1, 2, 3, 4, 5]);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.comparisons, 4);
    }

    #[test]
    fn test_reverse_input_runs_every_pass() {
        let mut data = [5, 4, 3, 2, 1];
        let (stats, _) = sort(&mut data);

        assert_eq!(data, [1, 2, 3, 4, 5]);
        assert_eq!(stats.passes, 4);
        assert_eq!(stats.swaps, 10);
    }

    #[test]
    fn test_frames_tag_compared_pair_and_sorted_suffix() {
        let mut data = [3, 1, 2];
        let (_, recorder) = sort(&mut data);
        let history = recorder.history();

        // Pass 0: compare (0,1), swap, compare (1,2), swap
        let first = history.get(0).unwrap();
        assert_eq!(first.values(), &[3, 1, 2]);
        assert_eq!(first.role_at(0), Role::Comparing);
        assert_eq!(first.role_at(1), Role::Comparing);
        assert_eq!(first.role_at(2), Role::Default);

        let swap = history.get(1).unwrap();
        assert_eq!(swap.values(), &[1, 3, 2]);
        assert_eq!(swap.role_at(0), Role::Swapping);
        assert_eq!(swap.role_at(1), Role::Swapping);

        // Pass 1 starts with the last element settled
        let second_pass = history.get(4).unwrap();
        assert_eq!(second_pass.values(), &[1, 2, 3]);
        assert_eq!(second_pass.role_at(2), Role::Sorted);
        assert_eq!(second_pass.role_at(0), Role::Comparing);

        assert!(history.last().unwrap().is_all_sorted());
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: [u32; 0] = [];
        let (stats, recorder) = sort(&mut empty);
        assert_eq!(stats.passes, 0);
        assert_eq!(recorder.history().len(), 1);

        let mut single = [42];
        let (stats, _) = sort(&mut single);
        assert_eq!(single, [42]);
        assert_eq!(stats.comparisons, 0);
    }
}
