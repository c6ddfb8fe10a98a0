//! Heap sort over a sub-range
//!
//! Heap positions are relative to `offset`: the children of node `i` live at
//! `offset + 2i + 1` and `offset + 2i + 2`.

use super::{roles, Tracer};
use crate::snapshot::{tag_range, Role, RoleMap};

/// Sort the whole array
pub fn heap_sort(arr: &mut [u32], tracer: &mut Tracer) {
    let n = arr.len();
    heap_sort_range(arr, 0, n, tracer);
}

/// Sort the `n` elements starting at `offset`
///
/// Builds a max-heap bottom-up, then repeatedly moves the root behind the
/// shrinking heap. Ends with a frame tagging the whole sub-range `sorted`.
pub fn heap_sort_range(arr: &mut [u32], offset: usize, n: usize, tracer: &mut Tracer) {
    if n == 0 {
        return;
    }

    for i in (0..n / 2).rev() {
        heapify(arr, n, i, offset, tracer);
    }

    for i in (1..n).rev() {
        arr.swap(offset, offset + i);
        tracer.stats_mut().swaps += 1;
        tracer.emit(
            arr,
            Some(roles([(offset, Role::HeapActive), (offset + i, Role::Sorted)])),
        );
        heapify(arr, i, 0, offset, tracer);
    }

    tracer.emit(arr, Some(tag_range(offset..offset + n, Role::Sorted)));
}

/// Sift node `i` down a heap of `n` elements
fn heapify(arr: &mut [u32], n: usize, i: usize, offset: usize, tracer: &mut Tracer) {
    let left = 2 * i + 1;
    let right = 2 * i + 2;
    let mut largest = i;

    let mut tags = RoleMap::default();
    tags.insert(offset + i, Role::HeapActive);
    if left < n {
        tags.insert(offset + left, Role::Comparing);
    }
    if right < n {
        tags.insert(offset + right, Role::Comparing);
    }
    tracer.emit(arr, Some(tags));

    if left < n {
        tracer.stats_mut().comparisons += 1;
        if arr[offset + left] > arr[offset + largest] {
            largest = left;
        }
    }
    if right < n {
        tracer.stats_mut().comparisons += 1;
        if arr[offset + right] > arr[offset + largest] {
            largest = right;
        }
    }

    if largest != i {
        arr.swap(offset + i, offset + largest);
        tracer.stats_mut().swaps += 1;
        tracer.emit(
            arr,
            Some(roles([
                (offset + i, Role::Swapping),
                (offset + largest, Role::Swapping),
            ])),
        );
        heapify(arr, n, largest, offset, tracer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{NullRenderer, RecordingRenderer};

    #[test]
    fn test_sorts_with_offset_and_leaves_rest() {
        let mut data = [100, 200, 7, 3, 9, 1, 5, 0, 50];
        let mut renderer = NullRenderer;
        let mut tracer = Tracer::new(&mut renderer);

        heap_sort_range(&mut data, 2, 5, &mut tracer);

        assert_eq!(data, [100, 200, 1, 3, 5, 7, 9, 0, 50]);
    }

    #[test]
    fn test_heapify_frames() {
        let mut data = [1, 3, 2];
        let mut recorder = RecordingRenderer::new(usize::MAX);
        let mut tracer = Tracer::new(&mut recorder);

        heap_sort(&mut data, &mut tracer);
        drop(tracer);

        assert_eq!(data, [1, 2, 3]);
        let history = recorder.history();

        // Build phase: root active, both children compared
        let first = history.get(0).unwrap();
        assert_eq!(first.role_at(0), Role::HeapActive);
        assert_eq!(first.role_at(1), Role::Comparing);
        assert_eq!(first.role_at(2), Role::Comparing);

        // 3 is the larger child, swapped up
        let swap = history.get(1).unwrap();
        assert_eq!(swap.values(), &[3, 1, 2]);
        assert_eq!(swap.role_at(0), Role::Swapping);
        assert_eq!(swap.role_at(1), Role::Swapping);

        // First extraction moves the max behind the heap
        let extracted = history.iter().find(|s| s.role_at(2) == Role::Sorted).unwrap();
        assert_eq!(extracted.values()[2], 3);
        assert_eq!(extracted.role_at(0), Role::HeapActive);

        assert!(history.last().unwrap().is_all_sorted());
    }

    #[test]
    fn test_single_and_empty() {
        let mut recorder = RecordingRenderer::new(usize::MAX);
        let mut tracer = Tracer::new(&mut recorder);

        let mut empty: [u32; 0] = [];
        heap_sort(&mut empty, &mut tracer);
        assert_eq!(tracer.stats().frames, 0);

        let mut single = [5];
        heap_sort(&mut single, &mut tracer);
        assert_eq!(tracer.stats().frames, 1);
        assert_eq!(tracer.stats().swaps, 0);
    }
}
