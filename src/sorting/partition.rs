//! Lomuto partition around a randomly chosen pivot

use super::{roles, Tracer};
use crate::snapshot::Role;
use rand::Rng;

/// Partition `arr[low..=high]` and return the pivot's final index `p`
///
/// Afterwards `arr[low..p]` are all `<=` the pivot, `arr[p]` is the pivot and
/// `arr[p + 1..=high]` are all `>` the pivot. Requires `low <= high`.
pub fn partition<R: Rng + ?Sized>(
    arr: &mut [u32],
    low: usize,
    high: usize,
    rng: &mut R,
    tracer: &mut Tracer,
) -> usize {
    let pivot_index = rng.gen_range(low..=high);
    arr.swap(pivot_index, high);
    tracer.stats_mut().swaps += 1;
    let pivot = arr[high];
    tracer.emit(arr, Some(roles([(high, Role::Pivot)])));

    // Next slot for an element <= pivot; everything in [low, boundary) qualifies
    let mut boundary = low;
    for j in low..high {
        let mut tags = roles([(high, Role::Pivot), (j, Role::Comparing)]);
        if boundary > low {
            tags.insert(boundary - 1, Role::Comparing);
        }
        tracer.emit(arr, Some(tags.clone()));

        tracer.stats_mut().comparisons += 1;
        if arr[j] <= pivot {
            arr.swap(boundary, j);
            tracer.stats_mut().swaps += 1;
            tags.insert(boundary, Role::Swapping);
            tags.insert(j, Role::Swapping);
            tracer.emit(arr, Some(tags));
            boundary += 1;
        }
    }

    arr.swap(boundary, high);
    tracer.stats_mut().swaps += 1;
    tracer.emit(arr, Some(roles([(boundary, Role::Pivot)])));
    log::trace!("partition [{}, {}] -> {}", low, high, boundary);

    boundary
}
