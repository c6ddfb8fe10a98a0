//! Introsort: randomized quicksort with a depth budget
//!
//! Per sub-range, in order:
//! 1. at most [`INSERTION_THRESHOLD`] elements: insertion sort
//! 2. depth budget exhausted: heap sort
//! 3. otherwise partition and recurse on both sides with one less budget

use super::{heap_sort_range, insertion_sort_range, partition, Tracer};
use crate::config::INSERTION_THRESHOLD;
use rand::Rng;

/// Partition recursion budget for an array of `n` elements: `2 * floor(log2(n))`
pub fn max_depth(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        2 * n.ilog2() as usize
    }
}

/// Sort the whole array
pub fn introsort<R: Rng + ?Sized>(arr: &mut [u32], rng: &mut R, tracer: &mut Tracer) {
    if !arr.is_empty() {
        let high = arr.len() - 1;
        let depth_limit = max_depth(arr.len());
        introsort_range(arr, 0, high, depth_limit, 1, rng, tracer);
    }
    tracer.finish(arr);
}

fn introsort_range<R: Rng + ?Sized>(
    arr: &mut [u32],
    low: usize,
    high: usize,
    depth_limit: usize,
    level: usize,
    rng: &mut R,
    tracer: &mut Tracer,
) {
    if low >= high {
        return;
    }

    if high - low + 1 <= INSERTION_THRESHOLD {
        tracer.stats_mut().insertion_fallbacks += 1;
        insertion_sort_range(arr, low, high, tracer);
        return;
    }

    if depth_limit == 0 {
        log::debug!("depth limit reached on [{}, {}], using heapsort", low, high);
        tracer.stats_mut().heapsort_fallbacks += 1;
        heap_sort_range(arr, low, high - low + 1, tracer);
        return;
    }

    let stats = tracer.stats_mut();
    stats.max_partition_depth = stats.max_partition_depth.max(level);

    let p = partition(arr, low, high, rng, tracer);
    if p > low {
        introsort_range(arr, low, p - 1, depth_limit - 1, level + 1, rng, tracer);
    }
    introsort_range(arr, p + 1, high, depth_limit - 1, level + 1, rng, tracer);
}
