//! Instrumented sorting algorithms
//!
//! Every routine mutates the array in place and reports each significant step
//! (comparison, swap, shift, finalization) to a [`Renderer`] through a
//! [`Tracer`]. The renderer decides how long each frame stays on screen.
//!
//! - [`bubble`]: adjacent-swap passes with early exit
//! - [`insertion`]: shifting insertion over an inclusive sub-range
//! - [`heap`]: binary max-heap over a sub-range starting at an offset
//! - [`partition`]: Lomuto partition around a random pivot
//! - [`introsort`]: partition recursion with insertion and heapsort fallbacks
//!
//! [`run`] and [`sort_by_name`] are the entry points used by the session.

pub mod bubble;
pub mod errors;
pub mod heap;
pub mod insertion;
pub mod introsort;
pub mod partition;

pub use bubble::bubble_sort;
pub use errors::SortError;
pub use heap::{heap_sort, heap_sort_range};
pub use insertion::{insertion_sort, insertion_sort_range};
pub use introsort::{introsort, max_depth};
pub use partition::partition;

use crate::snapshot::{tag_range, Renderer, Role, RoleMap, Snapshot};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// The algorithms offered by the selector, in selector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Introsort,
    Heapsort,
    InsertionSort,
    BubbleSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Introsort,
        Algorithm::Heapsort,
        Algorithm::InsertionSort,
        Algorithm::BubbleSort,
    ];

    /// User-facing name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Introsort => "Introsort",
            Algorithm::Heapsort => "Heapsort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::BubbleSort => "Bubble Sort",
        }
    }

    /// Next entry in the selector, wrapping around
    pub fn next(self) -> Self {
        match self {
            Algorithm::Introsort => Algorithm::Heapsort,
            Algorithm::Heapsort => Algorithm::InsertionSort,
            Algorithm::InsertionSort => Algorithm::BubbleSort,
            Algorithm::BubbleSort => Algorithm::Introsort,
        }
    }

    /// Previous entry in the selector, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Algorithm::Introsort => Algorithm::BubbleSort,
            Algorithm::Heapsort => Algorithm::Introsort,
            Algorithm::InsertionSort => Algorithm::Heapsort,
            Algorithm::BubbleSort => Algorithm::InsertionSort,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts the selector names ("Insertion Sort") and CLI spellings
    /// ("insertion-sort", "insertion"), ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "introsort" | "intro" => Ok(Algorithm::Introsort),
            "heapsort" | "heap sort" | "heap-sort" | "heap" => Ok(Algorithm::Heapsort),
            "insertion sort" | "insertion-sort" | "insertion" => Ok(Algorithm::InsertionSort),
            "bubble sort" | "bubble-sort" | "bubble" => Ok(Algorithm::BubbleSort),
            _ => Err(SortError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// Counters collected while a sort runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub frames: usize,
    pub comparisons: usize,
    pub swaps: usize,
    /// Single-position moves made by insertion sort
    pub shifts: usize,
    /// Bubble sort passes actually run
    pub passes: usize,
    /// Deepest introsort level at which a partition ran (1 = top level)
    pub max_partition_depth: usize,
    pub heapsort_fallbacks: usize,
    pub insertion_fallbacks: usize,
}

impl fmt::Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames, {} comparisons, {} swaps, {} shifts",
            self.frames, self.comparisons, self.swaps, self.shifts
        )?;
        if self.passes > 0 {
            write!(f, ", {} passes", self.passes)?;
        }
        if self.max_partition_depth > 0 {
            write!(
                f,
                ", partition depth {}, {} heapsort / {} insertion fallbacks",
                self.max_partition_depth, self.heapsort_fallbacks, self.insertion_fallbacks
            )?;
        }
        Ok(())
    }
}

/// Snapshot emission point shared by all algorithms
///
/// Holds no frame state between calls; only the counters grow.
pub struct Tracer<'r> {
    renderer: &'r mut dyn Renderer,
    stats: SortStats,
}

impl<'r> Tracer<'r> {
    pub fn new(renderer: &'r mut dyn Renderer) -> Self {
        Tracer {
            renderer,
            stats: SortStats::default(),
        }
    }

    /// Deliver one frame and return once the renderer has shown it
    pub fn emit(&mut self, values: &[u32], roles: Option<RoleMap>) {
        self.stats.frames += 1;
        self.renderer.render(Snapshot::new(values, roles));
    }

    /// Final frame with every bar tagged `sorted`
    pub fn finish(&mut self, values: &[u32]) {
        self.emit(values, Some(tag_range(0..values.len(), Role::Sorted)));
    }

    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SortStats {
        &mut self.stats
    }

    pub fn into_stats(self) -> SortStats {
        self.stats
    }
}

/// Build a role map from a handful of (index, role) pairs
pub(crate) fn roles<const N: usize>(tags: [(usize, Role); N]) -> RoleMap {
    tags.into_iter().collect()
}

/// Run `algorithm` over `arr`, reporting frames to `renderer`
pub fn run<R: Rng + ?Sized>(
    algorithm: Algorithm,
    arr: &mut [u32],
    rng: &mut R,
    renderer: &mut dyn Renderer,
) -> SortStats {
    log::debug!("{} on {} elements", algorithm, arr.len());

    let mut tracer = Tracer::new(renderer);
    match algorithm {
        Algorithm::Introsort => introsort(arr, rng, &mut tracer),
        Algorithm::Heapsort => heap_sort(arr, &mut tracer),
        Algorithm::InsertionSort => insertion_sort(arr, &mut tracer),
        Algorithm::BubbleSort => bubble_sort(arr, &mut tracer),
    }

    let stats = tracer.into_stats();
    log::debug!("{} finished: {}", algorithm, stats);
    stats
}

/// Run the algorithm selected by `name`
///
/// An unknown name is reported and leaves `arr` untouched.
pub fn sort_by_name<R: Rng + ?Sized>(
    name: &str,
    arr: &mut [u32],
    rng: &mut R,
    renderer: &mut dyn Renderer,
) -> Result<SortStats, SortError> {
    let algorithm = name.parse::<Algorithm>().map_err(|e| {
        log::error!("{}", e);
        e
    })?;
    Ok(run(algorithm, arr, rng, renderer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{NullRenderer, RecordingRenderer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_selector_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_parse_cli_spellings() {
        assert_eq!("insertion-sort".parse::<Algorithm>(), Ok(Algorithm::InsertionSort));
        assert_eq!("BUBBLE".parse::<Algorithm>(), Ok(Algorithm::BubbleSort));
        assert_eq!(" heap ".parse::<Algorithm>(), Ok(Algorithm::Heapsort));
        assert_eq!(
            "Quicksort".parse::<Algorithm>(),
            Err(SortError::UnknownAlgorithm {
                name: "Quicksort".to_string()
            })
        );
    }

    #[test]
    fn test_selector_cycle() {
        let mut algorithm = Algorithm::Introsort;
        for expected in [
            Algorithm::Heapsort,
            Algorithm::InsertionSort,
            Algorithm::BubbleSort,
            Algorithm::Introsort,
        ] {
            algorithm = algorithm.next();
            assert_eq!(algorithm, expected);
        }
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.next().prev(), algorithm);
        }
    }

    #[test]
    fn test_example_input_every_algorithm() {
        for algorithm in Algorithm::ALL {
            let mut data = vec![5, 3, 8, 1, 9, 2];
            let mut rng = StdRng::seed_from_u64(1);
            run(algorithm, &mut data, &mut rng, &mut NullRenderer);
            assert_eq!(data, [1, 2, 3, 5, 8, 9], "{} failed", algorithm);
        }
    }

    #[test]
    fn test_unknown_name_leaves_array_alone() {
        let mut data = vec![5, 3, 8, 1, 9, 2];
        let mut rng = StdRng::seed_from_u64(1);
        let mut recorder = RecordingRenderer::new(usize::MAX);

        let result = sort_by_name("Stooge Sort", &mut data, &mut rng, &mut recorder);

        assert!(matches!(result, Err(SortError::UnknownAlgorithm { .. })));
        assert_eq!(data, [5, 3, 8, 1, 9, 2]);
        assert!(recorder.history().is_empty());
    }

    #[test]
    fn test_stats_count_frames() {
        let mut data = vec![4, 3, 2, 1];
        let mut rng = StdRng::seed_from_u64(1);
        let mut recorder = RecordingRenderer::new(usize::MAX);

        let stats = sort_by_name("Bubble Sort", &mut data, &mut rng, &mut recorder).unwrap();

        assert_eq!(stats.frames, recorder.history().len());
        assert_eq!(stats.swaps, 6);
    }
}
