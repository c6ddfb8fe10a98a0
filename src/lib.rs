//! # Introduction
//!
//! sortviz animates comparison sorts as a bar chart. Each algorithm is
//! instrumented to emit a [`snapshot::Snapshot`] (the array plus role tags
//! such as `comparing`, `pivot` or `sorted`) after every significant step, and
//! a pluggable [`snapshot::Renderer`] shows each frame for a fixed delay.
//!
//! ## Pipeline
//!
//! ```text
//! Config → Session → sorting::run → Tracer → Renderer (TUI / recorder / no-op)
//! ```
//!
//! 1. [`config`] — constants, run configuration and command-line parsing.
//! 2. [`session`] — owns the array, the configuration and the random source.
//! 3. [`sorting`] — bubble, insertion, heap and introsort with a randomized
//!    Lomuto partition, all reporting through a [`sorting::Tracer`].
//! 4. [`snapshot`] — frames, role tags, the [`snapshot::Renderer`] trait and a
//!    memory-capped [`snapshot::FrameHistory`].
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Headless use
//!
//! ```
//! use sortviz::snapshot::NullRenderer;
//! use sortviz::sorting::{self, Algorithm};
//! use rand::SeedableRng;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! sorting::run(Algorithm::Introsort, &mut data, &mut rng, &mut NullRenderer);
//! assert_eq!(data, [1, 2, 3, 5, 8, 9]);
//! ```

pub mod config;
pub mod session;
pub mod snapshot;
pub mod sorting;
pub mod ui;
