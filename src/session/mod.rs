//! Visualizer session: the array, its configuration and the random source
//!
//! Replaces the globals of a typical GUI visualizer. The session owns the
//! array exclusively and lends it to one sort routine at a time.

use crate::config::{clamp_delay, clamp_size, Config};
use crate::snapshot::{Renderer, Snapshot};
use crate::sorting::{self, Algorithm, SortError, SortStats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Session {
    data: Vec<u32>,
    config: Config,
    rng: StdRng,
}

impl Session {
    /// Create a session and its initial array
    ///
    /// Uses `config.values` when present, otherwise generates `config.size`
    /// random values.
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Session {
            data: Vec::new(),
            config,
            rng,
        };

        match session.config.values.clone() {
            Some(values) => session.set_data(values),
            None => session.generate_new_array(),
        }
        session
    }

    /// Replace the array with `size` values drawn uniformly from the value domain
    pub fn generate_new_array(&mut self) {
        let (min, max) = (self.config.min_value, self.config.max_value);
        let rng = &mut self.rng;
        self.data = (0..self.config.size).map(|_| rng.gen_range(min..=max)).collect();
        log::debug!("generated {} values in [{}, {}]", self.data.len(), min, max);
    }

    /// Install a caller-provided array; the configured size follows it
    pub fn set_data(&mut self, values: Vec<u32>) {
        self.config.size = values.len();
        self.data = values;
    }

    /// Change the array size (clamped) and regenerate
    pub fn set_size(&mut self, size: usize) {
        self.config.size = clamp_size(size);
        self.generate_new_array();
    }

    /// Change the per-frame delay (clamped)
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.config.delay_ms = clamp_delay(delay_ms);
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current array as an untagged frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.data, None)
    }

    /// Run the selected algorithm to completion
    pub fn sort(&mut self, renderer: &mut dyn Renderer) -> SortStats {
        sorting::run(self.config.algorithm, &mut self.data, &mut self.rng, renderer)
    }

    /// Run the algorithm named `name`; an unknown name leaves the array as it was
    pub fn sort_by_name(
        &mut self,
        name: &str,
        renderer: &mut dyn Renderer,
    ) -> Result<SortStats, SortError> {
        sorting::sort_by_name(name, &mut self.data, &mut self.rng, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_SIZE, MAX_VALUE, MIN_SIZE, MIN_VALUE};
    use crate::snapshot::NullRenderer;

    fn seeded(seed: u64) -> Session {
        Session::new(Config {
            seed: Some(seed),
            ..Config::default()
        })
    }

    #[test]
    fn test_generated_values_in_domain() {
        let session = seeded(1);
        assert_eq!(session.data().len(), 50);
        assert!(session
            .data()
            .iter()
            .all(|&v| (MIN_VALUE..=MAX_VALUE).contains(&v)));
    }

    #[test]
    fn test_same_seed_same_array() {
        assert_eq!(seeded(42).data(), seeded(42).data());
    }

    #[test]
    fn test_set_size_clamps_and_regenerates() {
        let mut session = seeded(2);
        session.set_size(3);
        assert_eq!(session.data().len(), MIN_SIZE);
        session.set_size(10_000);
        assert_eq!(session.data().len(), MAX_SIZE);
    }

    #[test]
    fn test_sort_selected_algorithm() {
        let mut session = seeded(3);
        for algorithm in Algorithm::ALL {
            session.generate_new_array();
            session.set_algorithm(algorithm);
            session.sort(&mut NullRenderer);
            assert!(session.data().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_unknown_name_keeps_array() {
        let mut session = seeded(4);
        let before = session.data().to_vec();

        let result = session.sort_by_name("Sleep Sort", &mut NullRenderer);

        assert_eq!(
            result,
            Err(SortError::UnknownAlgorithm {
                name: "Sleep Sort".to_string()
            })
        );
        assert_eq!(session.data(), before.as_slice());
    }
}
