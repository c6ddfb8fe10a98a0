//! Run configuration and command-line parsing
//!
//! The constants here mirror the controls of the visualizer: array size and
//! per-frame delay have slider-style ranges, generated values are drawn from
//! a fixed domain.

use crate::sorting::Algorithm;
use std::time::Duration;
use thiserror::Error;

/// Array size used when none is given
pub const DEFAULT_SIZE: usize = 50;

/// Per-frame delay used when none is given (milliseconds)
pub const DEFAULT_DELAY_MS: u64 = 10;

/// Smallest generated value
pub const MIN_VALUE: u32 = 10;

/// Largest generated value (also the full bar height)
pub const MAX_VALUE: u32 = 500;

pub const MIN_SIZE: usize = 10;
pub const MAX_SIZE: usize = 200;

pub const MIN_DELAY_MS: u64 = 1;
pub const MAX_DELAY_MS: u64 = 500;

/// Sub-ranges of at most this many elements are finished by insertion sort
pub const INSERTION_THRESHOLD: usize = 16;

/// Memory cap for recorded frames (64 MB)
pub const HISTORY_LIMIT_BYTES: usize = 64 * 1024 * 1024;

/// Errors produced while reading command-line arguments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for '{flag}'")]
    MissingValue { flag: String },

    #[error("invalid number '{value}' for '{flag}'")]
    InvalidNumber { flag: String, value: String },

    #[error("unknown argument '{0}'")]
    UnknownFlag(String),

    #[error("'--values' needs at least one number")]
    EmptyValues,

    #[error("value {value} is outside [{min}, {max}]")]
    ValueOutOfRange { value: u32, min: u32, max: u32 },

    #[error(transparent)]
    Algorithm(#[from] crate::sorting::SortError),
}

/// Configuration read by the session and the renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub delay_ms: u64,
    pub min_value: u32,
    pub max_value: u32,
    pub algorithm: Algorithm,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Explicit input array instead of a generated one
    pub values: Option<Vec<u32>>,
    /// Run without the TUI and print the result
    pub headless: bool,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_SIZE,
            delay_ms: DEFAULT_DELAY_MS,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            algorithm: Algorithm::Introsort,
            seed: None,
            values: None,
            headless: false,
            show_help: false,
        }
    }
}

impl Config {
    /// Parse command-line arguments (without the program name)
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--headless" => config.headless = true,
                "-h" | "--help" => config.show_help = true,
                "-a" | "--algorithm" => {
                    let name = next_value(&mut args, &arg)?;
                    config.algorithm = name.parse()?;
                }
                "-n" | "--size" => {
                    let size: usize = parse_number(&arg, &next_value(&mut args, &arg)?)?;
                    config.size = clamp_size(size);
                }
                "-d" | "--delay" => {
                    let delay: u64 = parse_number(&arg, &next_value(&mut args, &arg)?)?;
                    config.delay_ms = clamp_delay(delay);
                }
                "--seed" => {
                    config.seed = Some(parse_number(&arg, &next_value(&mut args, &arg)?)?);
                }
                "--values" => {
                    let raw = next_value(&mut args, &arg)?;
                    config.values = Some(parse_values(&raw, config.min_value, config.max_value)?);
                }
                _ => return Err(ConfigError::UnknownFlag(arg)),
            }
        }

        Ok(config)
    }

    /// Per-frame delay as a `Duration`
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Usage text printed for `--help`
    pub fn usage(program_name: &str) -> String {
        format!(
            "Usage: {} [options]\n\
             \n\
             Options:\n\
             \x20 -a, --algorithm NAME   Introsort | Heapsort | \"Insertion Sort\" | \"Bubble Sort\"\n\
             \x20 -n, --size N           array size ({}-{}, default {})\n\
             \x20 -d, --delay MS         per-frame delay ({}-{} ms, default {})\n\
             \x20     --seed N           fixed random seed\n\
             \x20     --values 5,3,8     sort these values instead of a random array\n\
             \x20     --headless         run without the TUI and print the result\n\
             \x20 -h, --help             show this message",
            program_name,
            MIN_SIZE,
            MAX_SIZE,
            DEFAULT_SIZE,
            MIN_DELAY_MS,
            MAX_DELAY_MS,
            DEFAULT_DELAY_MS
        )
    }
}

pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

pub fn clamp_delay(delay_ms: u64) -> u64 {
    delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}

fn next_value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<String, ConfigError> {
    args.next().ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

fn parse_values(raw: &str, min: u32, max: u32) -> Result<Vec<u32>, ConfigError> {
    let values = raw
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_number::<u32>("--values", s))
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ConfigError::EmptyValues);
    }

    // Bars are scaled against max_value, so anything taller would overflow the chart
    if let Some(&value) = values.iter().find(|&&v| v < min || v > max) {
        return Err(ConfigError::ValueOutOfRange { value, min, max });
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.size, 50);
        assert_eq!(config.delay(), Duration::from_millis(10));
        assert_eq!(config.algorithm, Algorithm::Introsort);
    }

    #[test]
    fn test_full_command_line() {
        let config = Config::from_args([
            "--algorithm",
            "Bubble Sort",
            "--size",
            "75",
            "--delay",
            "20",
            "--seed",
            "7",
            "--headless",
        ])
        .unwrap();

        assert_eq!(config.algorithm, Algorithm::BubbleSort);
        assert_eq!(config.size, 75);
        assert_eq!(config.delay_ms, 20);
        assert_eq!(config.seed, Some(7));
        assert!(config.headless);
    }

    #[test]
    fn test_size_and_delay_are_clamped() {
        let config = Config::from_args(["-n", "5000", "-d", "0"]).unwrap();
        assert_eq!(config.size, MAX_SIZE);
        assert_eq!(config.delay_ms, MIN_DELAY_MS);
    }

    #[test]
    fn test_values_list() {
        let config = Config::from_args(["--values", "50, 30,80"]).unwrap();
        assert_eq!(config.values, Some(vec![50, 30, 80]));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Config::from_args(["--size"]),
            Err(ConfigError::MissingValue {
                flag: "--size".to_string()
            })
        );
        assert_eq!(
            Config::from_args(["--delay", "fast"]),
            Err(ConfigError::InvalidNumber {
                flag: "--delay".to_string(),
                value: "fast".to_string()
            })
        );
        assert_eq!(
            Config::from_args(["--frobnicate"]),
            Err(ConfigError::UnknownFlag("--frobnicate".to_string()))
        );
        assert_eq!(
            Config::from_args(["--values", ","]),
            Err(ConfigError::EmptyValues)
        );
        assert_eq!(
            Config::from_args(["--values", "5,600"]),
            Err(ConfigError::ValueOutOfRange {
                value: 5,
                min: MIN_VALUE,
                max: MAX_VALUE
            })
        );
        assert!(matches!(
            Config::from_args(["--algorithm", "Bogosort"]),
            Err(ConfigError::Algorithm(_))
        ));
    }
}
