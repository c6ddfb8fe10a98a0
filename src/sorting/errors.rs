//! Errors reported by the sort engine
//!
//! Only algorithm selection can fail. Index errors inside the algorithms are
//! bugs and panic instead of being reported here.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SortError {
    /// Selection name is not one of the known algorithms; nothing was sorted
    #[error("algorithm '{name}' not found")]
    UnknownAlgorithm { name: String },
}
