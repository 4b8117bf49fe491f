//! Engine error types.

/// Errors raised while building an engine. Search itself cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The transposition table could not be allocated
    #[error("failed to allocate transposition table with {capacity} entries")]
    TtAllocation { capacity: usize },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
