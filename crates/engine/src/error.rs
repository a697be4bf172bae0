//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the simulation engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A movement step produced a non-finite head; the snake was left untouched.
    #[error("snake {id} produced a non-finite head position")]
    NonFiniteHead { id: u32 },

    #[error("session halted after a fatal tick error; reset or stop the engine")]
    Halted,
}
