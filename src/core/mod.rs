// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod operator;
pub mod state;

// Re-export public types for convenient access via `qpair::core::TypeName`
pub use error::{QpairError, QubitId, Result};
pub use operator::{Matrix2, Operator};
pub use state::StateVector;

pub mod constants;
pub use constants::qpair_constants::{
    BASIS_LABELS, DIM, NUM_QUBITS, PROBABILITY_TOLERANCE, UNITARY_TOLERANCE,
}; // Re-export
