//! Error handling logic

use std::fmt;
use thiserror::Error;

use super::constants::qpair_constants::NUM_QUBITS;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QpairError>;

/// Index of one of the two simulated qubits.
///
/// Qubit 0 is the least-significant bit of a basis index, so the basis state
/// `|b1 b0>` lives at index `2 * b1 + b0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(u8);

impl QubitId {
    /// Qubit 0 (low bit).
    pub const Q0: QubitId = QubitId(0);
    /// Qubit 1 (high bit).
    pub const Q1: QubitId = QubitId(1);

    /// Creates a qubit index, rejecting anything outside {0, 1}.
    pub fn new(index: usize) -> Result<Self> {
        if index < NUM_QUBITS {
            Ok(QubitId(index as u8))
        } else {
            Err(QpairError::InvalidQubit { index })
        }
    }

    /// Numeric index of this qubit.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The other qubit of the pair.
    pub fn partner(&self) -> QubitId {
        QubitId(1 - self.0)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Errors raised while resolving gates, evolving states or comparing
/// outcome distributions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QpairError {
    /// A gate instruction could not be turned into an operator: unknown
    /// name, wrong parameter count or an unreadable token.
    #[error("Malformed gate '{gate}': {reason}")]
    MalformedGate {
        /// The offending instruction, as written or displayed.
        gate: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Qubit index outside the two-qubit register.
    #[error("Invalid qubit index {index}: only qubits 0 and 1 exist")]
    InvalidQubit {
        /// Index that was requested.
        index: usize,
    },

    /// Expected and observed distributions do not have the same shape.
    #[error("Shape mismatch: expected distribution has {expected_len} entries, observed has {observed_len}")]
    ShapeMismatch {
        /// Length of the expected counts.
        expected_len: usize,
        /// Length of the observed counts.
        observed_len: usize,
    },

    /// Expected and observed distributions do not describe the same number of trials.
    #[error("Unbalanced totals: expected sums to {expected_total}, observed sums to {observed_total} (tolerance {tolerance})")]
    UnbalancedTotals {
        /// Sum of the expected counts.
        expected_total: f64,
        /// Sum of the observed counts.
        observed_total: f64,
        /// Allowed absolute difference.
        tolerance: f64,
    },

    /// A numeric argument or configuration value is out of range.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Reason why the parameter is invalid.
        reason: String,
    },

    /// A resolved operator failed the unitarity check.
    #[error("Operator for '{gate}' is not unitary (max deviation {deviation:.3e})")]
    NonUnitary {
        /// Instruction whose operator failed.
        gate: String,
        /// Largest entry of |U·U† - I|.
        deviation: f64,
    },

    /// State vector or probabilities lost normalization.
    #[error("Incoherence Violation: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },
}

impl QpairError {
    /// Create a malformed gate error.
    pub fn malformed(gate: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedGate {
            gate: gate.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_bounds() {
        assert_eq!(QubitId::new(0), Ok(QubitId::Q0));
        assert_eq!(QubitId::new(1), Ok(QubitId::Q1));
        assert_eq!(QubitId::new(2), Err(QpairError::InvalidQubit { index: 2 }));
    }

    #[test]
    fn test_partner() {
        assert_eq!(QubitId::Q0.partner(), QubitId::Q1);
        assert_eq!(QubitId::Q1.partner(), QubitId::Q0);
    }

    #[test]
    fn test_error_messages() {
        let err = QpairError::ShapeMismatch { expected_len: 4, observed_len: 3 };
        assert_eq!(
            err.to_string(),
            "Shape mismatch: expected distribution has 4 entries, observed has 3"
        );
        let err = QpairError::malformed("foo(0)", "unknown gate name 'foo'");
        assert_eq!(err.to_string(), "Malformed gate 'foo(0)': unknown gate name 'foo'");
    }
}
