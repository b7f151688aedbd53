// src/validation/mod.rs

//! Provides functions to validate statevectors, operators and probability
//! vectors produced by the simulator.

use crate::core::{Operator, QpairError, Result, StateVector, PROBABILITY_TOLERANCE, UNITARY_TOLERANCE};

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QpairError::Incoherence)` if normalization fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QpairError::Incoherence {
            message: format!(
                "State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks `U·U† = I` within `tolerance` (default 1e-9).
///
/// # Returns
/// * `Err(QpairError::NonUnitary)` naming `label` if the check fails.
pub fn check_unitary(operator: &Operator, label: &str, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(UNITARY_TOLERANCE);
    let deviation = operator.unitarity_deviation();
    if deviation > effective_tolerance {
        Err(QpairError::NonUnitary {
            gate: label.to_string(),
            deviation,
        })
    } else {
        Ok(())
    }
}

/// Checks that probabilities are non-negative and sum to 1 within `tolerance` (default 1e-6).
pub fn check_probabilities(probabilities: &[f64], tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(PROBABILITY_TOLERANCE);
    if let Some((i, p)) = probabilities
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p < -effective_tolerance)
    {
        return Err(QpairError::Incoherence {
            message: format!("Probability of outcome {} is invalid: {}", i, p),
        });
    }
    let total: f64 = probabilities.iter().sum();
    if (total - 1.0).abs() > effective_tolerance {
        return Err(QpairError::Incoherence {
            message: format!("Probabilities sum to {} (Deviation > {})", total, effective_tolerance),
        });
    }
    Ok(())
}

/// Runs the normalization and probability checks on a state.
pub fn validate_state(state: &StateVector, norm_tolerance: Option<f64>) -> Result<()> {
    check_normalization(state, norm_tolerance)?;
    check_probabilities(&state.probabilities(), None)?;
    Ok(())
}
