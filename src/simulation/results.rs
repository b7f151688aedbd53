// src/simulation/results.rs
use crate::core::{QpairError, Result, StateVector, BASIS_LABELS, DIM};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Readout of a finished evolution: the final statevector, its complex
/// conjugate and the outcome probabilities over `|00>, |01>, |10>, |11>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    statevector: StateVector,
    conjugate: [Complex<f64>; DIM],
    probabilities: [f64; DIM],
}

impl SimulationResult {
    /// Extracts conjugate and probabilities from a final statevector.
    pub fn from_state(statevector: StateVector) -> Self {
        Self {
            conjugate: statevector.conjugate(),
            probabilities: statevector.probabilities(),
            statevector,
        }
    }

    /// The final statevector.
    pub fn statevector(&self) -> &StateVector {
        &self.statevector
    }

    /// Elementwise complex conjugate of the statevector.
    pub fn conjugate(&self) -> &[Complex<f64>; DIM] {
        &self.conjugate
    }

    /// Outcome probabilities in basis order.
    pub fn probabilities(&self) -> &[f64; DIM] {
        &self.probabilities
    }

    /// Probability of a single basis index (`2 * b1 + b0`), `None` if out of range.
    pub fn probability(&self, basis_index: usize) -> Option<f64> {
        self.probabilities.get(basis_index).copied()
    }

    /// Expected number of occurrences of each outcome over `shots` runs.
    pub fn expected_counts(&self, shots: u64) -> [f64; DIM] {
        self.probabilities.map(|p| p * shots as f64)
    }

    /// Draws `shots` measurement outcomes from the probabilities.
    ///
    /// Sampling is deterministic for a given `seed`, so runs can be replayed.
    ///
    /// # Errors
    /// `QpairError::Incoherence` if the probabilities do not sum to a positive value.
    pub fn sample_counts(&self, shots: u64, seed: u64) -> Result<[u64; DIM]> {
        let total: f64 = self.probabilities.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(QpairError::Incoherence {
                message: format!("Cannot sample from probabilities summing to {}", total),
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts = [0u64; DIM];
        // Last outcome with non-zero probability absorbs rounding at the top end
        let fallback = self
            .probabilities
            .iter()
            .rposition(|&p| p > 0.0)
            .unwrap_or(DIM - 1);

        for _ in 0..shots {
            let p_sample: f64 = rng.random::<f64>() * total; // Sample in [0, total)
            let mut cumulative = 0.0;
            let mut chosen = fallback;
            for (k, &p) in self.probabilities.iter().enumerate() {
                cumulative += p;
                if p > 0.0 && p_sample < cumulative {
                    chosen = k;
                    break;
                }
            }
            counts[chosen] += 1;
        }
        Ok(counts)
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        for (i, label) in BASIS_LABELS.iter().enumerate() {
            writeln!(
                f,
                "  |{}>: amplitude {:.4}, probability {:.4}",
                label,
                self.statevector.amplitudes()[i],
                self.probabilities[i]
            )?;
        }
        Ok(())
    }
}
