// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::qpair_constants::{BASIS_LABELS, DIM};

/// Amplitudes of the two-qubit register in basis order `|00>, |01>, |10>, |11>`.
///
/// The index of a basis state is `2 * b1 + b0`, i.e. qubit 0 is the low bit.
/// States produced by the simulator stay unit-norm because every operator it
/// applies is unitary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: [Complex<f64>; DIM],
}

impl StateVector {
    /// The initial state |00> = (1, 0, 0, 0).
    pub fn zero_state() -> Self {
        Self::basis(0)
    }

    /// The computational basis state with the given index (taken modulo 4).
    pub fn basis(index: usize) -> Self {
        let mut amplitudes = [Complex::zero(); DIM];
        amplitudes[index % DIM] = Complex::one();
        Self { amplitudes }
    }

    /// Builds a state from raw amplitudes. No normalization is applied.
    pub fn from_amplitudes(amplitudes: [Complex<f64>; DIM]) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>; DIM] {
        &self.amplitudes
    }

    /// Elementwise complex conjugate.
    pub fn conjugate(&self) -> [Complex<f64>; DIM] {
        self.amplitudes.map(|c| c.conj())
    }

    /// `Re(ψ_i · conj(ψ_i))` for each basis state.
    pub fn probabilities(&self) -> [f64; DIM] {
        self.amplitudes.map(|c| (c * c.conj()).re)
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Largest componentwise distance to `other`.
    pub fn max_distance(&self, other: &StateVector) -> f64 {
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max)
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::zero_state()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}|{}>: {:.4}", if i > 0 { ", " } else { "" }, BASIS_LABELS[i], c)?;
        }
        write!(f, "]")
    }
}
