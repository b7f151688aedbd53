// src/core/operator.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

use super::constants::qpair_constants::DIM;
use super::state::StateVector;

/// A 2x2 complex matrix acting on a single qubit.
pub type Matrix2 = [[Complex<f64>; 2]; 2];

/// A 4x4 complex matrix acting on the joint two-qubit space.
///
/// Rows and columns follow the statevector basis order `|00>, |01>, |10>, |11>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operator {
    matrix: [[Complex<f64>; DIM]; DIM],
}

impl Operator {
    /// Wraps a raw 4x4 matrix.
    pub fn from_rows(matrix: [[Complex<f64>; DIM]; DIM]) -> Self {
        Self { matrix }
    }

    /// The 4x4 identity.
    pub fn identity() -> Self {
        let mut matrix = [[Complex::zero(); DIM]; DIM];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = Complex::one();
        }
        Self { matrix }
    }

    /// Builds a permutation operator sending basis state `j` to `perm[j]`.
    pub fn permutation(perm: [usize; DIM]) -> Self {
        let mut matrix = [[Complex::zero(); DIM]; DIM];
        for (col, &row) in perm.iter().enumerate() {
            matrix[row][col] = Complex::one();
        }
        Self { matrix }
    }

    /// Builds a diagonal operator.
    pub fn diagonal(entries: [Complex<f64>; DIM]) -> Self {
        let mut matrix = [[Complex::zero(); DIM]; DIM];
        for (i, entry) in entries.into_iter().enumerate() {
            matrix[i][i] = entry;
        }
        Self { matrix }
    }

    /// Kronecker product `high ⊗ low`; `high` acts on qubit 1 and `low` on qubit 0.
    pub fn kron(high: &Matrix2, low: &Matrix2) -> Self {
        let mut matrix = [[Complex::zero(); DIM]; DIM];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    for l in 0..2 {
                        matrix[2 * i + k][2 * j + l] = high[i][j] * low[k][l];
                    }
                }
            }
        }
        Self { matrix }
    }

    /// Provides read-only access to the matrix entries.
    pub fn rows(&self) -> &[[Complex<f64>; DIM]; DIM] {
        &self.matrix
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        let mut matrix = [[Complex::zero(); DIM]; DIM];
        for (i, row) in self.matrix.iter().enumerate() {
            for (j, entry) in row.iter().enumerate() {
                matrix[j][i] = entry.conj();
            }
        }
        Self { matrix }
    }

    /// Matrix product `self · rhs`, i.e. `rhs` acts first.
    pub fn compose(&self, rhs: &Operator) -> Self {
        let mut matrix = [[Complex::zero(); DIM]; DIM];
        for (i, row) in matrix.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = (0..DIM).map(|k| self.matrix[i][k] * rhs.matrix[k][j]).sum();
            }
        }
        Self { matrix }
    }

    /// Left-multiplies `state` by this operator.
    pub fn apply(&self, state: &StateVector) -> StateVector {
        let psi = state.amplitudes();
        let mut out = [Complex::zero(); DIM];
        for (row, amp) in out.iter_mut().enumerate() {
            for (col, value) in psi.iter().enumerate() {
                *amp += self.matrix[row][col] * value;
            }
        }
        StateVector::from_amplitudes(out)
    }

    /// Largest entry magnitude of `U·U† - I`.
    pub fn unitarity_deviation(&self) -> f64 {
        let product = self.compose(&self.dagger());
        let identity = Operator::identity();
        let mut worst: f64 = 0.0;
        for i in 0..DIM {
            for j in 0..DIM {
                worst = worst.max((product.matrix[i][j] - identity.matrix[i][j]).norm());
            }
        }
        worst
    }

    /// Whether `U·U† = I` within `tolerance`.
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.unitarity_deviation() <= tolerance
    }
}

impl Default for Operator {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.matrix {
            write!(f, "[")?;
            for (j, c) in row.iter().enumerate() {
                write!(f, "{}{:.4}", if j > 0 { ", " } else { "" }, c)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pauli_x() -> Matrix2 {
        [
            [Complex::zero(), Complex::one()],
            [Complex::one(), Complex::zero()],
        ]
    }

    fn id2() -> Matrix2 {
        [
            [Complex::one(), Complex::zero()],
            [Complex::zero(), Complex::one()],
        ]
    }

    #[test]
    fn test_kron_low_factor_targets_qubit_zero() {
        // X on the low factor flips bit 0: |00> -> |01> (index 1)
        let op = Operator::kron(&id2(), &pauli_x());
        let out = op.apply(&StateVector::zero_state());
        assert_eq!(out, StateVector::basis(1));

        // X on the high factor flips bit 1: |00> -> |10> (index 2)
        let op = Operator::kron(&pauli_x(), &id2());
        let out = op.apply(&StateVector::zero_state());
        assert_eq!(out, StateVector::basis(2));
    }

    #[test]
    fn test_permutation_and_dagger() {
        let swap = Operator::permutation([0, 2, 1, 3]);
        assert_eq!(swap.apply(&StateVector::basis(1)), StateVector::basis(2));
        assert_eq!(swap.dagger(), swap);
        assert_eq!(swap.compose(&swap), Operator::identity());
    }

    #[test]
    fn test_unitarity_detection() {
        assert!(Operator::identity().is_unitary(1e-12));
        let scaled = Operator::diagonal([Complex::new(2.0, 0.0); DIM]);
        assert!(!scaled.is_unitary(1e-9));
        assert!((scaled.unitarity_deviation() - 3.0).abs() < 1e-12);
    }
}
