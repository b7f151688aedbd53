//! Single-qubit gate matrices and the closed-form two-qubit rotations.

use crate::core::{Matrix2, Operator};
use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

const ZERO: Complex<f64> = Complex::new(0.0, 0.0);
const ONE: Complex<f64> = Complex::new(1.0, 0.0);
const I: Complex<f64> = Complex::new(0.0, 1.0);
const NEG_I: Complex<f64> = Complex::new(0.0, -1.0);

/// I = [[1, 0], [0, 1]]
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// H = 1/√2 [[1, 1], [1, -1]]
pub const HADAMARD: Matrix2 = [
    [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(FRAC_1_SQRT_2, 0.0)],
    [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(-FRAC_1_SQRT_2, 0.0)],
];

/// X = [[0, 1], [1, 0]]
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Y = [[0, -i], [i, 0]]
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I, ZERO]];

/// Z = [[1, 0], [0, -1]]
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, Complex::new(-1.0, 0.0)]];

/// S = diag(1, i)
pub const S: Matrix2 = [[ONE, ZERO], [ZERO, I]];

/// S† = diag(1, -i)
pub const S_DAGGER: Matrix2 = [[ONE, ZERO], [ZERO, NEG_I]];

/// T = diag(1, e^(iπ/4))
pub const T: Matrix2 = [
    [ONE, ZERO],
    [ZERO, Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)],
];

/// T† = diag(1, e^(-iπ/4))
pub const T_DAGGER: Matrix2 = [
    [ONE, ZERO],
    [ZERO, Complex::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2)],
];

/// √X = ½ [[1+i, 1-i], [1-i, 1+i]]
pub const SQRT_X: Matrix2 = [
    [Complex::new(0.5, 0.5), Complex::new(0.5, -0.5)],
    [Complex::new(0.5, -0.5), Complex::new(0.5, 0.5)],
];

/// √X† = ½ [[1-i, 1+i], [1+i, 1-i]]
pub const SQRT_X_DAGGER: Matrix2 = [
    [Complex::new(0.5, -0.5), Complex::new(0.5, 0.5)],
    [Complex::new(0.5, 0.5), Complex::new(0.5, -0.5)],
];

/// diag(1, e^(iθ))
pub fn phase(theta: f64) -> Matrix2 {
    [[ONE, ZERO], [ZERO, Complex::from_polar(1.0, theta)]]
}

/// Rx(θ) = [[cos(θ/2), -i·sin(θ/2)], [-i·sin(θ/2), cos(θ/2)]]
pub fn rx(theta: f64) -> Matrix2 {
    let (sin_a, cos_a) = (theta / 2.0).sin_cos();
    let c = Complex::new(cos_a, 0.0);
    let s = Complex::new(0.0, -sin_a);
    [[c, s], [s, c]]
}

/// Ry(θ) = [[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]
pub fn ry(theta: f64) -> Matrix2 {
    let (sin_a, cos_a) = (theta / 2.0).sin_cos();
    [
        [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
        [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
    ]
}

/// Rz(θ) = diag(e^(-iθ/2), e^(iθ/2))
pub fn rz(theta: f64) -> Matrix2 {
    [
        [Complex::from_polar(1.0, -theta / 2.0), ZERO],
        [ZERO, Complex::from_polar(1.0, theta / 2.0)],
    ]
}

/// U(θ, φ, λ) = [[cos(θ/2), -e^(iλ)·sin(θ/2)], [e^(iφ)·sin(θ/2), e^(i(φ+λ))·cos(θ/2)]]
pub fn u(theta: f64, phi: f64, lambda: f64) -> Matrix2 {
    let (sin_a, cos_a) = (theta / 2.0).sin_cos();
    [
        [Complex::new(cos_a, 0.0), -Complex::from_polar(sin_a, lambda)],
        [Complex::from_polar(sin_a, phi), Complex::from_polar(cos_a, phi + lambda)],
    ]
}

/// RXX(θ): cos(θ/2) on the diagonal, -i·sin(θ/2) on the anti-diagonal.
pub fn rxx(theta: f64) -> Operator {
    let (sin_a, cos_a) = (theta / 2.0).sin_cos();
    let c = Complex::new(cos_a, 0.0);
    let s = Complex::new(0.0, -sin_a);
    Operator::from_rows([
        [c, ZERO, ZERO, s],
        [ZERO, c, s, ZERO],
        [ZERO, s, c, ZERO],
        [s, ZERO, ZERO, c],
    ])
}

/// RYY(θ): like RXX but the |00>/|11> coupling is +i·sin(θ/2).
pub fn ryy(theta: f64) -> Operator {
    let (sin_a, cos_a) = (theta / 2.0).sin_cos();
    let c = Complex::new(cos_a, 0.0);
    let s = Complex::new(0.0, -sin_a);
    Operator::from_rows([
        [c, ZERO, ZERO, -s],
        [ZERO, c, s, ZERO],
        [ZERO, s, c, ZERO],
        [-s, ZERO, ZERO, c],
    ])
}

/// RZZ(θ) = diag(e^(-iθ/2), e^(iθ/2), e^(iθ/2), e^(-iθ/2))
pub fn rzz(theta: f64) -> Operator {
    let even = Complex::from_polar(1.0, -theta / 2.0);
    let odd = Complex::from_polar(1.0, theta / 2.0);
    Operator::diagonal([even, odd, odd, even])
}

/// CX controlled by qubit 0: swaps |01> and |11>.
pub fn cx_control_q0() -> Operator {
    Operator::permutation([0, 3, 2, 1])
}

/// CX controlled by qubit 1: swaps |10> and |11>.
pub fn cx_control_q1() -> Operator {
    Operator::permutation([0, 1, 3, 2])
}

/// SWAP: exchanges |01> and |10>.
pub fn swap() -> Operator {
    Operator::permutation([0, 2, 1, 3])
}
