//! Resolves gate instructions into 4x4 unitaries on the joint two-qubit space.

use super::matrices;
use super::{Gate, GateKind};
use crate::core::{Matrix2, Operator, QubitId, Result};

/// Returns the operator to left-multiply into the statevector for `gate`.
///
/// Single-qubit matrices are embedded as `I ⊗ G` when targeting qubit 0 and
/// `G ⊗ I` when targeting qubit 1, matching the basis order
/// `|b1 b0> -> 2 * b1 + b0` of [`crate::core::StateVector`].
///
/// # Errors
/// `QpairError::MalformedGate` when the angle count does not match the kind.
pub fn resolve(gate: &Gate) -> Result<Operator> {
    gate.validate()?;

    // arity checked above
    let p = gate.params();
    let target = gate.target();
    let operator = match gate.kind() {
        GateKind::I => Operator::identity(),
        GateKind::H => embed(&matrices::HADAMARD, target),
        GateKind::X => embed(&matrices::PAULI_X, target),
        GateKind::Y => embed(&matrices::PAULI_Y, target),
        GateKind::Z => embed(&matrices::PAULI_Z, target),
        GateKind::S => embed(&matrices::S, target),
        GateKind::Sdg => embed(&matrices::S_DAGGER, target),
        GateKind::T => embed(&matrices::T, target),
        GateKind::Tdg => embed(&matrices::T_DAGGER, target),
        GateKind::Sx => embed(&matrices::SQRT_X, target),
        GateKind::Sxdg => embed(&matrices::SQRT_X_DAGGER, target),
        GateKind::Phase => embed(&matrices::phase(p[0]), target),
        GateKind::Rx => embed(&matrices::rx(p[0]), target),
        GateKind::Ry => embed(&matrices::ry(p[0]), target),
        GateKind::Rz => embed(&matrices::rz(p[0]), target),
        GateKind::U => embed(&matrices::u(p[0], p[1], p[2]), target),
        GateKind::Rxx => matrices::rxx(p[0]),
        GateKind::Ryy => matrices::ryy(p[0]),
        GateKind::Rzz => matrices::rzz(p[0]),
        GateKind::Cx if target == QubitId::Q0 => matrices::cx_control_q0(),
        GateKind::Cx => matrices::cx_control_q1(),
        GateKind::Swap => matrices::swap(),
    };
    Ok(operator)
}

/// Places a single-qubit matrix on `target` in the joint space.
pub fn embed(matrix: &Matrix2, target: QubitId) -> Operator {
    if target == QubitId::Q0 {
        Operator::kron(&matrices::IDENTITY, matrix)
    } else {
        Operator::kron(matrix, &matrices::IDENTITY)
    }
}
