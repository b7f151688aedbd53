//! Numeric constants shared by the simulator and the statistics module.

/// Constants describing the two-qubit register and numeric tolerances.
pub mod qpair_constants {
    /// Number of simulated qubits.
    pub const NUM_QUBITS: usize = 2;
    /// Dimension of the joint state space (2^NUM_QUBITS).
    pub const DIM: usize = 4;
    /// Basis labels in statevector order, written `b1 b0`.
    pub const BASIS_LABELS: [&str; DIM] = ["00", "01", "10", "11"];
    /// Tolerance used when checking that resolved operators are unitary.
    pub const UNITARY_TOLERANCE: f64 = 1e-9;
    /// Tolerance on the probability sum of a measured state.
    pub const PROBABILITY_TOLERANCE: f64 = 1e-6;
}
