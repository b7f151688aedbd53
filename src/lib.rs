// src/lib.rs

//! `qpair` - exact statevector simulation of a two-qubit register
//!
//! Circuits are ordered lists of gate instructions acting on qubits `0` and
//! `1`. The simulator evolves `|00>` through them and reports the final
//! amplitudes, their conjugates and the outcome probabilities. A chi-squared
//! comparison judges whether observed outcome counts deviate significantly
//! from expected ones.
//!
//! Basis index `k = 2 * b1 + b0`, so qubit 0 is the least significant bit.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod statistics;

// Re-export the most common types for easier top-level use
pub use core::{Operator, QpairError, QubitId, Result, StateVector};
pub use operations::{Gate, GateKind};
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{SimulationResult, Simulator, SimulatorConfig};
pub use validation::{check_normalization, check_probabilities, check_unitary, validate_state};
pub use statistics::{
    chi_squared,
    critical_value,
    significance_statement,
    ChiSquaredConfig,
    ChiSquaredTest,
    Significance,
    SignificanceReport,
};

// Example 1: Entangling two qubits
// Flips qubit 0, then uses it as the control of a CX onto qubit 1.
/// ```
/// use qpair::{CircuitBuilder, Gate, QubitId, Simulator};
///
/// let circuit = CircuitBuilder::new()
///     .add_gate(Gate::x(QubitId::Q0))      // |00> -> |01>
///     .add_gate(Gate::cx(QubitId::Q0))     // control q0 set, flip q1 -> |11>
///     .build();
///
/// let result = Simulator::new().run(&circuit).expect("valid circuit");
/// println!("Circuit:\n{}", circuit);
/// println!("Result:\n{}", result);
///
/// let p = result.probabilities();
/// assert!((p[3] - 1.0).abs() < 1e-12);
/// assert!(p[0].abs() < 1e-12 && p[1].abs() < 1e-12 && p[2].abs() < 1e-12);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Token circuits and a significance check
// Parses a circuit from textual gate tokens, then compares sampled counts
// against the expected ones.
/// ```
/// use qpair::{chi_squared, significance_statement, Circuit, Simulator};
///
/// let circuit = Circuit::from_tokens(["h(0)", "h(1)"]).expect("tokens parse");
/// let result = Simulator::new().run(&circuit).expect("valid circuit");
///
/// let expected = result.expected_counts(400);
/// assert!(expected.iter().all(|&e| (e - 100.0).abs() < 1e-9));
///
/// let chi = chi_squared(&expected, &[102u32, 95, 108, 95]).expect("balanced totals");
/// let report = significance_statement(chi, 0.05).expect("alpha in range");
/// assert_eq!(report.statement(), "not statistically significant");
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
