// src/simulation/mod.rs

//! Evolves the two-qubit register through a circuit and reads out the result.
//!
//! The `Simulator` is the public entry point; the internal `SimulationEngine`
//! owns the statevector while gates are applied.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::SimulationResult;

use crate::circuits::Circuit;
use crate::core::{QpairError, Result, StateVector, UNITARY_TOLERANCE};
use crate::operations::Gate;
use engine::SimulationEngine;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Optional per-step checks performed by the engine.
///
/// The defaults perform no checks: every operator the resolver builds is
/// unitary, so evolution is norm-preserving by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Verify `U·U† = I` for every resolved operator.
    pub check_unitarity: bool,
    /// Verify the state has unit norm after every gate.
    pub check_normalization: bool,
    /// Tolerance shared by both checks.
    pub tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            check_unitarity: false,
            check_normalization: false,
            tolerance: UNITARY_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    /// Both checks enabled with the default tolerance.
    pub fn strict() -> Self {
        Self {
            check_unitarity: true,
            check_normalization: true,
            ..Self::default()
        }
    }

    /// Sets the tolerance used by the checks.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Ensures the tolerance is a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(QpairError::invalid_parameter(
                "tolerance",
                format!("must be a positive finite number, got {}", self.tolerance),
            ));
        }
        Ok(())
    }
}

/// The main simulator orchestrating the execution of circuits.
#[derive(Debug, Clone, Default)] // Allows Simulator::default() -> Simulator::new()
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given configuration.
    ///
    /// # Errors
    /// `QpairError::InvalidParameter` if the configuration is out of range.
    pub fn with_config(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Evolves |00> through `gates` in order and returns the final statevector.
    ///
    /// Each gate's operator is left-multiplied onto the current state, so the
    /// first gate in the slice acts first. An empty slice returns |00>.
    ///
    /// # Errors
    /// Propagates `QpairError::MalformedGate` from the resolver; strict
    /// configurations may also return `NonUnitary` or `Incoherence`.
    pub fn evolve(&self, gates: &[Gate]) -> Result<StateVector> {
        let mut engine = SimulationEngine::init(self.config);
        for gate in gates {
            engine.apply_gate(gate)?;
        }
        debug!(gates = engine.applied(), state = %engine.get_state(), "evolution finished");
        Ok(engine.into_state())
    }

    /// Runs a simulation of the provided circuit and extracts the measurement readout.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        let state = self.evolve(circuit.gates())?;
        Ok(SimulationResult::from_state(state))
    }
}
