// src/simulation/engine.rs
use crate::core::{Result, StateVector};
use crate::operations::{resolve, Gate};
use crate::simulation::SimulatorConfig;
use crate::validation::{check_normalization, check_unitary};
use tracing::trace;

/// Holds the evolving statevector for one simulation run.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    state: StateVector,
    config: SimulatorConfig,
    applied: usize,
}

impl SimulationEngine {
    /// Starts from |00> = (1, 0, 0, 0).
    pub(crate) fn init(config: SimulatorConfig) -> Self {
        Self {
            state: StateVector::zero_state(),
            config,
            applied: 0,
        }
    }

    // Add a crate-visible method to set the state directly for testing
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) {
        self.state = state;
    }

    /// Resolves `gate` and left-multiplies its operator into the state.
    ///
    /// With the default configuration nothing beyond resolution is checked.
    /// Strict configurations additionally verify the operator is unitary and
    /// the state stays normalized.
    pub(crate) fn apply_gate(&mut self, gate: &Gate) -> Result<()> {
        let operator = resolve(gate)?;

        if self.config.check_unitarity {
            check_unitary(&operator, &gate.to_string(), Some(self.config.tolerance))?;
        }

        self.state = operator.apply(&self.state);
        self.applied += 1;
        trace!(step = self.applied, gate = %gate, state = %self.state, "applied gate");

        if self.config.check_normalization {
            check_normalization(&self.state, Some(self.config.tolerance))?;
        }
        Ok(())
    }

    pub(crate) fn get_state(&self) -> &StateVector {
        &self.state
    }

    /// Number of gates applied so far.
    pub(crate) fn applied(&self) -> usize {
        self.applied
    }

    pub(crate) fn into_state(self) -> StateVector {
        self.state
    }
}
