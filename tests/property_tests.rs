//! Property-based tests for qpair using proptest
//!
//! Evolution must stay unitary for any gate sequence, and a circuit followed
//! by its inverse must return the register to |00>.

use proptest::prelude::*;
use qpair::{
    chi_squared, critical_value, Circuit, Gate, GateKind, QubitId, Simulator, SimulatorConfig, StateVector,
};

fn qubit() -> impl Strategy<Value = QubitId> {
    prop_oneof![Just(QubitId::Q0), Just(QubitId::Q1)]
}

fn gate() -> impl Strategy<Value = Gate> {
    (
        prop::sample::select(GateKind::ALL.to_vec()),
        qubit(),
        prop::collection::vec(-7.0f64..7.0, 3),
    )
        .prop_map(|(kind, target, angles)| {
            Gate::new(kind, target, angles[..kind.param_arity()].to_vec())
        })
}

proptest! {
    /// Property: any gate sequence preserves the norm
    #[test]
    fn evolution_preserves_norm(gates in prop::collection::vec(gate(), 0..40)) {
        let state = Simulator::new().evolve(&gates).unwrap();
        prop_assert!(
            (state.norm_sqr() - 1.0).abs() < 1e-6,
            "Norm drifted to {} after {} gates",
            state.norm_sqr(), gates.len()
        );
        let total: f64 = state.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-6);
    }

    /// Property: every resolved operator passes the strict checks
    #[test]
    fn strict_mode_never_rejects_valid_gates(gates in prop::collection::vec(gate(), 1..20)) {
        let simulator = Simulator::with_config(SimulatorConfig::strict()).unwrap();
        prop_assert!(simulator.evolve(&gates).is_ok());
    }

    /// Property: circuit followed by its inverse is the identity on |00>
    #[test]
    fn inverse_circuit_restores_ground_state(gates in prop::collection::vec(gate(), 0..25)) {
        let circuit: Circuit = gates.into_iter().collect();
        let mut round_trip = circuit.clone();
        round_trip.add_gates(circuit.inverse().gates().iter().cloned());

        let state = Simulator::new().evolve(round_trip.gates()).unwrap();
        prop_assert!(
            state.max_distance(&StateVector::zero_state()) < 1e-6,
            "Round trip ended in {}",
            state
        );
    }

    /// Property: gates print as tokens that parse back to themselves
    #[test]
    fn gate_display_round_trips(g in gate()) {
        let parsed: Gate = g.to_string().parse().unwrap();
        prop_assert_eq!(parsed, g);
    }

    /// Property: chi-squared of a distribution against itself is zero
    #[test]
    fn chi_squared_self_comparison_is_zero(counts in prop::collection::vec(1u32..1000, 4)) {
        let chi = chi_squared(&counts, &counts).unwrap();
        prop_assert_eq!(chi, 0.0);
    }

    /// Property: the statistic is non-negative for balanced inputs
    #[test]
    fn chi_squared_is_non_negative(
        expected in prop::collection::vec(1u32..500, 4),
        shift in 0usize..4,
    ) {
        let mut observed = expected.clone();
        observed.rotate_left(shift);
        let chi = chi_squared(&expected, &observed).unwrap();
        prop_assert!(chi >= 0.0);
    }

    /// Property: a smaller alpha never lowers the critical value
    #[test]
    fn critical_value_decreases_with_alpha(a in 0.001f64..0.999, b in 0.001f64..0.999) {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(critical_value(low).unwrap() >= critical_value(high).unwrap());
    }
}
