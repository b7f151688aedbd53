// tests/simulation_tests.rs

// Import necessary types from the qpair crate
use qpair::{
    simulation::Simulator, Circuit, CircuitBuilder, Gate, QpairError, QubitId, SimulatorConfig, StateVector,
};

use num_complex::Complex;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

const TOLERANCE: f64 = 1e-6;

// Helper for building expected amplitudes
fn c(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

fn run_gates(gates: Vec<Gate>) -> Result<StateVector, QpairError> {
    Simulator::new().evolve(&gates)
}

// Helper function to compare a final state against expected amplitudes
fn assert_state(actual: &StateVector, expected: [Complex<f64>; 4], context: &str) {
    for (i, (a, e)) in actual.amplitudes().iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).norm() < TOLERANCE,
            "Amplitude mismatch at |{:02b}>: actual {}, expected {} ({})",
            i, a, e, context
        );
    }
}

fn assert_normalized(state: &StateVector) {
    assert!((state.norm_sqr() - 1.0).abs() < TOLERANCE, "Norm drifted: {}", state.norm_sqr());
}

#[test]
fn test_empty_circuit() -> Result<(), QpairError> {
    let result = Simulator::new().run(&Circuit::new())?;
    assert_eq!(result.statevector(), &StateVector::zero_state());
    assert_eq!(result.probabilities(), &[1.0, 0.0, 0.0, 0.0]);
    Ok(())
}

#[test]
fn test_sx_then_phase() -> Result<(), QpairError> {
    let state = run_gates(vec![Gate::sx(QubitId::Q0), Gate::phase(0.90757121103, QubitId::Q0)])?;
    assert_state(
        &state,
        [c(0.5, 0.5), c(0.70183611, 0.08617464), c(0.0, 0.0), c(0.0, 0.0)],
        "sx(0), p(0.9076, 0)",
    );
    Ok(())
}

#[test]
fn test_sx_and_sxdg_on_both_qubits() -> Result<(), QpairError> {
    let state = run_gates(vec![Gate::sx(QubitId::Q0), Gate::sxdg(QubitId::Q1)])?;
    assert_state(
        &state,
        [c(0.5, 0.0), c(0.0, -0.5), c(0.0, 0.5), c(0.5, 0.0)],
        "sx(0), sxdg(1)",
    );
    Ok(())
}

#[test]
fn test_rxx_rzz_ryy_sequence() -> Result<(), QpairError> {
    let half_pi = PI / 2.0;
    let state = run_gates(vec![Gate::rxx(half_pi), Gate::rzz(half_pi)])?;
    assert_state(
        &state,
        [c(0.5, -0.5), c(0.0, 0.0), c(0.0, 0.0), c(-0.5, -0.5)],
        "rxx, rzz",
    );

    let state = run_gates(vec![Gate::rxx(half_pi), Gate::rzz(half_pi), Gate::ryy(half_pi)])?;
    assert_state(
        &state,
        [c(FRAC_1_SQRT_2, -FRAC_1_SQRT_2), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        "rxx, rzz, ryy",
    );
    Ok(())
}

#[test]
fn test_single_axis_rotations() -> Result<(), QpairError> {
    let state = run_gates(vec![Gate::ry(PI / 2.0, QubitId::Q0)])?;
    assert_state(
        &state,
        [c(FRAC_1_SQRT_2, 0.0), c(FRAC_1_SQRT_2, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        "ry(pi/2, 0)",
    );

    // Rz only contributes a phase on |00>, whichever qubit it targets
    for q in [QubitId::Q0, QubitId::Q1] {
        let state = run_gates(vec![Gate::rz(PI / 2.0, q)])?;
        assert_state(
            &state,
            [c(FRAC_1_SQRT_2, -FRAC_1_SQRT_2), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
            &format!("rz(pi/2, {})", q),
        );
    }
    Ok(())
}

#[test]
fn test_general_u_gate() -> Result<(), QpairError> {
    let state = run_gates(vec![Gate::u(PI / 2.0, PI / 2.0, PI / 2.0, QubitId::Q0)])?;
    assert_state(
        &state,
        [c(FRAC_1_SQRT_2, 0.0), c(0.0, FRAC_1_SQRT_2), c(0.0, 0.0), c(0.0, 0.0)],
        "u(pi/2, pi/2, pi/2, 0)",
    );
    Ok(())
}

#[test]
fn test_controlled_not_both_orientations() -> Result<(), QpairError> {
    // x(0), x(1) -> |11>; CX controlled by q0 clears q1 -> |01>
    let state = run_gates(vec![Gate::x(QubitId::Q0), Gate::x(QubitId::Q1), Gate::cx(QubitId::Q0)])?;
    assert_eq!(state, StateVector::basis(1));

    // x(1) -> |10>; CX controlled by q1 sets q0 -> |11>
    let state = run_gates(vec![Gate::x(QubitId::Q1), Gate::cx(QubitId::Q1)])?;
    assert_eq!(state, StateVector::basis(3));

    // control clear: nothing happens
    let state = run_gates(vec![Gate::cx(QubitId::Q1)])?;
    assert_eq!(state, StateVector::zero_state());
    Ok(())
}

#[test]
fn test_swap_exchanges_qubits() -> Result<(), QpairError> {
    let state = run_gates(vec![Gate::x(QubitId::Q1), Gate::swap()])?;
    assert_eq!(state, StateVector::basis(1));

    let state = run_gates(vec![Gate::x(QubitId::Q1), Gate::swap(), Gate::swap()])?;
    assert_eq!(state, StateVector::basis(2));
    Ok(())
}

#[test]
fn test_bell_state() -> Result<(), QpairError> {
    let circuit = CircuitBuilder::new()
        .add_gate(Gate::h(QubitId::Q0))
        .add_gate(Gate::cx(QubitId::Q0))
        .build();
    let result = Simulator::new().run(&circuit)?;
    let p = result.probabilities();
    assert!((p[0] - 0.5).abs() < TOLERANCE);
    assert!((p[3] - 0.5).abs() < TOLERANCE);
    assert!(p[1].abs() < TOLERANCE && p[2].abs() < TOLERANCE);
    Ok(())
}

#[test]
fn test_uniform_superposition() -> Result<(), QpairError> {
    let result = Simulator::new().run(&Circuit::from_tokens(["h(0)", "h(1)"])?)?;
    for p in result.probabilities() {
        assert!((p - 0.25).abs() < TOLERANCE);
    }
    for (amp, conj) in result.statevector().amplitudes().iter().zip(result.conjugate().iter()) {
        assert_eq!(amp.conj(), *conj);
    }
    Ok(())
}

#[test]
fn test_phase_gate_identities() -> Result<(), QpairError> {
    // S·S = Z, T·T = S and √X·√X = X, checked on a state where phases are visible
    let prep = || vec![Gate::h(QubitId::Q0), Gate::h(QubitId::Q1)];
    let with = |extra: Vec<Gate>| {
        let mut gates = prep();
        gates.extend(extra);
        run_gates(gates)
    };

    let ss = with(vec![Gate::s(QubitId::Q0), Gate::s(QubitId::Q0)])?;
    let z = with(vec![Gate::z(QubitId::Q0)])?;
    assert_state(&ss, *z.amplitudes(), "S·S = Z");

    let tt = with(vec![Gate::t(QubitId::Q1), Gate::t(QubitId::Q1)])?;
    let s = with(vec![Gate::s(QubitId::Q1)])?;
    assert_state(&tt, *s.amplitudes(), "T·T = S");

    let sxsx = run_gates(vec![Gate::sx(QubitId::Q0), Gate::sx(QubitId::Q0)])?;
    assert!(sxsx.max_distance(&StateVector::basis(1)) < TOLERANCE, "√X·√X = X");
    Ok(())
}

#[test]
fn test_adjoint_pairs_cancel() -> Result<(), QpairError> {
    let pairs = [
        (Gate::s(QubitId::Q0), Gate::sdg(QubitId::Q0)),
        (Gate::t(QubitId::Q1), Gate::tdg(QubitId::Q1)),
        (Gate::sx(QubitId::Q0), Gate::sxdg(QubitId::Q0)),
    ];
    for (gate, adjoint) in pairs {
        let state = run_gates(vec![Gate::h(QubitId::Q0), Gate::h(QubitId::Q1), gate.clone(), adjoint])?;
        let reference = run_gates(vec![Gate::h(QubitId::Q0), Gate::h(QubitId::Q1)])?;
        assert!(state.max_distance(&reference) < TOLERANCE, "{} did not cancel", gate);
    }
    Ok(())
}

#[test]
fn test_circuit_then_inverse_returns_to_ground() -> Result<(), QpairError> {
    let circuit = Circuit::from_tokens([
        "qc.h(0)",
        "qc.cx(0, 1)",
        "qc.u(0.3, 1.1, -0.4, 1)",
        "qc.rxx(0.7, 0, 1)",
        "qc.ryy(1.9, 0, 1)",
        "qc.rzz(-2.2, 0, 1)",
        "qc.sxdg(1)",
        "qc.t(0)",
        "qc.swap(0, 1)",
        "qc.p(0.5, 0)",
    ])?;
    let mut round_trip = circuit.clone();
    round_trip.add_gates(circuit.inverse().gates().iter().cloned());

    let state = Simulator::with_config(SimulatorConfig::strict())?.evolve(round_trip.gates())?;
    assert_normalized(&state);
    assert!(state.max_distance(&StateVector::zero_state()) < TOLERANCE);
    Ok(())
}

#[test]
fn test_token_circuit_matches_builder() -> Result<(), QpairError> {
    let parsed = Circuit::from_tokens(["qc.sx(0)", "qc.p(0.90757121103, 0)"])?;
    let built = CircuitBuilder::new()
        .add_gate(Gate::sx(QubitId::Q0))
        .add_gate(Gate::phase(0.90757121103, QubitId::Q0))
        .build();
    assert_eq!(parsed, built);
    assert_eq!(Simulator::new().run(&parsed)?, Simulator::new().run(&built)?);
    Ok(())
}

#[test]
fn test_malformed_tokens_are_rejected() {
    for token in ["rx(0)", "cx(0, 0)", "h(2)", "foo(0)", "h(0", "u(1, 2, 0)"] {
        let err = Circuit::from_tokens([token]).unwrap_err();
        assert!(
            matches!(err, QpairError::MalformedGate { .. }),
            "{} should be malformed, got {:?}",
            token,
            err
        );
    }
}

#[test]
fn test_strict_mode_accepts_every_gate() -> Result<(), QpairError> {
    let simulator = Simulator::with_config(SimulatorConfig::strict())?;
    let gates = vec![
        Gate::id(QubitId::Q0),
        Gate::h(QubitId::Q0),
        Gate::x(QubitId::Q1),
        Gate::y(QubitId::Q0),
        Gate::z(QubitId::Q1),
        Gate::s(QubitId::Q0),
        Gate::sdg(QubitId::Q1),
        Gate::t(QubitId::Q0),
        Gate::tdg(QubitId::Q1),
        Gate::sx(QubitId::Q0),
        Gate::sxdg(QubitId::Q1),
        Gate::phase(0.4, QubitId::Q0),
        Gate::rx(0.1, QubitId::Q1),
        Gate::ry(0.2, QubitId::Q0),
        Gate::rz(0.3, QubitId::Q1),
        Gate::u(0.5, 0.6, 0.7, QubitId::Q0),
        Gate::cx(QubitId::Q1),
        Gate::swap(),
        Gate::rxx(0.8),
        Gate::ryy(0.9),
        Gate::rzz(1.0),
    ];
    let state = simulator.evolve(&gates)?;
    assert_normalized(&state);
    Ok(())
}

#[test]
fn test_config_from_json() -> Result<(), Box<dyn std::error::Error>> {
    let config: SimulatorConfig = serde_json::from_str(r#"{ "check_unitarity": true }"#)?;
    assert!(config.check_unitarity);
    assert!(!config.check_normalization);
    assert_eq!(config.tolerance, SimulatorConfig::default().tolerance);

    let result = Simulator::with_config(config)?.run(&Circuit::from_tokens(["x(1)"])?)?;
    let json = serde_json::to_string(&result)?;
    let back: qpair::SimulationResult = serde_json::from_str(&json)?;
    assert_eq!(back, result);
    Ok(())
}
