//! Example preparing a Bell pair from textual gate tokens, sampling it like a
//! backend would and judging the sampled counts with a chi-squared test.

use qpair::{Circuit, ChiSquaredTest, QpairError, Simulator};

const SHOTS: u64 = 1024;

fn main() -> Result<(), QpairError> {
    println!("--- qpair Example: Bell pair vs. sampled counts ---");

    // --- Build Circuit ---
    // Tokens in the form an external circuit generator emits them.
    let circuit = Circuit::from_tokens(["qc.h(0)", "qc.cx(0, 1)"])?;
    println!("\nCircuit Definition:\n{}", circuit);

    // --- Run Simulation ---
    let result = Simulator::new().run(&circuit)?;
    println!("{}", result);

    // --- Compare against a seeded sample ---
    let expected = result.expected_counts(SHOTS);
    let observed = result.sample_counts(SHOTS, 2024)?;
    println!("Expected counts: {:?}", expected);
    println!("Observed counts: {:?}", observed);

    let report = ChiSquaredTest::default().evaluate(&expected, &observed)?;
    println!("\n{}", report);

    // A biased device that leaks population into |01>
    let biased = [412u64, 100, 0, 512];
    let report = ChiSquaredTest::default().evaluate(&expected, &biased)?;
    println!("Biased device: {}", report);

    Ok(())
}
