// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! gate instructions (`qpair::operations::Gate`).
//!
//! A `Circuit` is the time-ordered list of gates the simulator applies to the
//! |00> register, first gate first.

use crate::core::{QubitId, Result, NUM_QUBITS};
use crate::operations::{Gate, GateKind};
use std::fmt;

/// Represents an ordered sequence of gates applied to the two-qubit register.
#[derive(Clone, PartialEq, Default)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// The ordered sequence of gates. The order is the evolution order.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// Parses a circuit from gate tokens such as `["h(0)", "cx(0, 1)"]`.
    ///
    /// # Errors
    /// `QpairError::MalformedGate` for the first token that fails to parse.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let gates = tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<Gate>())
            .collect::<Result<Vec<Gate>>>()?;
        Ok(Self { gates })
    }

    /// Adds a single gate to the end of the circuit's sequence.
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Adds multiple gates from an iterator to the end of the circuit's sequence.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        self.gates.extend(gates);
    }

    /// Returns a slice containing the ordered sequence of gates in this circuit.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the total number of gates defined in the circuit.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// The circuit that undoes this one: gates reversed, each inverted.
    pub fn inverse(&self) -> Circuit {
        Self {
            gates: self.gates.iter().rev().map(Gate::inverse).collect(),
        }
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single gate to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Adds multiple gates from an iterator to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        self.circuit.add_gates(gates);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self { gates: iter.into_iter().collect() }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gates.is_empty() {
            return writeln!(f, "qpair::Circuit[0 gates]");
        }

        let num_gates = self.gates.len();

        // Grid dimensions and padding
        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────"; // GATE_WIDTH dashes
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][time] holds the gate/wire segment; row r is qubit r
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_gates]; NUM_QUBITS];
        // connect[time] marks a vertical link between the two wires
        let mut connect: Vec<char> = vec![' '; num_gates];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre_dashes),
                    symbol,
                    H_WIRE.to_string().repeat(post_dashes)
                )
            }
        }

        for (t, gate) in self.gates.iter().enumerate() {
            let qubits = gate.qubits();
            match (gate.kind(), qubits.as_slice()) {
                (GateKind::I, _) => continue, // Skip explicit Identity, leave wire
                (GateKind::Cx, [control, target]) => {
                    op_grid[control.index()][t] = format_gate("@");
                    op_grid[target.index()][t] = format_gate(GateKind::Cx.symbol());
                    connect[t] = V_WIRE;
                }
                (kind, [first, second]) => {
                    op_grid[first.index()][t] = format_gate(kind.symbol());
                    op_grid[second.index()][t] = format_gate(kind.symbol());
                    connect[t] = V_WIRE;
                }
                (kind, _) => {
                    op_grid[gate.target().index()][t] = format_gate(kind.symbol());
                }
            }
        }

        writeln!(f, "qpair::Circuit[{} gates]", num_gates)?;
        for r in 0..NUM_QUBITS {
            let label = format!("{}: ", QubitId::new(r).map_err(|_| fmt::Error)?);
            write!(f, "{}", label)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < NUM_QUBITS - 1 {
                write!(f, "{}", " ".repeat(label.chars().count()))?;
                for connector in &connect {
                    let padding_needed = GATE_WIDTH.saturating_sub(1);
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), connector, " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
