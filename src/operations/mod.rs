// src/operations/mod.rs

//! Gate instructions for the two-qubit register.
//!
//! A [`Gate`] is a tagged value: a [`GateKind`], the qubit it targets and the
//! real-valued angles the kind requires. Turning a gate into its 4x4 unitary is
//! the job of [`resolver::resolve`]; the fixed single-qubit matrices live in
//! [`matrices`].
//!
//! Gates can also be read from the textual form produced by circuit
//! generators, e.g. `"qc.rx(1.5707963, 0)"` or `"cx(0, 1)"`. Angles come first,
//! then qubit indices.

pub mod matrices;
pub mod resolver;

use crate::core::{Operator, QpairError, QubitId, Result};
use std::fmt;
use std::str::FromStr;

pub use resolver::resolve;

/// Every gate the resolver knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Identity; leaves the state unchanged.
    I,
    /// Hadamard.
    H,
    /// Pauli-X (NOT).
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Phase by π/2.
    S,
    /// Phase by -π/2.
    Sdg,
    /// Phase by π/4.
    T,
    /// Phase by -π/4.
    Tdg,
    /// Square root of X.
    Sx,
    /// Adjoint of the square root of X.
    Sxdg,
    /// Phase by θ on |1>.
    Phase,
    /// Rotation about X by θ.
    Rx,
    /// Rotation about Y by θ.
    Ry,
    /// Rotation about Z by θ.
    Rz,
    /// Universal single-qubit gate U(θ, φ, λ).
    U,
    /// Controlled NOT; the instruction's target is the control.
    Cx,
    /// Exchange of the two qubits.
    Swap,
    /// XX interaction by θ.
    Rxx,
    /// YY interaction by θ.
    Ryy,
    /// ZZ interaction by θ.
    Rzz,
}

impl GateKind {
    /// All kinds, in declaration order.
    pub const ALL: [GateKind; 21] = [
        GateKind::I,
        GateKind::H,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::S,
        GateKind::Sdg,
        GateKind::T,
        GateKind::Tdg,
        GateKind::Sx,
        GateKind::Sxdg,
        GateKind::Phase,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
        GateKind::U,
        GateKind::Cx,
        GateKind::Swap,
        GateKind::Rxx,
        GateKind::Ryy,
        GateKind::Rzz,
    ];

    /// Token name used in the textual gate form.
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::I => "id",
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::T => "t",
            GateKind::Tdg => "tdg",
            GateKind::Sx => "sx",
            GateKind::Sxdg => "sxdg",
            GateKind::Phase => "p",
            GateKind::Rx => "rx",
            GateKind::Ry => "ry",
            GateKind::Rz => "rz",
            GateKind::U => "u",
            GateKind::Cx => "cx",
            GateKind::Swap => "swap",
            GateKind::Rxx => "rxx",
            GateKind::Ryy => "ryy",
            GateKind::Rzz => "rzz",
        }
    }

    /// Looks a kind up by token name. `"i"` is accepted as an alias of `"id"`.
    pub fn from_name(name: &str) -> Option<GateKind> {
        if name == "i" {
            return Some(GateKind::I);
        }
        GateKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Symbol used when drawing circuits.
    pub fn symbol(&self) -> &'static str {
        match self {
            GateKind::I => "I",
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::S => "S",
            GateKind::Sdg => "S†",
            GateKind::T => "T",
            GateKind::Tdg => "T†",
            GateKind::Sx => "√X",
            GateKind::Sxdg => "√X†",
            GateKind::Phase => "P",
            GateKind::Rx => "Rx",
            GateKind::Ry => "Ry",
            GateKind::Rz => "Rz",
            GateKind::U => "U",
            GateKind::Cx => "X",
            GateKind::Swap => "x",
            GateKind::Rxx => "XX",
            GateKind::Ryy => "YY",
            GateKind::Rzz => "ZZ",
        }
    }

    /// Number of angle parameters the kind requires.
    pub fn param_arity(&self) -> usize {
        match self {
            GateKind::Phase
            | GateKind::Rx
            | GateKind::Ry
            | GateKind::Rz
            | GateKind::Rxx
            | GateKind::Ryy
            | GateKind::Rzz => 1,
            GateKind::U => 3,
            _ => 0,
        }
    }

    /// Whether the gate acts on both qubits.
    pub fn is_two_qubit(&self) -> bool {
        matches!(
            self,
            GateKind::Cx | GateKind::Swap | GateKind::Rxx | GateKind::Ryy | GateKind::Rzz
        )
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single gate instruction.
///
/// For two-qubit kinds the partner qubit is always `target.partner()`; for
/// [`GateKind::Cx`] the target is the control qubit. The typed constructors
/// (`Gate::h`, `Gate::rx`, ...) always carry the right number of angles;
/// [`Gate::new`] does not check and leaves that to [`Gate::validate`].
#[derive(Debug, Clone, PartialEq)] // f64 angles rule out Eq
pub struct Gate {
    kind: GateKind,
    target: QubitId,
    params: Vec<f64>,
}

impl Gate {
    /// Creates an instruction without checking the parameter count.
    pub fn new(kind: GateKind, target: QubitId, params: Vec<f64>) -> Self {
        Self { kind, target, params }
    }

    fn fixed(kind: GateKind, target: QubitId) -> Self {
        Self::new(kind, target, Vec::new())
    }

    fn rotation(kind: GateKind, theta: f64, target: QubitId) -> Self {
        Self::new(kind, target, vec![theta])
    }

    /// Identity.
    pub fn id(target: QubitId) -> Self { Self::fixed(GateKind::I, target) }
    /// Hadamard.
    pub fn h(target: QubitId) -> Self { Self::fixed(GateKind::H, target) }
    /// Pauli-X.
    pub fn x(target: QubitId) -> Self { Self::fixed(GateKind::X, target) }
    /// Pauli-Y.
    pub fn y(target: QubitId) -> Self { Self::fixed(GateKind::Y, target) }
    /// Pauli-Z.
    pub fn z(target: QubitId) -> Self { Self::fixed(GateKind::Z, target) }
    /// S.
    pub fn s(target: QubitId) -> Self { Self::fixed(GateKind::S, target) }
    /// S†.
    pub fn sdg(target: QubitId) -> Self { Self::fixed(GateKind::Sdg, target) }
    /// T.
    pub fn t(target: QubitId) -> Self { Self::fixed(GateKind::T, target) }
    /// T†.
    pub fn tdg(target: QubitId) -> Self { Self::fixed(GateKind::Tdg, target) }
    /// √X.
    pub fn sx(target: QubitId) -> Self { Self::fixed(GateKind::Sx, target) }
    /// √X†.
    pub fn sxdg(target: QubitId) -> Self { Self::fixed(GateKind::Sxdg, target) }
    /// Phase(θ).
    pub fn phase(theta: f64, target: QubitId) -> Self { Self::rotation(GateKind::Phase, theta, target) }
    /// Rx(θ).
    pub fn rx(theta: f64, target: QubitId) -> Self { Self::rotation(GateKind::Rx, theta, target) }
    /// Ry(θ).
    pub fn ry(theta: f64, target: QubitId) -> Self { Self::rotation(GateKind::Ry, theta, target) }
    /// Rz(θ).
    pub fn rz(theta: f64, target: QubitId) -> Self { Self::rotation(GateKind::Rz, theta, target) }

    /// U(θ, φ, λ).
    pub fn u(theta: f64, phi: f64, lambda: f64, target: QubitId) -> Self {
        Self::new(GateKind::U, target, vec![theta, phi, lambda])
    }

    /// CNOT controlled by `control`, targeting the other qubit.
    pub fn cx(control: QubitId) -> Self { Self::fixed(GateKind::Cx, control) }
    /// SWAP of the two qubits.
    pub fn swap() -> Self { Self::fixed(GateKind::Swap, QubitId::Q0) }
    /// RXX(θ) on the pair.
    pub fn rxx(theta: f64) -> Self { Self::rotation(GateKind::Rxx, theta, QubitId::Q0) }
    /// RYY(θ) on the pair.
    pub fn ryy(theta: f64) -> Self { Self::rotation(GateKind::Ryy, theta, QubitId::Q0) }
    /// RZZ(θ) on the pair.
    pub fn rzz(theta: f64) -> Self { Self::rotation(GateKind::Rzz, theta, QubitId::Q0) }

    /// The gate kind.
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Target qubit (the control for CX).
    pub fn target(&self) -> QubitId {
        self.target
    }

    /// Angle parameters, in radians.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Both qubits touched by the instruction, target first.
    pub fn qubits(&self) -> Vec<QubitId> {
        if self.kind.is_two_qubit() {
            vec![self.target, self.target.partner()]
        } else {
            vec![self.target]
        }
    }

    /// Checks that the instruction carries exactly the angles its kind needs.
    pub fn validate(&self) -> Result<()> {
        let required = self.kind.param_arity();
        if self.params.len() != required {
            return Err(QpairError::malformed(
                self.to_string(),
                format!(
                    "'{}' takes {} angle parameter(s), got {}",
                    self.kind,
                    required,
                    self.params.len()
                ),
            ));
        }
        Ok(())
    }

    /// Resolves the instruction to its 4x4 unitary.
    pub fn operator(&self) -> Result<Operator> {
        resolve(self)
    }

    /// The instruction undoing this one.
    pub fn inverse(&self) -> Gate {
        let negated = || self.params.iter().map(|p| -p).collect::<Vec<_>>();
        let kind = match self.kind {
            GateKind::S => GateKind::Sdg,
            GateKind::Sdg => GateKind::S,
            GateKind::T => GateKind::Tdg,
            GateKind::Tdg => GateKind::T,
            GateKind::Sx => GateKind::Sxdg,
            GateKind::Sxdg => GateKind::Sx,
            GateKind::U => {
                // U(θ,φ,λ)† = U(-θ,-λ,-φ)
                let params = match self.params.as_slice() {
                    [theta, phi, lambda] => vec![-theta, -lambda, -phi],
                    _ => negated(),
                };
                return Gate::new(GateKind::U, self.target, params);
            }
            GateKind::Phase
            | GateKind::Rx
            | GateKind::Ry
            | GateKind::Rz
            | GateKind::Rxx
            | GateKind::Ryy
            | GateKind::Rzz => {
                return Gate::new(self.kind, self.target, negated());
            }
            other => other,
        };
        Gate::new(kind, self.target, self.params.clone())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        for p in &self.params {
            write!(f, "{}, ", p)?;
        }
        if self.kind.is_two_qubit() {
            write!(f, "{}, {})", self.target.index(), self.target.partner().index())
        } else {
            write!(f, "{})", self.target.index())
        }
    }
}

impl FromStr for Gate {
    type Err = QpairError;

    /// Parses `[receiver.]name(arg, ...)`.
    fn from_str(token: &str) -> Result<Self> {
        let text = token.trim();
        let open = text
            .find('(')
            .ok_or_else(|| QpairError::malformed(token, "missing '('"))?;
        let body = text[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| QpairError::malformed(token, "missing closing ')'"))?;

        let head = &text[..open];
        let name = head.rsplit('.').next().unwrap_or(head).trim().to_ascii_lowercase();
        let kind = GateKind::from_name(&name)
            .ok_or_else(|| QpairError::malformed(token, format!("unknown gate name '{}'", name)))?;

        let args = if body.trim().is_empty() {
            Vec::new()
        } else {
            body.split(',')
                .map(|arg| {
                    arg.trim().parse::<f64>().map_err(|_| {
                        QpairError::malformed(token, format!("argument '{}' is not a number", arg.trim()))
                    })
                })
                .collect::<Result<Vec<f64>>>()?
        };

        let n_params = kind.param_arity();
        let n_qubits = args.len().saturating_sub(n_params);
        let qubit_range = if kind.is_two_qubit() { 1..=2 } else { 1..=1 };
        if args.len() < n_params || !qubit_range.contains(&n_qubits) {
            return Err(QpairError::malformed(
                token,
                format!(
                    "'{}' takes {} angle(s) followed by {} qubit index(es), got {} argument(s)",
                    kind,
                    n_params,
                    if kind.is_two_qubit() { "1 or 2" } else { "1" },
                    args.len()
                ),
            ));
        }

        let (params, qubit_args) = args.split_at(n_params);
        let qubits = qubit_args
            .iter()
            .map(|&q| parse_qubit(token, q))
            .collect::<Result<Vec<QubitId>>>()?;
        let target = qubits[0];
        if let Some(&second) = qubits.get(1) {
            if second != target.partner() {
                return Err(QpairError::malformed(
                    token,
                    "a two-qubit gate needs two distinct qubits",
                ));
            }
        }

        Ok(Gate::new(kind, target, params.to_vec()))
    }
}

fn parse_qubit(token: &str, value: f64) -> Result<QubitId> {
    if value.fract() != 0.0 || value < 0.0 {
        return Err(QpairError::malformed(
            token,
            format!("qubit index '{}' is not a non-negative integer", value),
        ));
    }
    QubitId::new(value as usize).map_err(|err| QpairError::malformed(token, err.to_string()))
}
