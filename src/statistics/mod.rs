// src/statistics/mod.rs

//! Chi-squared comparison of expected and observed outcome counts over the
//! four two-qubit basis states.
//!
//! The statistic is `Σ (o_i - e_i)² / e_i`. A category whose expected count is
//! exactly zero is evaluated as if it were `1e-5` instead of failing, which
//! keeps the statistic finite but makes that category dominate. This is a
//! numerical stand-in, not a continuity correction.
//!
//! Verdicts compare the statistic against the 3-degree-of-freedom critical
//! value at significance level α, interpolated linearly between the table
//! anchors below.

use crate::core::{QpairError, Result, DIM};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Degrees of freedom of a four-category comparison.
pub const DEGREES_OF_FREEDOM: usize = DIM - 1;

/// Significance levels of the reference table, most lenient first.
pub const SIGNIFICANCE_LEVELS: [f64; 9] = [0.99, 0.95, 0.90, 0.75, 0.50, 0.25, 0.10, 0.05, 0.01];

/// Critical chi-squared values for 3 degrees of freedom at `SIGNIFICANCE_LEVELS`.
pub const CRITICAL_VALUES: [f64; 9] = [0.115, 0.352, 0.584, 1.212, 2.366, 4.11, 6.25, 7.81, 11.34];

/// Default significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Denominator substituted for a zero expected count.
pub const ZERO_EXPECTED_EPSILON: f64 = 1e-5;

/// Largest allowed difference between the expected and observed totals.
pub const TOTALS_TOLERANCE: f64 = 1e-3;

/// Settings for a [`ChiSquaredTest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChiSquaredConfig {
    /// Value used in place of a zero expected count.
    pub zero_expected_epsilon: f64,
    /// Largest allowed `|Σexpected - Σobserved|`.
    pub totals_tolerance: f64,
    /// Significance level α used by [`ChiSquaredTest::evaluate`], in (0, 1).
    pub alpha: f64,
}

impl Default for ChiSquaredConfig {
    fn default() -> Self {
        Self {
            zero_expected_epsilon: ZERO_EXPECTED_EPSILON,
            totals_tolerance: TOTALS_TOLERANCE,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl ChiSquaredConfig {
    /// Sets the significance level.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the totals tolerance.
    pub fn with_totals_tolerance(mut self, tolerance: f64) -> Self {
        self.totals_tolerance = tolerance;
        self
    }

    /// Checks every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.zero_expected_epsilon.is_finite() || self.zero_expected_epsilon <= 0.0 {
            return Err(QpairError::invalid_parameter(
                "zero_expected_epsilon",
                format!("must be a positive finite number, got {}", self.zero_expected_epsilon),
            ));
        }
        if !self.totals_tolerance.is_finite() || self.totals_tolerance < 0.0 {
            return Err(QpairError::invalid_parameter(
                "totals_tolerance",
                format!("must be a non-negative finite number, got {}", self.totals_tolerance),
            ));
        }
        check_alpha(self.alpha)
    }
}

/// Outcome of comparing a statistic with its critical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Significance {
    /// `χ² ≥ critical value`.
    Significant,
    /// `χ² < critical value`.
    NotSignificant,
}

impl Significance {
    /// Human-readable verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Significance::Significant => "statistically significant",
            Significance::NotSignificant => "not statistically significant",
        }
    }

    /// Whether the deviation is significant.
    pub fn is_significant(&self) -> bool {
        matches!(self, Significance::Significant)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chi-squared statistic together with its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceReport {
    /// The statistic as computed.
    pub chi_squared: f64,
    /// The statistic rounded to 3 decimals, for display.
    pub reported_chi_squared: f64,
    /// Significance level used.
    pub alpha: f64,
    /// Degrees of freedom of the comparison.
    pub degrees_of_freedom: usize,
    /// Critical value at `alpha` for `degrees_of_freedom`.
    pub critical_value: f64,
    /// The verdict.
    pub significance: Significance,
}

impl SignificanceReport {
    /// `"statistically significant"` or `"not statistically significant"`.
    pub fn statement(&self) -> &'static str {
        self.significance.as_str()
    }

    /// Whether the deviation is significant.
    pub fn is_significant(&self) -> bool {
        self.significance.is_significant()
    }
}

impl fmt::Display for SignificanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chi-squared = {:.3} (df {}, critical {:.3} at alpha {}): {}",
            self.reported_chi_squared, self.degrees_of_freedom, self.critical_value, self.alpha, self.significance
        )
    }
}

/// Chi-squared goodness-of-fit test with configurable guards.
#[derive(Debug, Clone, Default)]
pub struct ChiSquaredTest {
    config: ChiSquaredConfig,
}

impl ChiSquaredTest {
    /// Creates a test with the given configuration.
    ///
    /// # Errors
    /// `QpairError::InvalidParameter` if the configuration is out of range.
    pub fn new(config: ChiSquaredConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ChiSquaredConfig {
        &self.config
    }

    /// Computes `Σ (o_i - e_i)² / e_i` over the four categories.
    ///
    /// # Errors
    /// * `ShapeMismatch` if the lengths differ or are not 4.
    /// * `UnbalancedTotals` if the sums differ by more than the tolerance.
    /// * `InvalidParameter` for negative, non-finite or unconvertible counts.
    pub fn statistic<E, O>(&self, expected: &[E], observed: &[O]) -> Result<f64>
    where
        E: ToPrimitive,
        O: ToPrimitive,
    {
        if expected.len() != observed.len() || expected.len() != DIM {
            return Err(QpairError::ShapeMismatch {
                expected_len: expected.len(),
                observed_len: observed.len(),
            });
        }
        let expected = to_counts("expected", expected)?;
        let observed = to_counts("observed", observed)?;

        let expected_total: f64 = expected.iter().sum();
        let observed_total: f64 = observed.iter().sum();
        if (expected_total - observed_total).abs() > self.config.totals_tolerance {
            return Err(QpairError::UnbalancedTotals {
                expected_total,
                observed_total,
                tolerance: self.config.totals_tolerance,
            });
        }

        let mut chi = 0.0;
        for (i, (&e, &o)) in expected.iter().zip(observed.iter()).enumerate() {
            let e = if e == 0.0 {
                warn!(category = i, epsilon = self.config.zero_expected_epsilon, "zero expected count replaced by epsilon");
                self.config.zero_expected_epsilon
            } else {
                e
            };
            chi += (o - e).powi(2) / e;
        }
        debug!(chi_squared = chi, expected_total, observed_total, "computed chi-squared");
        Ok(chi)
    }

    /// Computes the statistic and classifies it at the configured α.
    pub fn evaluate<E, O>(&self, expected: &[E], observed: &[O]) -> Result<SignificanceReport>
    where
        E: ToPrimitive,
        O: ToPrimitive,
    {
        self.evaluate_at(expected, observed, self.config.alpha)
    }

    /// Like [`evaluate`](Self::evaluate) but at an explicit significance level.
    pub fn evaluate_at<E, O>(&self, expected: &[E], observed: &[O], alpha: f64) -> Result<SignificanceReport>
    where
        E: ToPrimitive,
        O: ToPrimitive,
    {
        check_alpha(alpha)?;
        let chi = self.statistic(expected, observed)?;
        significance_statement(chi, alpha)
    }
}

/// [`ChiSquaredTest::statistic`] with the default configuration.
pub fn chi_squared<E, O>(expected: &[E], observed: &[O]) -> Result<f64>
where
    E: ToPrimitive,
    O: ToPrimitive,
{
    ChiSquaredTest::default().statistic(expected, observed)
}

/// Critical chi-squared value for [`DEGREES_OF_FREEDOM`] at significance `alpha`.
///
/// Table anchors are returned exactly. Between anchors the value is linearly
/// interpolated in α; outside `[0.01, 0.99]` it is extrapolated from the two
/// nearest anchors.
///
/// # Errors
/// `QpairError::InvalidParameter` unless `0 < alpha < 1`.
pub fn critical_value(alpha: f64) -> Result<f64> {
    check_alpha(alpha)?;

    if let Some(i) = SIGNIFICANCE_LEVELS.iter().position(|&level| (level - alpha).abs() < 1e-12) {
        return Ok(CRITICAL_VALUES[i]);
    }

    let last = SIGNIFICANCE_LEVELS.len() - 1;
    let segment = if alpha > SIGNIFICANCE_LEVELS[0] {
        0
    } else if alpha < SIGNIFICANCE_LEVELS[last] {
        last - 1
    } else {
        SIGNIFICANCE_LEVELS
            .windows(2)
            .position(|pair| alpha <= pair[0] && alpha >= pair[1])
            .unwrap_or(last - 1)
    };

    let (a0, a1) = (SIGNIFICANCE_LEVELS[segment], SIGNIFICANCE_LEVELS[segment + 1]);
    let (v0, v1) = (CRITICAL_VALUES[segment], CRITICAL_VALUES[segment + 1]);
    Ok(v0 + (v1 - v0) * (alpha - a0) / (a1 - a0))
}

/// Classifies `chi_squared` at significance `alpha`.
///
/// The verdict is "statistically significant" when `chi_squared` is at least
/// the critical value; the reported statistic is rounded to 3 decimals.
pub fn significance_statement(chi_squared: f64, alpha: f64) -> Result<SignificanceReport> {
    let critical = critical_value(alpha)?;
    let significance = if chi_squared >= critical {
        Significance::Significant
    } else {
        Significance::NotSignificant
    };
    Ok(SignificanceReport {
        chi_squared,
        reported_chi_squared: round3(chi_squared),
        alpha,
        degrees_of_freedom: DEGREES_OF_FREEDOM,
        critical_value: critical,
        significance,
    })
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn check_alpha(alpha: f64) -> Result<()> {
    if alpha.is_finite() && alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(QpairError::invalid_parameter(
            "alpha",
            format!("significance level must lie strictly between 0 and 1, got {}", alpha),
        ))
    }
}

fn to_counts<T: ToPrimitive>(name: &str, values: &[T]) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| match v.to_f64() {
            Some(x) if x.is_finite() && x >= 0.0 => Ok(x),
            Some(x) => Err(QpairError::invalid_parameter(
                name,
                format!("count #{} must be a non-negative finite number, got {}", i, x),
            )),
            None => Err(QpairError::invalid_parameter(
                name,
                format!("count #{} is not representable as f64", i),
            )),
        })
        .collect()
}
