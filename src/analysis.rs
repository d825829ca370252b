//! Scoring candidates against the desired value.

use crate::error::{RCalcError, Result};
use crate::RPair;

/// Lowest accepted ratio of candidate to desired value, exclusive.
pub const LOWER_BOUND: f64 = 0.98;
/// Highest accepted ratio of candidate to desired value, exclusive.
pub const UPPER_BOUND: f64 = 1.02;

/// Outcome of comparing one candidate value to the desired value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    /// Candidate lies strictly inside the tolerance band.
    pub matched: bool,
    /// Distance from 100% of the desired value, always non-negative.
    pub error: f64,
}

/// Compares `candidate` against `desired`.
///
/// The band is exclusive on both ends, so a candidate sitting exactly 2% away does not match.
/// # Example
/// ```
///     # use resistor_pair::analysis::evaluate;
///     assert!(!evaluate(98.0, 100.0).unwrap().matched);
///     assert!(evaluate(98.01, 100.0).unwrap().matched);
///     assert!(evaluate(1.0, -5.0).is_err());
/// ```
pub fn evaluate(candidate: f64, desired: f64) -> Result<Verdict> {
    if !(desired.is_finite() && desired > 0.0) {
        return Err(RCalcError::InvalidInput(format!(
            "desired value must be greater than zero, got {}",
            desired
        )));
    }
    if !(candidate.is_finite() && candidate > 0.0) {
        return Err(RCalcError::Domain(format!(
            "candidate value must be greater than zero, got {}",
            candidate
        )));
    }

    let percentage = (100.0 * candidate) / desired;
    let error = if percentage > 100.0 {
        percentage - 100.0
    } else {
        100.0 - percentage
    };

    Ok(Verdict {
        matched: desired * LOWER_BOUND < candidate && candidate < desired * UPPER_BOUND,
        error,
    })
}

/// A lone resistor checked against the desired value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleAnalysis {
    pub desired: f64,
    pub r1: f64,
    pub verdict: Verdict,
}

impl SingleAnalysis {
    pub fn new(r1: f64, desired: f64) -> Result<Self> {
        Ok(SingleAnalysis {
            desired,
            r1,
            verdict: evaluate(r1, desired)?,
        })
    }
}

/// A resistor pair with its series and parallel values checked independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairAnalysis {
    pub desired: f64,
    pub pair: RPair,
    pub series: Verdict,
    pub parallel: Verdict,
}

impl PairAnalysis {
    pub fn new(pair: RPair, desired: f64) -> Result<Self> {
        Ok(PairAnalysis {
            desired,
            pair,
            series: evaluate(pair.series, desired)?,
            parallel: evaluate(pair.parallel, desired)?,
        })
    }
}
