//! A brute-force resistor value finder for circuit design.
//!
//! Given a desired resistance, every standard value from a fixed table (scaled across seven
//! decades) is tried on its own and as a series or parallel pair with every other value. Any
//! candidate landing strictly within 2% of the target is reported.
//!
//! # Example
//! ```rust
//! use resistor_pair::report::Search;
//!
//! let mut out = Vec::new();
//! let summary = Search::new(100.0)
//!     .and_then(|search| search.run(&mut out))
//!     .expect("search over the fixed tables cannot fail");
//!
//! assert_eq!(summary.pairs, 3570);
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Single:\t100R\t\t\t\t0.0%"));
//! assert!(text.contains("Series:\t\t18R\t82R\t100R\t0.0%"));
//! ```

#[macro_use]
extern crate lazy_static;

use itertools::Itertools;

pub mod analysis;
pub mod error;
pub mod format;
pub mod input;
pub mod report;

pub use error::{RCalcError, Result};

/// Mantissas of the values stocked in each decade.
pub const BASE_VALUES: &[f64] = &[1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

/// Decades every base value is scaled across, 1R up to 1M.
pub const MULTIPLIERS: &[f64] = &[1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

lazy_static! {
    /// Every base value scaled by every multiplier, base-major.
    pub static ref SCALED: RSeries = RSeries::new(BASE_VALUES);
}

/// A series of scaled resistor values in search order.
#[derive(Debug)]
pub struct RSeries {
    values: Box<[f64]>,
}

impl RSeries {
    /// Builds the scaled values for a set of mantissas. Each mantissa is multiplied by every entry
    /// of [`MULTIPLIERS`], keeping the mantissa order on the outside.
    /// # Example
    /// ```
    ///     # use resistor_pair::RSeries;
    ///     let r = RSeries::new(&[1.0, 4.7]);
    ///     assert_eq!(r.len(), 14);
    ///     assert_eq!(r.iter().nth(7), Some(&4.7));
    /// ```
    pub fn new(series: &[f64]) -> Self {
        RSeries {
            values: series
                .iter()
                .cartesian_product(MULTIPLIERS.iter())
                .map(|(val, pow)| val * pow)
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from index `idx` onward, the partners considered for the value at `idx`.
    pub(crate) fn from_index(&self, idx: usize) -> impl Iterator<Item = &f64> + Clone {
        self.values[idx..].iter()
    }

    /// The values grouped by mantissa, one decade run per group, each with the index of its
    /// first value.
    pub(crate) fn decades(&self) -> impl Iterator<Item = (usize, &[f64])> + Clone {
        let width = MULTIPLIERS.len();
        self.values
            .chunks(width)
            .enumerate()
            .map(move |(n, block)| (n * width, block))
    }

    /// Every unordered pair with repetition, R1 outer and R2 starting at R1's position.
    /// # Example
    /// ```
    ///     # use resistor_pair::SCALED;
    ///     assert_eq!(SCALED.pairs().count(), 84 * 85 / 2);
    /// ```
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.iter()
            .enumerate()
            .flat_map(move |(idx, &r1)| self.from_index(idx).map(move |&r2| (r1, r2)))
    }
}

/// Two resistors and their equivalent values when wired in series or in parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RPair {
    pub r1: f64,
    pub r2: f64,
    pub series: f64,
    pub parallel: f64,
}

/// Combines two resistors.
///
/// Both values must be positive and finite, anything else is reported as a
/// [`RCalcError::Domain`] rather than letting the parallel division run.
/// # Example
/// ```
///     # use resistor_pair::combine;
///     let pair = combine(100.0, 100.0).unwrap();
///     assert_eq!(pair.series, 200.0);
///     assert_eq!(pair.parallel, 50.0);
///     assert!(combine(0.0, 0.0).is_err());
/// ```
pub fn combine(r1: f64, r2: f64) -> Result<RPair> {
    for r in [r1, r2] {
        if !(r.is_finite() && r > 0.0) {
            return Err(RCalcError::Domain(format!(
                "cannot combine {} and {}: resistances must be positive",
                r1, r2
            )));
        }
    }
    let series = r1 + r2;
    Ok(RPair {
        r1,
        r2,
        series,
        parallel: (r1 * r2) / series,
    })
}
