//! Drives the search over single resistors and pairs and renders the matches.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::analysis::{evaluate, PairAnalysis, SingleAnalysis};
use crate::error::Result;
use crate::format::{format_error, to_engineering_notation as fmt_r};
use crate::{combine, RSeries, SCALED};

/// One value or pair examined by the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate {
    Single(f64),
    Pair(f64, f64),
}

/// A candidate that landed within tolerance. `Display` yields the report line without its
/// trailing newline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Match {
    Single { r1: f64, error: f64 },
    Series { r1: f64, r2: f64, value: f64, error: f64 },
    Parallel { r1: f64, r2: f64, value: f64, error: f64 },
}

impl Match {
    /// The equivalent resistance that matched.
    pub fn value(&self) -> f64 {
        match *self {
            Match::Single { r1, .. } => r1,
            Match::Series { value, .. } | Match::Parallel { value, .. } => value,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Match::Single { r1, error } => {
                write!(f, "Single:\t{}\t\t\t\t{}%", fmt_r(r1), format_error(error))
            }
            Match::Series { r1, r2, value, error } => write!(
                f,
                "Series:\t\t{}\t{}\t{}\t{}%",
                fmt_r(r1),
                fmt_r(r2),
                fmt_r(value),
                format_error(error)
            ),
            Match::Parallel { r1, r2, value, error } => write!(
                f,
                "Parallel:\t{}\t{}\t{}\t{}%",
                fmt_r(r1),
                fmt_r(r2),
                fmt_r(value),
                format_error(error)
            ),
        }
    }
}

/// Counts gathered while running a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub singles: usize,
    pub pairs: usize,
    pub matches: usize,
}

/// A search for one desired value over a series of scaled resistors.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    desired: f64,
    series: &'a RSeries,
}

impl Search<'static> {
    /// Sets up a search over the standard [`SCALED`] values. Fails if `desired` is not a
    /// positive number.
    pub fn new(desired: f64) -> Result<Self> {
        Search::with_series(desired, &SCALED)
    }
}

impl<'a> Search<'a> {
    pub fn with_series(desired: f64, series: &'a RSeries) -> Result<Self> {
        // Surface a bad target before any candidate is looked at.
        evaluate(desired, desired)?;
        Ok(Search { desired, series })
    }

    /// Every candidate in search order. Mantissas are walked in table order; for each one its
    /// seven scaled values are checked alone first, then each of them is paired with itself and
    /// every value after it.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + 'a {
        let series = self.series;
        series.decades().flat_map(move |(start, block)| {
            let singles = block.iter().map(|&r1| Candidate::Single(r1));
            let pairs = block.iter().enumerate().flat_map(move |(offset, &r1)| {
                series
                    .from_index(start + offset)
                    .map(move |&r2| Candidate::Pair(r1, r2))
            });
            singles.chain(pairs)
        })
    }

    /// Scores one candidate, returning the matches it produced in report order.
    pub fn examine(&self, candidate: Candidate) -> Result<Vec<Match>> {
        let mut found = Vec::new();
        match candidate {
            Candidate::Single(r1) => {
                let analysis = SingleAnalysis::new(r1, self.desired)?;
                if analysis.verdict.matched {
                    found.push(Match::Single {
                        r1,
                        error: analysis.verdict.error,
                    });
                }
            }
            Candidate::Pair(r1, r2) => {
                let analysis = PairAnalysis::new(combine(r1, r2)?, self.desired)?;
                if analysis.series.matched {
                    found.push(Match::Series {
                        r1,
                        r2,
                        value: analysis.pair.series,
                        error: analysis.series.error,
                    });
                }
                if analysis.parallel.matched {
                    found.push(Match::Parallel {
                        r1,
                        r2,
                        value: analysis.pair.parallel,
                        error: analysis.parallel.error,
                    });
                }
            }
        }
        Ok(found)
    }

    /// Lazily yields every match in report order.
    pub fn matches(&self) -> impl Iterator<Item = Result<Match>> + 'a {
        let search = *self;
        self.candidates()
            .flat_map(move |candidate| match search.examine(candidate) {
                Ok(found) => found.into_iter().map(Ok).collect::<Vec<_>>(),
                Err(e) => vec![Err(e)],
            })
    }

    /// Writes one line per match to `out` and reports how much was examined.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SearchSummary> {
        let mut summary = SearchSummary::default();
        for candidate in self.candidates() {
            match candidate {
                Candidate::Single(_) => summary.singles += 1,
                Candidate::Pair(..) => summary.pairs += 1,
            }
            for found in self.examine(candidate)? {
                writeln!(out, "{}", found)?;
                summary.matches += 1;
            }
        }
        debug!(
            desired = self.desired,
            singles = summary.singles,
            pairs = summary.pairs,
            matches = summary.matches,
            "search finished"
        );
        Ok(summary)
    }
}
