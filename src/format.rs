//! Resistor shorthand rendering: 8.2 ohm to 8R2, 4.7k to 4k7, 47k, 2M2 and so on.

/// Where the unit letter goes in a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    /// Stands in for the decimal point.
    Replace(&'static str),
    /// Follows the digits.
    Append(&'static str),
}

/// Rounds half away from zero at `decimals` places.
fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn format_rval(r: f64, decimals: usize, unit: Unit) -> String {
    let mut val = format!("{:.*}", decimals, round_to(r, decimals));
    match unit {
        Unit::Replace(u) => val.replacen('.', u, 1),
        Unit::Append(u) => {
            val.push_str(u);
            val
        }
    }
}

/// Renders a resistance in ohms as resistor shorthand.
///
/// Bands are checked in order, the first one containing the value wins:
///
/// | Range | Rendering |
/// |---|---|
/// | below 1 | milliohms, no decimals, `m` appended |
/// | 1 to 10 | one decimal, `R` for the point |
/// | 10 to 1k | no decimals, `R` appended |
/// | 1k to 10k | one decimal of k, `k` for the point |
/// | 10k to 1M | no decimals of k, `k` appended |
/// | 1M to 10M | one decimal of M, `M` for the point |
/// | 10M and up | one decimal of M, `M` appended |
///
/// The top band keeps its decimal point (`22.0M`) unlike every other one-decimal band.
/// # Example
/// ```
///     # use resistor_pair::format::to_engineering_notation;
///     assert_eq!(to_engineering_notation(0.5), "500m");
///     assert_eq!(to_engineering_notation(8.2), "8R2");
///     assert_eq!(to_engineering_notation(4700.0), "4k7");
///     assert_eq!(to_engineering_notation(22e6), "22.0M");
/// ```
pub fn to_engineering_notation(r: f64) -> String {
    if r < 1.0 {
        format_rval(r * 1000.0, 0, Unit::Append("m"))
    } else if r < 10.0 {
        format_rval(r, 1, Unit::Replace("R"))
    } else if r < 1000.0 {
        format_rval(r, 0, Unit::Append("R"))
    } else if r < 10_000.0 {
        format_rval(r / 1000.0, 1, Unit::Replace("k"))
    } else if r < 1_000_000.0 {
        format_rval(r / 1000.0, 0, Unit::Append("k"))
    } else if r < 10_000_000.0 {
        format_rval(r / 1_000_000.0, 1, Unit::Replace("M"))
    } else {
        format_rval(r / 1_000_000.0, 1, Unit::Append("M"))
    }
}

/// Renders a percentage error to one decimal place.
pub fn format_error(pct: f64) -> String {
    format!("{:.1}", round_to(pct, 1))
}
