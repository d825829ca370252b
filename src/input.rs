//! Reading the desired value from an interactive prompt.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{RCalcError, Result};

pub const PROMPT: &str = "\nEnter desired value: ";
pub const NOT_A_NUMBER: &str = "\n**Error: please enter a valid number**";
pub const NOT_POSITIVE: &str = "\n**Error: please enter a value greater than zero**";

/// Parses a desired value, requiring a finite number above zero.
/// # Example
/// ```
///     # use resistor_pair::input::parse_desired;
///     assert_eq!(parse_desired("4700").unwrap(), 4700.0);
///     assert!(parse_desired("-1").is_err());
///     assert!(parse_desired("ten").is_err());
/// ```
pub fn parse_desired(text: &str) -> Result<f64> {
    let value = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RCalcError::InvalidInput(format!("{:?} is not a number", text.trim())))?;
    if value <= 0.0 {
        return Err(RCalcError::InvalidInput(format!(
            "{} is not greater than zero",
            value
        )));
    }
    Ok(value)
}

/// The longest leading part of `token` that reads as a number, so `12abc` gives 12.
fn leading_number(token: &str) -> Option<f64> {
    token
        .char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .rev()
        .find_map(|end| token[..end].parse::<f64>().ok())
}

/// Prompts on `output` until a line of `input` starts with a positive number.
///
/// The number is read from the front of the line's first token and everything after it is
/// thrown away. Blank lines are skipped without prompting again. Bad entries print an error and
/// prompt again; running out of input is the only way to fail.
pub fn read_desired<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64> {
    let mut line = String::new();
    let mut prompt = true;
    loop {
        if prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(RCalcError::EndOfInput);
        }

        let token = match line.split_whitespace().next() {
            Some(token) => token,
            None => {
                prompt = false;
                continue;
            }
        };
        prompt = true;
        match leading_number(token) {
            Some(value) if value.is_finite() && value > 0.0 => return Ok(value),
            Some(value) if value.is_finite() => {
                debug!(value, "rejected non-positive desired value");
                writeln!(output, "{}", NOT_POSITIVE)?;
            }
            _ => {
                debug!(token, "rejected non-numeric desired value");
                writeln!(output, "{}", NOT_A_NUMBER)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(text: &str) -> (Result<f64>, String) {
        let mut out = Vec::new();
        let res = read_desired(&mut Cursor::new(text), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reads_first_token() {
        let (res, out) = read("470 ohms please\n");
        assert_eq!(res.unwrap(), 470.0);
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn reprompts_on_garbage() {
        let (res, out) = read("abc\nk47\n1e3\n");
        assert_eq!(res.unwrap(), 1000.0);
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert_eq!(out.matches(NOT_A_NUMBER).count(), 2);
    }

    #[test]
    fn trailing_junk_after_number_is_dropped() {
        assert_eq!(read("12abc\n").0.unwrap(), 12.0);
        assert_eq!(read("4k7\n").0.unwrap(), 4.0);
        assert_eq!(read("1e3ohm\n").0.unwrap(), 1000.0);
        assert_eq!(read("2.2.2\n").0.unwrap(), 2.2);

        let (res, out) = read("-5V\n5V\n");
        assert_eq!(res.unwrap(), 5.0);
        assert_eq!(out.matches(NOT_POSITIVE).count(), 1);
    }

    #[test]
    fn blank_lines_wait_without_prompting() {
        let (res, out) = read("\n   \n\t\n47\n");
        assert_eq!(res.unwrap(), 47.0);
        assert_eq!(out, PROMPT);

        let (res, out) = read("x\n\n47\n");
        assert_eq!(res.unwrap(), 47.0);
        assert_eq!(out.matches(PROMPT).count(), 2);
    }

    #[test]
    fn reprompts_on_non_positive() {
        let (res, out) = read("0\n-47\n47\n");
        assert_eq!(res.unwrap(), 47.0);
        assert_eq!(out.matches(NOT_POSITIVE).count(), 2);
    }

    #[test]
    fn rejects_infinities() {
        let (res, out) = read("inf\nNaN\n3.3\n");
        assert_eq!(res.unwrap(), 3.3);
        assert_eq!(out.matches(NOT_A_NUMBER).count(), 2);
    }

    #[test]
    fn end_of_input_fails() {
        let (res, _) = read("nope\n");
        assert!(matches!(res, Err(RCalcError::EndOfInput)));
        let (res, _) = read("");
        assert!(matches!(res, Err(RCalcError::EndOfInput)));
    }

    #[test]
    fn parse_desired_checks_sign() {
        assert_eq!(parse_desired(" 100 ").unwrap(), 100.0);
        assert!(matches!(parse_desired("0"), Err(RCalcError::InvalidInput(_))));
        assert!(matches!(parse_desired("inf"), Err(RCalcError::InvalidInput(_))));
    }
}
