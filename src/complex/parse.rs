//! Complex-literal parsing
//!
//! Accepts the forms an interactive front end produces: `5`, `-2.5e3`, `i`,
//! `-i`, `2j`, `3+2j`, `1-4i`, `1e-3+0.5j`, with either `i` or `j` as the
//! imaginary marker (case-insensitive), optional internal whitespace, and an
//! optional pair of surrounding parentheses (`(1+0j)` is how pre-filled grid
//! cells often arrive). Real-number components are whatever
//! [`f64::from_str`](std::str::FromStr) accepts.

use std::str::FromStr;

use super::Complex;
use crate::error::{Error, Result};

/// Parse a string token into a [`Complex`] scalar.
///
/// Fails with [`Error::InvalidComplex`] when the token is not a complex
/// literal: empty input, stray characters, multiple imaginary markers, or a
/// malformed number.
///
/// ```
/// use classr::complex::{parse_complex, Complex};
///
/// assert_eq!(parse_complex("3+2j").unwrap(), Complex::new(3.0, 2.0));
/// assert_eq!(parse_complex("-i").unwrap(), Complex::new(0.0, -1.0));
/// assert!(parse_complex("abc").is_err());
/// ```
pub fn parse_complex(token: &str) -> Result<Complex> {
    let cleaned: String = token
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    let cleaned = strip_parens(&cleaned);

    let parsed = match cleaned {
        "i" => Some(Complex::I),
        "-i" => Some(-Complex::I),
        other => parse_literal(other),
    };
    parsed.ok_or_else(|| Error::InvalidComplex {
        token: token.trim().to_string(),
    })
}

impl FromStr for Complex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_complex(s)
    }
}

/// Strip one matching pair of surrounding parentheses, if present.
fn strip_parens(s: &str) -> &str {
    s.strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(s)
}

/// Parse `a`, `bi`, `a+bi`, or `a-bi` from a cleaned (lowercased,
/// whitespace-free) token. Returns `None` on any grammar violation.
fn parse_literal(s: &str) -> Option<Complex> {
    if s.is_empty() {
        return None;
    }

    match split_terms(s) {
        Some((re_part, im_part)) => {
            // `im_part` keeps its leading sign and must carry the marker.
            let coeff = strip_marker(im_part)?;
            let re = f64::from_str(re_part).ok()?;
            let im = imaginary_coefficient(coeff)?;
            Some(Complex::new(re, im))
        }
        None => match strip_marker(s) {
            Some(coeff) => {
                let im = imaginary_coefficient(coeff)?;
                Some(Complex::new(0.0, im))
            }
            None => f64::from_str(s).ok().map(Complex::from),
        },
    }
}

/// Split `a±bi` at the sign separating the real and imaginary terms.
///
/// The separator is the last `+`/`-` past position 0 that is not an exponent
/// sign (one directly preceded by `e`). Returns `None` for single-term
/// tokens.
fn split_terms(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let mut split = None;
    for (idx, &b) in bytes.iter().enumerate().skip(1) {
        if (b == b'+' || b == b'-') && bytes[idx - 1] != b'e' {
            split = Some(idx);
        }
    }
    split.map(|idx| (&s[..idx], &s[idx..]))
}

/// Strip a single trailing imaginary marker (`i` or `j`).
fn strip_marker(s: &str) -> Option<&str> {
    s.strip_suffix('i').or_else(|| s.strip_suffix('j'))
}

/// Evaluate an imaginary-term coefficient. An empty or sign-only coefficient
/// means an implicit ±1 (`j`, `3+j`, `-j`).
fn imaginary_coefficient(coeff: &str) -> Option<f64> {
    match coeff {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => f64::from_str(coeff).ok(),
    }
}
