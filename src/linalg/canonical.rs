//! Canonicalizer Module
//!
//! Validates raw nested JSON input, converts every entry to an exact rational,
//! and derives a content hash that identifies the matrix by value.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::InvalidMatrixError;
use crate::linalg::Matrix;

/// Largest decimal exponent accepted in `1e<exp>` notation.
const MAX_EXPONENT: u32 = 1000;

// == Canonical Key ==
/// SHA-256 digest of a matrix's dimensions and reduced entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalKey([u8; 32]);

impl CanonicalKey {
    /// Digest of `matrix`. Equal values give equal keys regardless of how the
    /// entries were originally written.
    pub fn of(matrix: &Matrix) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(format!("{}x{};", matrix.rows(), matrix.cols()).as_bytes());
        for row in matrix.iter_rows() {
            for entry in row {
                hasher.update(format!("{}/{};", entry.numer(), entry.denom()).as_bytes());
            }
        }
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// First 8 hex characters, for log lines.
    pub fn short(&self) -> String {
        self.0[..4].iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

// == Canonicalizer ==
/// Turns user-supplied nested values into a validated [`Matrix`].
#[derive(Debug, Clone, Copy)]
pub struct Canonicalizer {
    /// Maximum rows and columns; 0 means unlimited
    max_dimension: usize,
}

impl Canonicalizer {
    pub fn new(max_dimension: usize) -> Self {
        Self { max_dimension }
    }

    /// A canonicalizer without a size cap.
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    /// Validates `raw` and returns the exact matrix with its key.
    ///
    /// Checks run in order: empty, row limit, zero columns, column limit,
    /// ragged rows, then entries in row-major order.
    pub fn canonicalize(
        &self,
        raw: &[Vec<Value>],
    ) -> std::result::Result<(Matrix, CanonicalKey), InvalidMatrixError> {
        let first = raw.first().ok_or(InvalidMatrixError::Empty)?;
        if self.max_dimension > 0 && raw.len() > self.max_dimension {
            return Err(InvalidMatrixError::TooManyRows {
                limit: self.max_dimension,
                found: raw.len(),
            });
        }

        let cols = first.len();
        if cols == 0 {
            return Err(InvalidMatrixError::NoColumns);
        }
        if self.max_dimension > 0 && cols > self.max_dimension {
            return Err(InvalidMatrixError::TooManyColumns {
                limit: self.max_dimension,
                found: cols,
            });
        }

        if let Some((row, found)) = raw
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(InvalidMatrixError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }

        let mut data = Vec::with_capacity(raw.len());
        for (r, row) in raw.iter().enumerate() {
            let parsed = row
                .iter()
                .enumerate()
                .map(|(c, value)| {
                    parse_entry(value).ok_or_else(|| InvalidMatrixError::NonNumeric {
                        row: r,
                        col: c,
                        value: value.to_string(),
                    })
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            data.push(parsed);
        }

        let matrix = Matrix::from_rows_unchecked(data);
        let key = CanonicalKey::of(&matrix);
        Ok((matrix, key))
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(5)
    }
}

// == Entry Parsing ==
/// Converts one JSON value to an exact rational.
///
/// Accepts JSON numbers and strings holding an integer, a decimal (optionally
/// with an exponent), or a fraction `p/q` with nonzero `q`.
pub fn parse_entry(value: &Value) -> Option<BigRational> {
    match value {
        // Number keeps its literal text, so big integers and long decimals are not rounded
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_text(s.trim()),
        _ => None,
    }
}

fn parse_text(s: &str) -> Option<BigRational> {
    match s.split_once('/') {
        Some((num, den)) => {
            let num = parse_decimal(num.trim())?;
            let den = parse_decimal(den.trim())?;
            if den.is_zero() {
                None
            } else {
                Some(num / den)
            }
        }
        None => parse_decimal(s),
    }
}

/// Parses `[+-]digits[.digits][(e|E)[+-]digits]` exactly.
///
/// Either the integer or the fractional digits may be empty, not both.
pub fn parse_decimal(s: &str) -> Option<BigRational> {
    let (negative, rest) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (mantissa, exponent) = match rest.find(|ch: char| ch == 'e' || ch == 'E') {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return None;
    }

    // "A.B" -> (A * 10^k + B) / 10^k with k = len(B)
    let digits: BigInt = format!("{}{}", int_part, frac_part).parse().ok()?;
    let mut numer = digits;
    let mut denom = pow10(frac_part.len() as u32);

    if let Some(exp) = exponent {
        let (exp_negative, exp_digits) = match exp.as_bytes().first()? {
            b'-' => (true, &exp[1..]),
            b'+' => (false, &exp[1..]),
            _ => (false, exp),
        };
        if exp_digits.is_empty() || !all_digits(exp_digits) {
            return None;
        }
        let e: u32 = exp_digits.parse().ok().filter(|&e| e <= MAX_EXPONENT)?;
        if exp_negative {
            denom *= pow10(e);
        } else {
            numer *= pow10(e);
        }
    }

    if negative {
        numer = -numer;
    }
    Some(BigRational::new(numer, denom))
}

fn pow10(k: u32) -> BigInt {
    num_traits::pow(BigInt::from(10), k as usize)
}
