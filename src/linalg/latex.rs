//! LaTeX rendering for matrices and basis vectors.

use num_rational::BigRational;
use num_traits::Signed;

use crate::linalg::Matrix;

/// Renders one rational: integers plainly, fractions as `\frac{p}{q}`.
pub fn rational(value: &BigRational) -> String {
    if value.is_integer() {
        return value.numer().to_string();
    }
    let sign = if value.is_negative() { "-" } else { "" };
    format!(
        "{}\\frac{{{}}}{{{}}}",
        sign,
        value.numer().abs(),
        value.denom()
    )
}

/// Renders a matrix as a `bmatrix` environment.
pub fn matrix(m: &Matrix) -> String {
    let body = m
        .iter_rows()
        .map(|row| row.iter().map(rational).collect::<Vec<_>>().join(" & "))
        .collect::<Vec<_>>()
        .join("\\\\");
    wrap(&body)
}

/// Renders a vector as a single column.
pub fn column_vector(v: &[BigRational]) -> String {
    let body = v.iter().map(rational).collect::<Vec<_>>().join("\\\\");
    wrap(&body)
}

fn wrap(body: &str) -> String {
    format!("\\begin{{bmatrix}}{}\\end{{bmatrix}}", body)
}
