//! Bernstein basis polynomials and binomial coefficients.
//!
//! The weight of control point `i` in a degree `n` curve is
//! `C(n, i) * t^i * (1 - t)^(n - i)`. Binomial coefficients are computed with
//! the multiplicative recurrence, never with factorials, so high degrees do
//! not overflow.

use crate::data::point::PointN;
use crate::error::{BezierError, BezierResult};
use nalgebra::SVector;

/// Binomial coefficient "n choose k" as a float
///
/// Uses `C(n, k) = prod_{i=1..k} (n - k + i) / i` over `u128`, which stays
/// exact up to roughly n = 125 and falls back to floating point past that.
/// Returns 0 when `k > n`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);

    let mut exact: u128 = 1;
    for i in 1..=k {
        // exact holds C(n - k + i - 1, i - 1), so the product divides by i
        match exact.checked_mul((n - k + i) as u128) {
            Some(product) => exact = product / i as u128,
            None => return binomial_float(n, k),
        }
    }
    exact as f64
}

fn binomial_float(n: usize, k: usize) -> f64 {
    (1..=k).fold(1.0, |acc, i| acc * (n - k + i) as f64 / i as f64)
}

/// Row `n` of Pascal's triangle: `[C(n, 0), C(n, 1), ..., C(n, n)]`
///
/// Entries are exact while they fit in `u128` and agree with [`binomial`];
/// past that the recurrence continues in floating point and eventually
/// reaches infinity (around n = 1030).
pub fn pascal_row(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    let mut exact: Option<u128> = Some(1);
    let mut float = 1.0;
    row.push(1.0);
    for k in 1..=n {
        // C(n, k) = C(n, k - 1) * (n - k + 1) / k, and the product divides by k
        exact = exact
            .and_then(|c| c.checked_mul((n - k + 1) as u128))
            .map(|product| product / k as u128);
        float = match exact {
            Some(c) => c as f64,
            None => float * (n - k + 1) as f64 / k as f64,
        };
        row.push(float);
    }
    row
}

/// Bernstein weights as `exp(ln C(n, i) + i ln|t| + (n - i) ln|1 - t|)`
///
/// Used once the binomials no longer fit in an `f64`. Signs are restored
/// separately so extrapolation outside [0, 1] still works.
fn log_space_weights(degree: usize, t: f64) -> Vec<f64> {
    let s = 1.0 - t;
    let (ln_t, ln_s) = (t.abs().ln(), s.abs().ln());
    let mut ln_c = 0.0;
    (0..=degree)
        .map(|i| {
            if i > 0 {
                ln_c += ((degree - i + 1) as f64).ln() - (i as f64).ln();
            }
            let negative = (t < 0.0 && i % 2 == 1) != (s < 0.0 && (degree - i) % 2 == 1);
            let magnitude = (ln_c + i as f64 * ln_t + (degree - i) as f64 * ln_s).exp();
            if negative {
                -magnitude
            } else {
                magnitude
            }
        })
        .collect()
}

fn endpoint_weights(degree: usize, index: usize) -> Vec<f64> {
    let mut weights = vec![0.0; degree + 1];
    weights[index] = 1.0;
    weights
}

/// The `n + 1` Bernstein weights of a degree `n` curve at a fixed `t`
///
/// Computing the weights once and reusing them for every control point (and
/// for every curve of the same degree) avoids recomputing powers and
/// binomials per coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct BernsteinBasis {
    t: f64,
    weights: Vec<f64>,
}

impl BernsteinBasis {
    /// Compute the basis of the given degree at parameter `t`
    ///
    /// `t` outside [0, 1] is accepted and extrapolates. `0^0` is taken as 1,
    /// so at `t = 0` (resp. `t = 1`) all weight sits on the first (resp. last)
    /// control point.
    pub fn new(degree: usize, t: f64) -> Self {
        if t == 0.0 {
            return Self {
                t,
                weights: endpoint_weights(degree, 0),
            };
        }
        if t == 1.0 {
            return Self {
                t,
                weights: endpoint_weights(degree, degree),
            };
        }

        let row = pascal_row(degree);
        if !row[degree / 2].is_finite() {
            return Self {
                t,
                weights: log_space_weights(degree, t),
            };
        }

        let s = 1.0 - t;
        let weights = row
            .into_iter()
            .enumerate()
            .map(|(i, c)| c * t.powi(i as i32) * s.powi((degree - i) as i32))
            .collect();
        Self { t, weights }
    }

    /// Degree of the curves this basis applies to
    pub fn degree(&self) -> usize {
        self.weights.len() - 1
    }

    /// Parameter value the basis was computed at
    pub fn t(&self) -> f64 {
        self.t
    }

    /// The weights, one per control point
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Blend control points with the weights
    ///
    /// Fails if the number of points does not match `degree + 1`.
    pub fn combine<const D: usize>(&self, points: &[PointN<D>]) -> BezierResult<PointN<D>> {
        if points.len() != self.weights.len() {
            return Err(BezierError::InvalidArgument(format!(
                "basis of degree {} needs {} control points, got {}",
                self.degree(),
                self.weights.len(),
                points.len()
            )));
        }
        Ok(self.accumulate(points))
    }

    /// Blend without checking the point count; extra points or weights are ignored
    pub(crate) fn accumulate<const D: usize>(&self, points: &[PointN<D>]) -> PointN<D> {
        let coords = points
            .iter()
            .zip(&self.weights)
            .fold(SVector::<f64, D>::zeros(), |acc, (p, &w)| acc + p.coords * w);
        PointN::from(coords)
    }
}
