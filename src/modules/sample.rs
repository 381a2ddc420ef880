//! Sampling a curve into a polyline
//!
//! A renderer approximates a curve by evaluating it at a sequence of `t`
//! values, either a fixed step (`t = 0, 0.01, ..., 1`) or a fixed number of
//! evenly spaced values. The Bernstein weights depend only on the degree and
//! `t`, so [`BasisTable`] computes them once per `t` and reuses them for
//! every control point and for every curve of the same degree.
//!
//! # Example
//!
//! ```rust
//! use bezier_curves::{bezier, pt};
//! use bezier_curves::modules::sample::{sample_curve, SampleSpacing};
//!
//! let curve = bezier!([pt!(-4, 0), pt!(-2, 4), pt!(2, 4), pt!(4, 0)]);
//! let polyline = sample_curve(&curve, SampleSpacing::Step(0.01)).unwrap();
//!
//! assert_eq!(polyline.len(), 101);
//! assert_eq!(polyline[0], pt!(-4, 0));
//! assert_eq!(polyline[100], pt!(4, 0));
//! ```

use crate::constants::{DEFAULT_SAMPLE_STEP, EPSILON, MAX_SAMPLES};
use crate::data::{BernsteinBasis, BezierCurve, PointN};
use crate::error::{BezierError, BezierResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// How the parameter range [0, 1] is divided
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSpacing {
    /// `t = 0, step, 2 * step, ...`, always ending with `t = 1`
    Step(f64),
    /// `count` evenly spaced values, both endpoints included
    Count(usize),
}

impl Default for SampleSpacing {
    fn default() -> Self {
        Self::Step(DEFAULT_SAMPLE_STEP)
    }
}

impl SampleSpacing {
    /// The parameter values described by this spacing
    ///
    /// Spacings that would produce more than [`MAX_SAMPLES`] values are
    /// rejected.
    pub fn t_values(&self) -> BezierResult<Vec<f64>> {
        match *self {
            Self::Step(step) => {
                if !step.is_finite() || step <= 0.0 {
                    return Err(BezierError::InvalidArgument(format!(
                        "sample step must be positive and finite, got {}",
                        step
                    )));
                }
                let intervals = (1.0 / step + EPSILON).floor();
                if intervals >= MAX_SAMPLES as f64 {
                    return Err(BezierError::InvalidArgument(format!(
                        "sample step {} yields more than {} samples",
                        step, MAX_SAMPLES
                    )));
                }
                let intervals = intervals as usize;
                let mut t_values: Vec<f64> = (0..=intervals)
                    .map(|i| (i as f64 * step).min(1.0))
                    .collect();
                match t_values.last_mut() {
                    Some(last) if 1.0 - *last < EPSILON => *last = 1.0,
                    _ => t_values.push(1.0),
                }
                Ok(t_values)
            }
            Self::Count(0) => Err(BezierError::InvalidArgument(
                "sample count must be at least 1".to_string(),
            )),
            Self::Count(count) if count > MAX_SAMPLES => Err(BezierError::InvalidArgument(
                format!("sample count {} exceeds {}", count, MAX_SAMPLES),
            )),
            Self::Count(1) => Ok(vec![0.0]),
            Self::Count(count) => Ok((0..count)
                .map(|i| i as f64 / (count - 1) as f64)
                .collect()),
        }
    }
}

/// Bernstein weights of one degree, precomputed for a list of `t` values
#[derive(Debug, Clone)]
pub struct BasisTable {
    degree: usize,
    bases: Vec<BernsteinBasis>,
}

impl BasisTable {
    pub fn new(degree: usize, spacing: SampleSpacing) -> BezierResult<Self> {
        Ok(Self::from_t_values(degree, &spacing.t_values()?))
    }

    pub fn from_t_values(degree: usize, t_values: &[f64]) -> Self {
        let bases = t_values
            .iter()
            .map(|&t| BernsteinBasis::new(degree, t))
            .collect();
        Self { degree, bases }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of samples produced per curve
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn t_values(&self) -> Vec<f64> {
        self.bases.iter().map(BernsteinBasis::t).collect()
    }

    /// Evaluate a curve at every `t` of the table
    ///
    /// Fails if the curve degree differs from the table degree.
    pub fn sample<const D: usize>(&self, curve: &BezierCurve<D>) -> BezierResult<Vec<PointN<D>>> {
        if curve.degree() != self.degree {
            return Err(BezierError::InvalidArgument(format!(
                "basis table of degree {} cannot sample a curve of degree {}",
                self.degree,
                curve.degree()
            )));
        }
        Ok(self
            .bases
            .iter()
            .map(|basis| basis.accumulate(curve.control_points()))
            .collect())
    }
}

/// Sample a curve with the given spacing
pub fn sample_curve<const D: usize>(
    curve: &BezierCurve<D>,
    spacing: SampleSpacing,
) -> BezierResult<Vec<PointN<D>>> {
    let table = BasisTable::new(curve.degree(), spacing)?;
    debug!(
        "sampling degree {} curve at {} parameter values",
        curve.degree(),
        table.len()
    );
    table.sample(curve)
}

/// Sample a curve at specific t values
pub fn sample_at_t_values<const D: usize>(curve: &BezierCurve<D>, t_values: &[f64]) -> Vec<PointN<D>> {
    t_values.iter().map(|&t| curve.point_at(t)).collect()
}
