//! Random control points for experiments and property checks.

use crate::data::{BezierCurve, PointN};
use crate::error::{BezierError, BezierResult};
use nalgebra::SVector;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draw `count` points whose coordinates are normally distributed around
/// the origin with standard deviation `spread`
pub fn random_control_points<const D: usize, R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    spread: f64,
) -> BezierResult<Vec<PointN<D>>> {
    let normal = Normal::new(0.0, spread)
        .map_err(|e| BezierError::InvalidArgument(format!("invalid spread {}: {}", spread, e)))?;
    Ok((0..count)
        .map(|_| PointN::from(SVector::<f64, D>::from_fn(|_, _| normal.sample(&mut *rng))))
        .collect())
}

/// A random curve of the given degree
pub fn random_curve<const D: usize, R: Rng + ?Sized>(
    rng: &mut R,
    degree: usize,
    spread: f64,
) -> BezierResult<BezierCurve<D>> {
    BezierCurve::new(random_control_points(rng, degree + 1, spread)?)
}
