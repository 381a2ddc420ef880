//! Bezier curves of arbitrary degree in 2D or 3D.
//!
//! Evaluation uses the Bernstein form directly:
//! `B(t) = sum_i C(n, i) * t^i * (1 - t)^(n - i) * P_i`.

use crate::data::bernstein::BernsteinBasis;
use crate::data::point::PointN;
use crate::error::{BezierError, BezierResult};
use nalgebra::SVector;

/// Evaluate the Bezier curve defined by `control_points` at parameter `t`
///
/// The degree is `control_points.len() - 1`. `t` is conventionally in
/// [0, 1]; values outside are extrapolated, not rejected. NaN and infinite
/// inputs propagate to the output.
///
/// # Errors
///
/// Returns [`BezierError::InvalidArgument`] when `control_points` is empty.
///
/// ```rust
/// use bezier_curves::{evaluate, pt};
///
/// let points = [pt!(-4, 0), pt!(-2, 4), pt!(2, 4), pt!(4, 0)];
/// assert_eq!(evaluate(&points, 0.5).unwrap(), pt!(0, 3));
/// ```
pub fn evaluate<const D: usize>(control_points: &[PointN<D>], t: f64) -> BezierResult<PointN<D>> {
    if control_points.is_empty() {
        return Err(BezierError::InvalidArgument(
            "at least one control point is required".to_string(),
        ));
    }
    BernsteinBasis::new(control_points.len() - 1, t).combine(control_points)
}

/// A Bezier curve with at least one control point
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve<const D: usize> {
    control_points: Vec<PointN<D>>,
}

/// A planar Bezier curve
pub type BezierCurve2 = BezierCurve<2>;

/// A spatial Bezier curve
pub type BezierCurve3 = BezierCurve<3>;

impl<const D: usize> BezierCurve<D> {
    /// Create a curve from its control points
    ///
    /// Fails with [`BezierError::InvalidArgument`] if `control_points` is empty.
    pub fn new(control_points: Vec<PointN<D>>) -> BezierResult<Self> {
        if control_points.is_empty() {
            return Err(BezierError::InvalidArgument(
                "a bezier curve needs at least one control point".to_string(),
            ));
        }
        Ok(Self { control_points })
    }

    /// Create a curve from a first control point and any number of following ones
    pub fn from_nonempty(first: PointN<D>, rest: impl IntoIterator<Item = PointN<D>>) -> Self {
        let control_points = std::iter::once(first).chain(rest).collect();
        Self { control_points }
    }

    /// Polynomial degree: number of control points minus one
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[PointN<D>] {
        &self.control_points
    }

    /// First control point, which the curve passes through at t = 0
    pub fn start(&self) -> PointN<D> {
        self.control_points[0]
    }

    /// Last control point, which the curve passes through at t = 1
    pub fn end(&self) -> PointN<D> {
        self.control_points[self.control_points.len() - 1]
    }

    /// Get a point on the bezier curve at parameter t
    pub fn point_at(&self, t: f64) -> PointN<D> {
        BernsteinBasis::new(self.degree(), t).accumulate(&self.control_points)
    }

    /// Get a point on the curve by repeated linear interpolation (de Casteljau)
    ///
    /// Mathematically identical to [`point_at`](Self::point_at); useful as an
    /// independent check and numerically steadier for high degrees.
    pub fn point_at_de_casteljau(&self, t: f64) -> PointN<D> {
        let mut work: Vec<SVector<f64, D>> =
            self.control_points.iter().map(|p| p.coords).collect();
        let n = work.len();
        for level in 1..n {
            for i in 0..n - level {
                work[i] = work[i] * (1.0 - t) + work[i + 1] * t;
            }
        }
        PointN::from(work[0])
    }

    /// The same curve traversed backwards: `reversed().point_at(t) == point_at(1 - t)`
    pub fn reversed(&self) -> Self {
        let mut control_points = self.control_points.clone();
        control_points.reverse();
        Self { control_points }
    }

    /// Apply a point transform to every control point
    ///
    /// For affine transforms this equals transforming the evaluated curve.
    pub fn map_points<const E: usize>(&self, f: impl Fn(&PointN<D>) -> PointN<E>) -> BezierCurve<E> {
        BezierCurve {
            control_points: self.control_points.iter().map(f).collect(),
        }
    }
}
