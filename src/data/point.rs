//! Point types used as control points and curve samples.
//!
//! Points are `nalgebra` points with `f64` coordinates, so affine transforms,
//! distances and approximate comparisons come for free.

/// A point with `D` coordinates
pub type PointN<const D: usize> = nalgebra::Point<f64, D>;

/// A 2D point
pub type Point = nalgebra::Point2<f64>;

/// A 3D point
pub type Point3 = nalgebra::Point3<f64>;

/// Euclidean distance between two points
pub fn distance<const D: usize>(a: &PointN<D>, b: &PointN<D>) -> f64 {
    nalgebra::distance(a, b)
}

/// Lift a 2D point into the z = 0 plane
pub fn lift(point: &Point) -> Point3 {
    Point3::new(point.x, point.y, 0.0)
}
