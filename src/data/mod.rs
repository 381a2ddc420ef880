//! Core data structures: points, the Bernstein basis and Bezier curves.

pub mod bernstein;
pub mod curve;
pub mod macros;
pub mod point;

pub use bernstein::{binomial, pascal_row, BernsteinBasis};
pub use curve::{evaluate, BezierCurve, BezierCurve2, BezierCurve3};
pub use point::{Point, Point3, PointN};
