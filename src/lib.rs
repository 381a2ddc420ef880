// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::bernstein::{binomial, BernsteinBasis};
pub use data::curve::{evaluate, BezierCurve, BezierCurve2, BezierCurve3};
pub use data::point::{Point, Point3, PointN};
pub use error::{BezierError, BezierResult};
