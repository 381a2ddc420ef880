//! Parsing module for scene and view descriptions
//!
//! Now supported format:
//! - JSON:
//!     scenes in the form of
//!     `{"name": "demo", "control_points": [[-4, 0], [-2, 4], [2, 4], [4, 0]], "spacing": {"step": 0.01}}`
//!     and view states in the form of `{"x_rot": 20.0, "y_rot": 30.0, "z_rot": 0.0}`.
//!     See the `json` module for more detailed information on the JSON format.

pub mod json;
