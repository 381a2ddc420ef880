//! View state of the 3D demo: three rotation angles changed by key presses.
//!
//! Rotations are applied like a fixed-function modelview stack that rotates
//! about x, then y, then z, so a point `p` is viewed as `Rx * Ry * Rz * p`.
//! The view then looks down the negative z axis with an orthographic
//! projection, not the 45 degree perspective of a fixed-function demo
//! camera: depth is simply dropped.

use crate::constants::{INITIAL_ROTATION, ROTATION_STEP_DEGREES};
use crate::data::{Point, Point3};
use crate::error::{BezierError, BezierResult};
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Keys that rotate the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationKey {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

impl FromStr for RotationKey {
    type Err = BezierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "pageup" | "page_up" => Ok(Self::PageUp),
            "pagedown" | "page_down" => Ok(Self::PageDown),
            other => Err(BezierError::ParseError(format!(
                "unknown rotation key '{}'",
                other
            ))),
        }
    }
}

/// Rotation angles in degrees about the x, y and z axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub x_rot: f64,
    pub y_rot: f64,
    pub z_rot: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        let (x_rot, y_rot, z_rot) = INITIAL_ROTATION;
        Self {
            x_rot,
            y_rot,
            z_rot,
        }
    }
}

// A single step never moves an angle by more than 360, so one correction suffices
fn wrap_degrees(angle: f64) -> f64 {
    if angle > 360.0 {
        angle - 360.0
    } else if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

impl ViewState {
    pub fn new(x_rot: f64, y_rot: f64, z_rot: f64) -> Self {
        Self {
            x_rot,
            y_rot,
            z_rot,
        }
    }

    /// Apply one key press: up/down tilt about x, left/right turn about y,
    /// page up/down roll about z. Angles stay within [0, 360].
    pub fn rotate(&mut self, key: RotationKey) {
        let step = ROTATION_STEP_DEGREES;
        match key {
            RotationKey::Up => self.x_rot -= step,
            RotationKey::Down => self.x_rot += step,
            RotationKey::Left => self.y_rot -= step,
            RotationKey::Right => self.y_rot += step,
            RotationKey::PageUp => self.z_rot += step,
            RotationKey::PageDown => self.z_rot -= step,
        }
        self.x_rot = wrap_degrees(self.x_rot);
        self.y_rot = wrap_degrees(self.y_rot);
        self.z_rot = wrap_degrees(self.z_rot);
    }

    /// The combined rotation `Rx * Ry * Rz`
    pub fn rotation(&self) -> Rotation3<f64> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.x_rot.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), self.y_rot.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), self.z_rot.to_radians());
        rx * ry * rz
    }

    /// Rotate a point and drop its depth
    pub fn project(&self, point: &Point3) -> Point {
        let rotated = self.rotation() * point;
        Point::new(rotated.x, rotated.y)
    }

    /// Rotate and project a batch of points with a single rotation matrix
    pub fn project_all(&self, points: &[Point3]) -> Vec<Point> {
        let rotation = self.rotation();
        points
            .iter()
            .map(|p| {
                let rotated = &rotation * p;
                Point::new(rotated.x, rotated.y)
            })
            .collect()
    }

    /// Short description shown alongside the rendered scene
    pub fn caption(&self) -> String {
        format!(
            "Rotation: X={:.1}, Y={:.1}, Z={:.1}",
            self.x_rot, self.y_rot, self.z_rot
        )
    }
}

/// Parse a comma or whitespace separated list of key names
pub fn parse_keys(input: &str) -> BezierResult<Vec<RotationKey>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
