//! JSON scene and view configuration
//!
//! A scene file names the control points of one curve. All points must have
//! the same number of coordinates, either 2 or 3, which decides whether the
//! scene is planar or spatial:
//!
//! ```json
//! {
//!     "name": "arch",
//!     "control_points": [[-4, 0, -2], [-2, 4, 2], [2, 4, 0], [4, 0, 3]],
//!     "spacing": {"count": 100},
//!     "axis_extent": 5.0
//! }
//! ```
//!
//! `name`, `spacing` (default `{"step": 0.01}`) and `axis_extent` (default 5)
//! are optional.
//!
//! # Example
//!
//! ```rust
//! use bezier_curves::modules::parse::json::{AnyScene, SceneConfig};
//!
//! let config = SceneConfig::from_json(r#"{"control_points": [[0, 0], [1, 2], [2, 0]]}"#).unwrap();
//! match config.into_scene().unwrap() {
//!     AnyScene::Planar(scene) => assert_eq!(scene.curve.degree(), 2),
//!     AnyScene::Spatial(_) => unreachable!(),
//! }
//! ```

use crate::constants::{DEFAULT_AXIS_EXTENT, HIGH_DEGREE_WARNING};
use crate::data::{BezierCurve, PointN};
use crate::error::{BezierError, BezierResult};
use crate::modules::sample::SampleSpacing;
use crate::modules::scene::{check_axis_extent, Scene};
use crate::modules::view::ViewState;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_name() -> String {
    "Bézier Curve".to_string()
}

fn default_axis_extent() -> f64 {
    DEFAULT_AXIS_EXTENT
}

/// Scene description as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub control_points: Vec<Vec<f64>>,
    #[serde(default)]
    pub spacing: SampleSpacing,
    #[serde(default = "default_axis_extent")]
    pub axis_extent: f64,
}

/// A scene whose dimension is only known at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AnyScene {
    Planar(Scene<2>),
    Spatial(Scene<3>),
}

impl SceneConfig {
    pub fn from_json(json: &str) -> BezierResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> BezierResult<Self> {
        let path = path.as_ref();
        debug!("loading scene from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn to_json(&self) -> BezierResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Dimension shared by all control points
    pub fn dimension(&self) -> BezierResult<usize> {
        let first = self.control_points.first().ok_or_else(|| {
            BezierError::InvalidArgument("scene has no control points".to_string())
        })?;
        let dimension = first.len();
        if let Some((index, point)) = self
            .control_points
            .iter()
            .enumerate()
            .find(|(_, p)| p.len() != dimension)
        {
            return Err(BezierError::ParseError(format!(
                "control point {} has {} coordinates, expected {}",
                index,
                point.len(),
                dimension
            )));
        }
        Ok(dimension)
    }

    fn validate(&self) -> BezierResult<()> {
        check_axis_extent(self.axis_extent)?;
        self.spacing.t_values()?;
        let degree = self.control_points.len().saturating_sub(1);
        if degree > HIGH_DEGREE_WARNING {
            warn!(
                "scene '{}' has a degree {} curve; sampling cost grows with the degree",
                self.name, degree
            );
        }
        Ok(())
    }

    fn curve<const D: usize>(&self) -> BezierResult<BezierCurve<D>> {
        let points = self
            .control_points
            .iter()
            .map(|coords| {
                <[f64; D]>::try_from(coords.as_slice())
                    .map(|array| PointN::<D>::from(array))
                    .map_err(|_| {
                        BezierError::ParseError(format!(
                            "expected {} coordinates per control point, got {}",
                            D,
                            coords.len()
                        ))
                    })
            })
            .collect::<BezierResult<Vec<_>>>()?;
        BezierCurve::new(points)
    }

    fn scene<const D: usize>(&self) -> BezierResult<Scene<D>> {
        self.validate()?;
        Ok(Scene::new(self.name.clone(), self.curve()?)
            .with_spacing(self.spacing)
            .with_axis_extent(self.axis_extent))
    }

    /// Build a planar scene; fails if the points are not 2D
    pub fn into_scene_2d(self) -> BezierResult<Scene<2>> {
        self.scene()
    }

    /// Build a spatial scene; fails if the points are not 3D
    pub fn into_scene_3d(self) -> BezierResult<Scene<3>> {
        self.scene()
    }

    /// Build a scene of whichever dimension the points have
    pub fn into_scene(self) -> BezierResult<AnyScene> {
        match self.dimension()? {
            2 => Ok(AnyScene::Planar(self.scene()?)),
            3 => Ok(AnyScene::Spatial(self.scene()?)),
            other => Err(BezierError::ParseError(format!(
                "control points must have 2 or 3 coordinates, got {}",
                other
            ))),
        }
    }
}

impl<const D: usize> From<&Scene<D>> for SceneConfig {
    fn from(scene: &Scene<D>) -> Self {
        Self {
            name: scene.name.clone(),
            control_points: scene
                .curve
                .control_points()
                .iter()
                .map(|p| p.coords.iter().copied().collect())
                .collect(),
            spacing: scene.spacing,
            axis_extent: scene.axis_extent,
        }
    }
}

/// Parse a view state such as `{"x_rot": 20.0, "y_rot": 30.0, "z_rot": 0.0}`
pub fn view_state_from_json(json: &str) -> BezierResult<ViewState> {
    Ok(serde_json::from_str(json)?)
}
