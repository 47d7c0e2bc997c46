use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DP, DEFAULT_MAX_RADIUS, DEFAULT_MIN_DIST, DEFAULT_MIN_RADIUS, DEFAULT_PARAM1,
    DEFAULT_PARAM2,
};
use crate::error::{CircleError, Result};

/// Parameters of a single Hough-gradient circle search.
///
/// Passed by reference into every [`detect`](super::detect) call; the
/// detector keeps no configuration of its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionParameters {
    /// Inverse ratio of accumulator resolution to image resolution.
    #[serde(default = "default_dp")]
    pub dp: f64,
    /// Minimum distance between accepted circle centers, in pixels.
    #[serde(default = "default_min_dist")]
    pub min_dist: u32,
    /// Upper Canny threshold; the lower one is half of it.
    #[serde(default = "default_param1")]
    pub param1: f64,
    /// Vote threshold a center (and its radius support) must exceed.
    #[serde(default = "default_param2")]
    pub param2: f64,
    #[serde(default = "default_min_radius")]
    pub min_radius: u32,
    #[serde(default = "default_max_radius")]
    pub max_radius: u32,
}

fn default_dp() -> f64 {
    DEFAULT_DP
}
fn default_min_dist() -> u32 {
    DEFAULT_MIN_DIST
}
fn default_param1() -> f64 {
    DEFAULT_PARAM1
}
fn default_param2() -> f64 {
    DEFAULT_PARAM2
}
fn default_min_radius() -> u32 {
    DEFAULT_MIN_RADIUS
}
fn default_max_radius() -> u32 {
    DEFAULT_MAX_RADIUS
}

impl Default for DetectionParameters {
    fn default() -> Self {
        Self {
            dp: DEFAULT_DP,
            min_dist: DEFAULT_MIN_DIST,
            param1: DEFAULT_PARAM1,
            param2: DEFAULT_PARAM2,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

impl DetectionParameters {
    /// Copy of these parameters with the radius range replaced.
    ///
    /// Accepts signed values because overrides usually come straight from a
    /// request or command line; negative bounds are rejected here.
    pub fn with_radius_range(&self, min_radius: i64, max_radius: i64) -> Result<Self> {
        if min_radius < 0 || max_radius < 0 {
            return Err(CircleError::InvalidParameters(format!(
                "radius bounds must be non-negative (got {min_radius}..{max_radius})"
            )));
        }
        let to_u32 = |v: i64| {
            u32::try_from(v).map_err(|_| {
                CircleError::InvalidParameters(format!("radius bound {v} is too large"))
            })
        };
        let params = Self {
            min_radius: to_u32(min_radius)?,
            max_radius: to_u32(max_radius)?,
            ..self.clone()
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every invariant. Called by the detector before any work is done.
    pub fn validate(&self) -> Result<()> {
        if !self.dp.is_finite() || self.dp <= 0.0 {
            return Err(CircleError::InvalidParameters(format!(
                "dp must be > 0 (got {})",
                self.dp
            )));
        }
        if self.min_dist == 0 {
            return Err(CircleError::InvalidParameters(
                "min_dist must be > 0".into(),
            ));
        }
        if !self.param1.is_finite() || self.param1 <= 0.0 {
            return Err(CircleError::InvalidParameters(format!(
                "param1 must be > 0 (got {})",
                self.param1
            )));
        }
        if !self.param2.is_finite() || self.param2 <= 0.0 {
            return Err(CircleError::InvalidParameters(format!(
                "param2 must be > 0 (got {})",
                self.param2
            )));
        }
        if self.min_radius > self.max_radius {
            return Err(CircleError::InvalidParameters(format!(
                "min_radius ({}) must not exceed max_radius ({})",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }
}
