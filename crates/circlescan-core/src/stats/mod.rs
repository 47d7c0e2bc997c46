use serde::{Deserialize, Serialize};

use crate::types::{Circle, DetectionResult};

/// Radius statistics over one detection result.
///
/// With zero circles only `count` is present; nothing is derived from an
/// empty set and the serialized record is `{"count": 0}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CircleStatistics {
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_radius: Option<u32>,
    /// Population standard deviation (divides by N).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_radius: Option<f64>,
    /// Every circle in detection order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub circles: Vec<Circle>,
}

/// Summarize the radii of a detection result.
pub fn summarize(result: &DetectionResult) -> CircleStatistics {
    let circles = result.circles();
    let count = circles.len();
    if count == 0 {
        return CircleStatistics::default();
    }

    let n = count as f64;
    let mean = circles.iter().map(|c| c.radius as f64).sum::<f64>() / n;
    let var = circles
        .iter()
        .map(|c| (c.radius as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let min = circles.iter().map(|c| c.radius).min();
    let max = circles.iter().map(|c| c.radius).max();

    CircleStatistics {
        count,
        average_radius: Some(mean),
        min_radius: min,
        max_radius: max,
        std_radius: Some(var.sqrt()),
        circles: circles.to_vec(),
    }
}
