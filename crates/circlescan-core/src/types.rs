use serde::{Deserialize, Serialize};

/// A detected circle in integer pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Circle {
    /// Center column.
    pub x: u32,
    /// Center row.
    pub y: u32,
    pub radius: u32,
}

impl Circle {
    pub fn new(x: u32, y: u32, radius: u32) -> Self {
        Self { x, y, radius }
    }
}

/// Circles in the order the detector accepted them.
///
/// The order carries no meaning beyond "accepted earlier"; it is not sorted
/// by position, radius or confidence. An empty result is the normal outcome
/// for an image without circles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionResult {
    circles: Vec<Circle>,
}

impl DetectionResult {
    pub fn new(circles: Vec<Circle>) -> Self {
        Self { circles }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
        self.circles.iter()
    }

    pub fn into_inner(self) -> Vec<Circle> {
        self.circles
    }
}

impl From<Vec<Circle>> for DetectionResult {
    fn from(circles: Vec<Circle>) -> Self {
        Self::new(circles)
    }
}

impl<'a> IntoIterator for &'a DetectionResult {
    type Item = &'a Circle;
    type IntoIter = std::slice::Iter<'a, Circle>;

    fn into_iter(self) -> Self::IntoIter {
        self.circles.iter()
    }
}
