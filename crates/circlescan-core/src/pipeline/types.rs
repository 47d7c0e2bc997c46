use image::RgbImage;

use crate::stats::CircleStatistics;
use crate::types::DetectionResult;

/// Pipeline processing stage, used for progress reporting and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Detecting,
    Summarizing,
    Annotating,
    Extracting,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Detecting => write!(f, "Detecting circles"),
            Self::Summarizing => write!(f, "Summarizing radii"),
            Self::Annotating => write!(f, "Drawing annotations"),
            Self::Extracting => write!(f, "Extracting circles"),
        }
    }
}

/// Artifacts of one pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub result: DetectionResult,
    pub statistics: CircleStatistics,
    /// Copy of the input with circles drawn on it.
    pub annotated: RgbImage,
    /// One masked crop per circle; empty unless extraction was requested.
    pub extracted: Vec<RgbImage>,
}

/// Progress reporting for the pipeline.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter {
    /// A stage has started. `total_items` is the number of work items in
    /// it (e.g. circles to extract), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
