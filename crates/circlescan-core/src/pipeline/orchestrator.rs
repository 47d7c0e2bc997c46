use image::RgbImage;
use tracing::info;

use crate::detection::detect;
use crate::error::Result;
use crate::extract::extract_one;
use crate::render::annotate_with_style;
use crate::stats::summarize;

use super::config::PipelineConfig;
use super::types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Run detection and every downstream stage on one image.
///
/// Annotation, summary and extraction each read the detection result and
/// the untouched source image; none of them depends on another.
pub fn run_pipeline_reported(
    image: &RgbImage,
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    let (w, h) = image.dimensions();
    info!(width = w, height = h, "Processing image");

    reporter.begin_stage(PipelineStage::Detecting, None);
    let result = detect(image, &config.detection)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Summarizing, None);
    let statistics = summarize(&result);
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Annotating, Some(result.len()));
    let annotated = annotate_with_style(image, &result, &config.annotation);
    reporter.finish_stage();

    let extracted = if config.extract {
        reporter.begin_stage(PipelineStage::Extracting, Some(result.len()));
        let mut crops = Vec::with_capacity(result.len());
        for (i, circle) in result.iter().enumerate() {
            crops.push(extract_one(image, circle));
            reporter.advance(i + 1);
        }
        reporter.finish_stage();
        info!(count = crops.len(), "Extraction complete");
        crops
    } else {
        Vec::new()
    };

    Ok(PipelineOutput {
        result,
        statistics,
        annotated,
        extracted,
    })
}

/// Run the pipeline without progress reporting.
pub fn run_pipeline(image: &RgbImage, config: &PipelineConfig) -> Result<PipelineOutput> {
    run_pipeline_reported(image, config, &NoOpReporter)
}
