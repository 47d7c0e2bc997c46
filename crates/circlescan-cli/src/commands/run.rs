use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use circlescan_core::io::image_io::{load_image, save_png};
use circlescan_core::pipeline::{
    run_pipeline_reported, PipelineConfig, PipelineStage, ProgressReporter,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::extract::write_crops;
use super::params::DetectionArgs;
use crate::summary::{print_detection_summary, print_run_header};

#[derive(Args)]
pub struct RunArgs {
    /// Input image
    pub file: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub detection: DetectionArgs,

    /// Save the annotated image here
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also save each circle as its own image
    #[arg(short, long)]
    pub extract: bool,

    /// Directory for extracted circles
    #[arg(long)]
    pub extract_dir: Option<PathBuf>,
}

/// Spinner over the pipeline stages.
struct SpinnerReporter {
    pb: ProgressBar,
}

impl ProgressReporter for SpinnerReporter {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.pb.set_message(stage.to_string());
        self.pb.tick();
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let mut config = if let Some(ref config_path) = args.config {
        PipelineConfig::from_file(config_path)
            .with_context(|| format!("Invalid pipeline config {}", config_path.display()))?
    } else {
        PipelineConfig::default()
    };
    config.detection = args.detection.apply(&config.detection)?;
    if args.output.is_some() {
        config.output = args.output.clone();
    }
    if args.extract {
        config.extract = true;
    }
    if let Some(ref dir) = args.extract_dir {
        config.extract_dir = dir.clone();
    }

    debug!(?config, "Pipeline config");
    print_run_header(&args.file, &config);
    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    let reporter = SpinnerReporter { pb };
    let output = run_pipeline_reported(&image, &config, &reporter)?;
    reporter.pb.finish_and_clear();

    print_detection_summary(&args.file, &output.statistics);
    if output.result.is_empty() {
        return Ok(());
    }

    if let Some(ref path) = config.output {
        save_png(&output.annotated, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Output saved to {}", path.display());
    }

    if config.extract {
        let paths = write_crops(&output.extracted, &config.extract_dir, true)?;
        println!(
            "Extracted {} circles to {}/",
            paths.len(),
            config.extract_dir.display()
        );
    }

    Ok(())
}
