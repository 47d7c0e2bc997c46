use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use circlescan_core::detection::{detect, DetectionParameters};
use circlescan_core::io::image_io::{load_image, save_png};
use circlescan_core::render::annotate;

use super::params::DetectionArgs;

#[derive(Args)]
pub struct AnnotateArgs {
    /// Input image
    pub file: PathBuf,

    #[command(flatten)]
    pub detection: DetectionArgs,

    /// Output PNG path
    #[arg(short, long, default_value = "annotated.png")]
    pub output: PathBuf,
}

pub fn run(args: &AnnotateArgs) -> Result<()> {
    let params = args.detection.apply(&DetectionParameters::default())?;
    let image = load_image(&args.file)?;
    let result = detect(&image, &params)?;

    let annotated = annotate(&image, &result);
    save_png(&annotated, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Annotated {} circle(s), saved to {}",
        result.len(),
        args.output.display()
    );
    Ok(())
}
