use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use circlescan_core::consts::DEFAULT_EXTRACT_DIR;
use circlescan_core::detection::{detect, DetectionParameters};
use circlescan_core::extract::extract;
use circlescan_core::io::image_io::{load_image, save_extracted};
use circlescan_core::types::Circle;
use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{json, Value};

use super::params::DetectionArgs;

#[derive(Args)]
pub struct ExtractArgs {
    /// Input image
    pub file: PathBuf,

    #[command(flatten)]
    pub detection: DetectionArgs,

    /// Directory for the extracted circle images
    #[arg(short = 'd', long, default_value = DEFAULT_EXTRACT_DIR)]
    pub dir: PathBuf,

    /// Print one JSON record per extracted circle instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ExtractArgs) -> Result<()> {
    let params = args.detection.apply(&DetectionParameters::default())?;
    let image = load_image(&args.file)?;
    let result = detect(&image, &params)?;

    if result.is_empty() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&extract_record(&[], &[]))?);
        } else {
            println!("No circles detected!");
        }
        return Ok(());
    }

    let crops = extract(&image, &result);
    let paths = write_crops(&crops, &args.dir, !args.json)?;
    if args.json {
        let record = extract_record(result.circles(), &paths);
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("Extracted {} circles to {}/", crops.len(), args.dir.display());
    }
    Ok(())
}

/// JSON record for `extract --json`. Circle ids are 1-based, in detection order.
fn extract_record(circles: &[Circle], paths: &[PathBuf]) -> Value {
    if circles.is_empty() {
        return json!({
            "success": false,
            "message": "No circles detected",
            "count": 0,
        });
    }
    let items: Vec<Value> = circles
        .iter()
        .zip(paths)
        .enumerate()
        .map(|(i, (c, path))| {
            json!({
                "id": i + 1,
                "center": { "x": c.x, "y": c.y },
                "radius": c.radius,
                "path": path.display().to_string(),
            })
        })
        .collect();
    json!({
        "success": true,
        "message": format!("Extracted {} circles", items.len()),
        "count": items.len(),
        "circles": items,
    })
}

/// Save crops, with a progress bar when `show_progress` is set. Shared with `run`.
pub fn write_crops(crops: &[RgbImage], dir: &Path, show_progress: bool) -> Result<Vec<PathBuf>> {
    let pb = if show_progress {
        ProgressBar::new(crops.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Saving circles");

    let paths = save_extracted(crops, dir, |written| pb.set_position(written as u64))
        .with_context(|| format!("Failed to write circles to {}", dir.display()))?;

    pb.finish_with_message("Done");
    Ok(paths)
}
