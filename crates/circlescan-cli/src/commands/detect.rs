use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use circlescan_core::detection::{detect, DetectionParameters};
use circlescan_core::io::image_io::load_image;
use circlescan_core::stats::summarize;
use serde_json::json;
use tracing::debug;

use super::params::DetectionArgs;
use crate::summary::print_detection_summary;

#[derive(Args)]
pub struct DetectArgs {
    /// Input image (PNG, JPEG, BMP, ...)
    pub file: PathBuf,

    #[command(flatten)]
    pub detection: DetectionArgs,

    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let params = args.detection.apply(&DetectionParameters::default())?;
    debug!(?params, "Detection parameters");
    let image = load_image(&args.file)?;
    let result = detect(&image, &params)?;
    let stats = summarize(&result);

    if args.json {
        let record = if result.is_empty() {
            json!({
                "success": false,
                "message": "No circles detected",
                "count": 0,
            })
        } else {
            json!({
                "success": true,
                "message": format!("Detected {} circles", stats.count),
                "data": stats,
            })
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_detection_summary(&args.file, &stats);
    }

    Ok(())
}
