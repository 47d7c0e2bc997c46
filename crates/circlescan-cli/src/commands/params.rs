use anyhow::Result;
use clap::Args;
use circlescan_core::detection::DetectionParameters;

/// Detection parameter overrides shared by every detecting subcommand.
///
/// Unset flags keep the value of the base parameters (defaults, or the
/// config file for `run`).
#[derive(Args, Debug, Default)]
pub struct DetectionArgs {
    /// Smallest radius searched, in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub min_radius: Option<i64>,

    /// Largest radius searched, in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub max_radius: Option<i64>,

    /// Inverse accumulator resolution (1 = full resolution)
    #[arg(long)]
    pub dp: Option<f64>,

    /// Minimum distance between accepted centers, in pixels
    #[arg(long)]
    pub min_dist: Option<u32>,

    /// Upper Canny threshold; the lower one is half of it
    #[arg(long)]
    pub param1: Option<f64>,

    /// Accumulator vote threshold
    #[arg(long)]
    pub param2: Option<f64>,
}

impl DetectionArgs {
    pub fn apply(&self, base: &DetectionParameters) -> Result<DetectionParameters> {
        let mut params = base.clone();
        if let Some(dp) = self.dp {
            params.dp = dp;
        }
        if let Some(min_dist) = self.min_dist {
            params.min_dist = min_dist;
        }
        if let Some(param1) = self.param1 {
            params.param1 = param1;
        }
        if let Some(param2) = self.param2 {
            params.param2 = param2;
        }
        if self.min_radius.is_some() || self.max_radius.is_some() {
            let min = self.min_radius.unwrap_or(params.min_radius as i64);
            let max = self.max_radius.unwrap_or(params.max_radius as i64);
            params = params.with_radius_range(min, max)?;
        }
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_base() {
        let base = DetectionParameters::default();
        assert_eq!(DetectionArgs::default().apply(&base).unwrap(), base);
    }

    #[test]
    fn test_single_radius_override() {
        let args = DetectionArgs {
            max_radius: Some(60),
            ..Default::default()
        };
        let params = args.apply(&DetectionParameters::default()).unwrap();
        assert_eq!(params.min_radius, 10);
        assert_eq!(params.max_radius, 60);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let args = DetectionArgs {
            min_radius: Some(-3),
            ..Default::default()
        };
        assert!(args.apply(&DetectionParameters::default()).is_err());
    }

    #[test]
    fn test_zero_dp_rejected() {
        let args = DetectionArgs {
            dp: Some(0.0),
            ..Default::default()
        };
        assert!(args.apply(&DetectionParameters::default()).is_err());
    }
}
