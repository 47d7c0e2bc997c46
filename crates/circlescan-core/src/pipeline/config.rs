use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_EXTRACT_DIR;
use crate::detection::DetectionParameters;
use crate::error::{CircleError, Result};
use crate::render::AnnotationStyle;

/// Everything one pipeline invocation needs besides the image itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Where the annotated image is written, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Run the extraction stage.
    #[serde(default)]
    pub extract: bool,
    /// Directory receiving `circle_<n>.png` files when extracting.
    #[serde(default = "default_extract_dir")]
    pub extract_dir: PathBuf,
    #[serde(default)]
    pub detection: DetectionParameters,
    #[serde(default)]
    pub annotation: AnnotationStyle,
}

fn default_extract_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXTRACT_DIR)
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output: None,
            extract: false,
            extract_dir: default_extract_dir(),
            detection: DetectionParameters::default(),
            annotation: AnnotationStyle::default(),
        }
    }
}

impl PipelineConfig {
    /// Load and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CircleError::Config(format!("Failed to read config file '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            CircleError::Config(msg) => {
                CircleError::Config(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: PipelineConfig =
            toml::from_str(content).map_err(|e| CircleError::Config(e.to_string()))?;
        config.detection.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CircleError::Config(format!("Failed to serialize config: {e}")))
    }
}
