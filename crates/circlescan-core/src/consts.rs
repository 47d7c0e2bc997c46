/// Default inverse ratio of accumulator resolution to image resolution.
pub const DEFAULT_DP: f64 = 1.2;

/// Default minimum distance between accepted circle centers (pixels).
pub const DEFAULT_MIN_DIST: u32 = 100;

/// Default upper Canny threshold. The lower threshold is half of this.
pub const DEFAULT_PARAM1: f64 = 50.0;

/// Default accumulator threshold for center and radius acceptance.
pub const DEFAULT_PARAM2: f64 = 30.0;

/// Default smallest radius searched (pixels).
pub const DEFAULT_MIN_RADIUS: u32 = 10;

/// Default largest radius searched (pixels).
pub const DEFAULT_MAX_RADIUS: u32 = 200;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Median blur kernel side length. Must be odd.
pub const MEDIAN_KERNEL_SIZE: u32 = 5;

/// Ratio of the lower Canny hysteresis threshold to the upper one.
pub const CANNY_LOW_RATIO: f64 = 0.5;

/// Gaussian sigma applied before computing gradient directions for voting.
pub const GRADIENT_SIGMA: f32 = 2.0;

/// Smallest accumulator cell size in pixels; finer `dp` values are raised to it.
pub const MIN_DP: f64 = 1.0;

/// Half-size of the square neighbourhood summed when smoothing votes.
pub const VOTE_SMOOTHING_RADIUS: usize = 1;

/// Width, in one-pixel bins, of the sliding window used to estimate a radius.
pub const RADIUS_WINDOW_BINS: usize = 3;

/// Largest move, in pixels per axis, of one center refinement step.
pub const REFINE_STEP: i64 = 2;

/// Upper bound on center refinement steps per candidate.
pub const REFINE_MAX_STEPS: usize = 16;

/// Default outline color (green).
pub const DEFAULT_OUTLINE_COLOR: [u8; 3] = [0, 255, 0];

/// Default outline stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// Default center marker color (red).
pub const DEFAULT_CENTER_COLOR: [u8; 3] = [255, 0, 0];

/// Default center marker radius in pixels.
pub const DEFAULT_CENTER_RADIUS: u32 = 3;

/// Default radius label color (white).
pub const DEFAULT_LABEL_COLOR: [u8; 3] = [255, 255, 255];

/// Default integer scale of the 5x7 label font.
pub const DEFAULT_LABEL_SCALE: u32 = 2;

/// Horizontal offset of the label anchor to the left of the circle center.
pub const LABEL_OFFSET_X: i64 = 20;

/// Vertical gap between the label baseline and the top of the circle.
pub const LABEL_OFFSET_Y: i64 = 10;

/// Default directory for extracted circle images.
pub const DEFAULT_EXTRACT_DIR: &str = "extracted_circles";

/// File name prefix of extracted circle images (`circle_1.png`, ...).
pub const EXTRACTED_FILE_PREFIX: &str = "circle_";
