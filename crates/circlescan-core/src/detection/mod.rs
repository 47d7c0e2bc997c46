pub mod accumulator;
pub mod config;
pub mod detector;
pub mod preprocess;
pub mod radius;
pub mod refine;

pub use config::DetectionParameters;
pub use detector::{detect, detect_prepared};
pub use preprocess::prepare;
