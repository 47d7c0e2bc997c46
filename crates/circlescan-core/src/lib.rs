pub mod consts;
pub mod detection;
pub mod error;
pub mod extract;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod stats;
pub mod types;

pub use detection::{detect, prepare, DetectionParameters};
pub use error::{CircleError, ErrorKind, Result};
pub use extract::extract;
pub use render::annotate;
pub use stats::{summarize, CircleStatistics};
pub use types::{Circle, DetectionResult};
