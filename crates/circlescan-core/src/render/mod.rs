pub mod annotate;
pub mod font;

pub use annotate::{annotate, annotate_with_style, AnnotationStyle};
