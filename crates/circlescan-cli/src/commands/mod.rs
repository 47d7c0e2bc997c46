pub mod annotate;
pub mod config;
pub mod detect;
pub mod extract;
pub mod params;
pub mod run;
