//! Contract definitions for drift detection.
//!
//! This module contains trait definitions that providers must implement.

mod decomposer;
mod outlier_detector;

pub use decomposer::Decomposer;
pub use outlier_detector::OutlierDetector;
