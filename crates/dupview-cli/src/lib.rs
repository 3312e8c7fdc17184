//! CLI library components for dupview.

pub mod logging;
pub mod render;
