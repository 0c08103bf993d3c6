//! CLI library components for the one-hot encoder.

pub mod logging;
pub mod pipeline;
