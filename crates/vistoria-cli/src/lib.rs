//! CLI library components for the `vistoria` binary.

pub mod logging;
pub mod pipeline;
