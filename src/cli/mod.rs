//! Terminal presentation layer: message styling and report rendering.
//! Renders engine output verbatim; no rounding or clamping happens here.

pub mod output;
pub mod report;
