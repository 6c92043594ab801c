//! Axis layout math for the downstream rendering layer.

pub mod ticks;
