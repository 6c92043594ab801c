//! # Workflows Module
//!
//! The highest-level, user-facing layer: file-level operations tying the
//! `engine` and `core` layers together. Each workflow reads its inputs,
//! runs the pure logic below it, and persists or returns the result.

pub mod frame;
pub mod plot;
pub mod simulation;
