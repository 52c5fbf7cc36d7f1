//! Common utilities for the Tether positioning engine.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored terminal output for degenerate geometry

pub mod warning;
