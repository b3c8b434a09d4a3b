//! Provides input/output functionality for the text formats exchanged with
//! the driver and the engine.
//!
//! All formats are plain text, whitespace-delimited and newline-separated.
//! Each module implements exactly one side of one format: the driver step
//! file and the two engine result files are read, the two engine input
//! files and the driver result file are written. The formats are external
//! contracts and are reproduced exactly, including field order and the
//! 6-decimal fixed formatting.

pub mod charges;
pub mod gradient;
pub mod point_charges;
pub mod result;
pub mod step;
pub mod structure;
pub mod traits;
