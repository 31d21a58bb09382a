//! streakscan-core: Domain types and algorithms for streak-camera log inspection.
//!
//! This crate provides capture-time resolution, pixel-grid reshaping,
//! median filtering, and the tabular hierarchy model. It performs no
//! file I/O.
//!

pub mod error;
pub mod filter;
pub mod grid;
pub mod hierarchy;
pub mod timestamp;

pub use error::{Error, Result};
pub use filter::median_filter;
pub use grid::PixelGrid;
pub use hierarchy::{HierarchyRow, NodeKind};
pub use timestamp::CaptureTime;
