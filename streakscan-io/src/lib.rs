//! streakscan-io: HDF5 access and artifact writing for streakscan.
//!
//! This crate reads detector logs via hdf5-metno and writes the two
//! per-file artifacts: the CSV hierarchy summary and the rendered PNG
//! streak image.
//!

mod error;
pub mod reader;
pub mod render;
pub mod streak;
pub mod summary;
pub mod walk;

pub use error::{Error, Result};
pub use reader::DetectorLog;
pub use render::{render_png, IMAGE_TITLE};
pub use streak::{extract_streak, StreakPaths};
pub use summary::write_summary;
pub use walk::walk_hierarchy;
