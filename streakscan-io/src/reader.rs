//! Read-only access to a detector log file.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use hdf5::File;
use streakscan_core::{HierarchyRow, PixelGrid};

use crate::streak::{extract_streak, StreakPaths};
use crate::walk::walk_hierarchy;
use crate::Result;

/// An open detector log.
///
/// The underlying HDF5 handle is opened read-only and released when the
/// log is dropped.
pub struct DetectorLog {
    file: File,
    path: PathBuf,
}

impl DetectorLog {
    /// Opens a detector log read-only.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened as HDF5.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        Ok(Self { file, path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filename component; empty if the path has none.
    #[must_use]
    pub fn filename(&self) -> &str {
        self.path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
    }

    /// One row per tree node, in pre-order traversal sequence.
    ///
    /// # Errors
    /// Returns an error if the tree cannot be walked.
    pub fn hierarchy(&self) -> Result<Vec<HierarchyRow>> {
        walk_hierarchy(&self.file)
    }

    /// The reshaped streak image.
    ///
    /// # Errors
    /// Returns an error if a dataset is missing or the sample count does
    /// not match the stored dimensions.
    pub fn streak(&self, paths: &StreakPaths) -> Result<PixelGrid> {
        extract_streak(&self.file, paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use ndarray::ArrayView1;
    use streakscan_core::NodeKind;
    use tempfile::NamedTempFile;

    fn write_sample(path: &Path, samples: &[u16], width: i32, height: i32) {
        let file = File::create(path).unwrap();
        let event = file.create_group("AwakeEventData").unwrap();
        let streak = event.create_group("XMPP-STREAK").unwrap();
        let image = streak.create_group("StreakImage").unwrap();

        let data = image
            .new_dataset::<u16>()
            .shape((samples.len(),))
            .create("streakImageData")
            .unwrap();
        data.write(ArrayView1::from(samples)).unwrap();

        let width_ds = image
            .new_dataset::<i32>()
            .shape((1,))
            .create("streakImageWidth")
            .unwrap();
        width_ds.write(ArrayView1::from(&[width][..])).unwrap();

        let height_ds = image
            .new_dataset::<i32>()
            .shape((1,))
            .create("streakImageHeight")
            .unwrap();
        height_ds.write(ArrayView1::from(&[height][..])).unwrap();
    }

    #[test]
    fn test_hierarchy_preorder_rows() {
        let tmp = NamedTempFile::new().unwrap();
        write_sample(tmp.path(), &[1, 2, 3, 4, 5, 6], 3, 2);

        let log = DetectorLog::open(tmp.path()).unwrap();
        let rows = log.hierarchy().unwrap();

        let paths: Vec<&str> = rows.iter().map(|row| row.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "AwakeEventData",
                "AwakeEventData/XMPP-STREAK",
                "AwakeEventData/XMPP-STREAK/StreakImage",
                "AwakeEventData/XMPP-STREAK/StreakImage/streakImageData",
                "AwakeEventData/XMPP-STREAK/StreakImage/streakImageHeight",
                "AwakeEventData/XMPP-STREAK/StreakImage/streakImageWidth",
            ]
        );

        assert_eq!(rows[0].kind, NodeKind::Group);
        assert_eq!(rows[0].size_field(), "");

        let data_row = &rows[3];
        assert_eq!(data_row.kind, NodeKind::Dataset);
        assert_eq!(data_row.size, Some(6));
        assert_eq!(data_row.shape_field(), "(6,)");
        assert_eq!(data_row.element_type, "uint16");

        let height_row = &rows[4];
        assert_eq!(height_row.element_type, "int32");
        assert_eq!(height_row.size, Some(1));
    }

    #[test]
    fn test_hierarchy_paths_unique() {
        let tmp = NamedTempFile::new().unwrap();
        write_sample(tmp.path(), &[0; 4], 2, 2);

        let log = DetectorLog::open(tmp.path()).unwrap();
        let rows = log.hierarchy().unwrap();
        let mut paths: Vec<&str> = rows.iter().map(|row| row.path.as_str()).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn test_streak_extraction() {
        let tmp = NamedTempFile::new().unwrap();
        write_sample(tmp.path(), &[1, 2, 3, 4, 5, 6], 3, 2);

        let log = DetectorLog::open(tmp.path()).unwrap();
        let grid = log.streak(&StreakPaths::default()).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 0), 1.0);
        assert_eq!(grid.get(1, 2), 6.0);
    }

    #[test]
    fn test_streak_shape_mismatch_reported() {
        let tmp = NamedTempFile::new().unwrap();
        // 6 samples but the stored dimensions declare 4 x 2
        write_sample(tmp.path(), &[1, 2, 3, 4, 5, 6], 4, 2);

        let log = DetectorLog::open(tmp.path()).unwrap();
        let err = log.streak(&StreakPaths::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(streakscan_core::Error::ShapeMismatch { len: 6, .. })
        ));
    }

    #[test]
    fn test_missing_streak_datasets() {
        let tmp = NamedTempFile::new().unwrap();
        let file = File::create(tmp.path()).unwrap();
        file.create_group("AwakeEventData").unwrap();
        drop(file);

        let log = DetectorLog::open(tmp.path()).unwrap();
        let err = log.streak(&StreakPaths::default()).unwrap_err();
        assert!(matches!(err, Error::MissingDataset(_)));
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let tmp = NamedTempFile::new().unwrap();
        write_sample(tmp.path(), &[1, 2, 3, 4, 5, 6], -3, 2);

        let log = DetectorLog::open(tmp.path()).unwrap();
        let err = log.streak(&StreakPaths::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { value: -3, .. }));
    }

    #[test]
    fn test_filename_component() {
        let log_path = Path::new("/tmp/150000000000000000_run.h5");
        assert_eq!(
            log_path.file_name().and_then(OsStr::to_str),
            Some("150000000000000000_run.h5")
        );

        let tmp = NamedTempFile::new().unwrap();
        write_sample(tmp.path(), &[0], 1, 1);
        let log = DetectorLog::open(tmp.path()).unwrap();
        assert!(!log.filename().is_empty());
    }
}
