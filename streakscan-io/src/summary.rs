//! CSV summary of a walked hierarchy.

use std::path::Path;

use csv::Writer;
use streakscan_core::HierarchyRow;

use crate::Result;

/// Fixed header; the leading blank column carries the node path index,
/// `element_type` carries the node kind, and `data_Type` carries the
/// element type tag (historical column naming, kept for downstream
/// consumers of the table).
const HEADER: [&str; 5] = ["", "element_type", "size", "shape", "data_Type"];

/// Writes one row per node, in the given order, overwriting `path`.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_summary<P: AsRef<Path>>(path: P, rows: &[HierarchyRow]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for row in rows {
        let size = row.size_field();
        let shape = row.shape_field();
        writer.write_record([
            row.path.as_str(),
            row.kind.label(),
            size.as_str(),
            shape.as_str(),
            row.element_type.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::ReaderBuilder;
    use streakscan_core::NodeKind;

    #[test]
    fn test_summary_layout() {
        let rows = vec![
            HierarchyRow::group("AwakeEventData".to_string()),
            HierarchyRow::dataset(
                "AwakeEventData/streakImageData".to_string(),
                vec![512, 672],
                "uint16".to_string(),
            ),
            HierarchyRow::other("AwakeEventData/named_type".to_string(), String::new()),
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_hierarchy.csv");
        write_summary(&path, &rows).unwrap();

        let mut reader = ReaderBuilder::new().has_headers(true).from_path(&path).unwrap();
        let header = reader.headers().unwrap().clone();
        assert_eq!(
            header.iter().collect::<Vec<_>>(),
            vec!["", "element_type", "size", "shape", "data_Type"]
        );

        let records: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(records.len(), rows.len());

        assert_eq!(&records[0][0], "AwakeEventData");
        assert_eq!(&records[0][1], NodeKind::Group.label());
        assert_eq!(&records[0][2], "");

        assert_eq!(&records[1][1], "Dataset");
        assert_eq!(&records[1][2], "344064");
        assert_eq!(&records[1][3], "(512, 672)");
        assert_eq!(&records[1][4], "uint16");

        assert_eq!(&records[2][1], "Other");
        assert_eq!(&records[2][4], "");
    }

    #[test]
    fn test_summary_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_hierarchy.csv");

        let first = vec![HierarchyRow::group("a".to_string())];
        let second = vec![HierarchyRow::group("b".to_string())];
        write_summary(&path, &first).unwrap();
        write_summary(&path, &second).unwrap();

        let mut reader = ReaderBuilder::new().from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "b");
    }
}
