//! Pre-order traversal of a detector log's tree.

use hdf5::types::TypeDescriptor;
use hdf5::{Dataset, File, Group};
use log::warn;
use streakscan_core::HierarchyRow;

use crate::Result;

/// Walks the whole file and produces one row per reachable node.
///
/// Nodes appear in natural member order, parents before children. A
/// dataset whose element type cannot be read gets a blank type tag
/// instead of failing the walk.
///
/// # Errors
/// Returns an error if the tree itself cannot be enumerated.
pub fn walk_hierarchy(file: &File) -> Result<Vec<HierarchyRow>> {
    let mut rows = Vec::new();
    visit_group(file, "", &mut rows)?;
    Ok(rows)
}

fn visit_group(group: &Group, prefix: &str, rows: &mut Vec<HierarchyRow>) -> Result<()> {
    for name in group.member_names()? {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };

        if let Ok(child) = group.group(&name) {
            rows.push(HierarchyRow::group(path.clone()));
            visit_group(&child, &path, rows)?;
        } else if let Ok(dataset) = group.dataset(&name) {
            let element_type = describe_dtype(&dataset, &path);
            rows.push(HierarchyRow::dataset(path, dataset.shape(), element_type));
        } else {
            // committed datatypes, dangling links
            rows.push(HierarchyRow::other(path, String::new()));
        }
    }
    Ok(())
}

fn describe_dtype(dataset: &Dataset, path: &str) -> String {
    match dataset.dtype().and_then(|dt| dt.to_descriptor()) {
        Ok(desc) => dtype_label(&desc),
        Err(e) => {
            warn!("element type unavailable for {path}: {e}");
            String::new()
        }
    }
}

/// Short numpy-style tag for a type descriptor.
fn dtype_label(desc: &TypeDescriptor) -> String {
    use hdf5::types::{FloatSize, IntSize, TypeDescriptor as Td};
    match desc {
        Td::Integer(IntSize::U1) => "int8".to_string(),
        Td::Integer(IntSize::U2) => "int16".to_string(),
        Td::Integer(IntSize::U4) => "int32".to_string(),
        Td::Integer(IntSize::U8) => "int64".to_string(),
        Td::Unsigned(IntSize::U1) => "uint8".to_string(),
        Td::Unsigned(IntSize::U2) => "uint16".to_string(),
        Td::Unsigned(IntSize::U4) => "uint32".to_string(),
        Td::Unsigned(IntSize::U8) => "uint64".to_string(),
        Td::Float(FloatSize::U4) => "float32".to_string(),
        Td::Float(FloatSize::U8) => "float64".to_string(),
        Td::Boolean => "bool".to_string(),
        Td::Enum(_) => "enum".to_string(),
        Td::Compound(_) => "compound".to_string(),
        Td::FixedArray(inner, n) => format!("[{}; {n}]", dtype_label(inner)),
        Td::VarLenArray(inner) => format!("[{}]", dtype_label(inner)),
        Td::FixedAscii(n) | Td::FixedUnicode(n) => format!("str{n}"),
        Td::VarLenAscii | Td::VarLenUnicode => "str".to_string(),
        _ => "unknown".to_string(),
    }
}
