//! Tabular model of a detector log's internal tree.
//!
//! One [`HierarchyRow`] is produced per tree node, in pre-order
//! traversal sequence. The row's `path` is the unique key across a
//! single file's summary.

/// Kind of a node encountered during traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Container node with no data payload.
    Group,
    /// Leaf node carrying a typed, shaped array of values.
    Dataset,
    /// Any other addressable entry (committed datatypes, dangling links).
    Other,
}

impl NodeKind {
    /// Label used in the summary table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Group => "Group",
            NodeKind::Dataset => "Dataset",
            NodeKind::Other => "Other",
        }
    }
}

/// One summary row per tree node.
///
/// Groups leave size, shape, and element type blank; datasets populate
/// all three; unknown nodes populate the element type only when it can
/// be determined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HierarchyRow {
    /// Full path of the node within the file, without a leading slash.
    pub path: String,
    pub kind: NodeKind,
    /// Element count; always `product(shape)` when present.
    pub size: Option<usize>,
    /// Ordered dimension sizes.
    pub shape: Option<Vec<usize>>,
    /// Element type tag; empty when not determinable.
    pub element_type: String,
}

impl HierarchyRow {
    /// Row for a container node.
    #[must_use]
    pub fn group(path: String) -> Self {
        Self {
            path,
            kind: NodeKind::Group,
            size: None,
            shape: None,
            element_type: String::new(),
        }
    }

    /// Row for a dataset node. The element count is derived from the
    /// shape, keeping `size == product(shape)` by construction.
    #[must_use]
    pub fn dataset(path: String, shape: Vec<usize>, element_type: String) -> Self {
        let size = shape.iter().product();
        Self {
            path,
            kind: NodeKind::Dataset,
            size: Some(size),
            shape: Some(shape),
            element_type,
        }
    }

    /// Row for a node that is neither a group nor a dataset.
    #[must_use]
    pub fn other(path: String, element_type: String) -> Self {
        Self {
            path,
            kind: NodeKind::Other,
            size: None,
            shape: None,
            element_type,
        }
    }

    /// Size column text; blank when the size is unknown.
    #[must_use]
    pub fn size_field(&self) -> String {
        self.size.map(|s| s.to_string()).unwrap_or_default()
    }

    /// Shape column text in tuple notation: `()`, `(512,)`, `(2, 3)`.
    #[must_use]
    pub fn shape_field(&self) -> String {
        match &self.shape {
            None => String::new(),
            Some(dims) => match dims.as_slice() {
                [] => "()".to_string(),
                [only] => format!("({only},)"),
                many => {
                    let joined = many
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("({joined})")
                }
            },
        }
    }
}
