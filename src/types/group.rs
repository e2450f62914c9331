//! Token group tree nodes.

/// A named node in the group tree.
///
/// Groups exist only to give tokens a namespace path; the identifier
/// resolver walks the parent chain to build human-readable names. Root
/// groups anchor a token kind's namespace and contribute no path segment.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenGroup {
    pub id: String,
    pub name: String,
    /// Parent group id; `None` for roots.
    pub parent_id: Option<String>,
    pub is_root: bool,
}

impl TokenGroup {
    /// A root group for a token kind's namespace.
    pub fn root(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            is_root: true,
        }
    }

    /// A nested group under `parent_id`.
    pub fn nested(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: Some(parent_id.into()),
            is_root: false,
        }
    }
}

/// Find a group by id in a group list.
pub fn find_group<'a>(groups: &'a [TokenGroup], id: &str) -> Option<&'a TokenGroup> {
    groups.iter().find(|g| g.id == id)
}
