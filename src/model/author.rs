use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl Author {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Overlay the supplied fields. The id never changes.
    pub fn apply(&mut self, patch: AuthorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

/// Fields an update may replace on an [`Author`]; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub name: Option<String>,
}

impl AuthorPatch {
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_id() {
        let mut author = Author::new(2, "J. R. R. Tolkien");
        author.apply(AuthorPatch::default().with_name(Some("New Name".to_string())));
        assert_eq!(author, Author::new(2, "New Name"));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut author = Author::new(3, "Brent Weeks");
        author.apply(AuthorPatch::default());
        assert_eq!(author.name, "Brent Weeks");
    }
}
