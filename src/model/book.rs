use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub name: String,

    /// Id of the writing [`super::Author`]. Not checked against the author collection.
    #[serde(rename = "authorId")]
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    /// Overlay the supplied fields. The id never changes.
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(author_id) = patch.author_id {
            self.author_id = author_id;
        }
    }
}

/// Fields an update may replace on a [`Book`]; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub name: Option<String>,
    pub author_id: Option<i32>,
}

impl BookPatch {
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_author_id(mut self, author_id: Option<i32>) -> Self {
        self.author_id = author_id;
        self
    }
}
