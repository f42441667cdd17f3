use uuid::Uuid;

use crate::Error;

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub String);

impl CommentId {
    /// Mint a fresh identifier. Ids stay opaque strings everywhere else;
    /// nothing may parse structure back out of them.
    pub fn generate() -> CommentId {
        CommentId(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> CommentId {
        CommentId(String::from(s))
    }
}

/// One stored comment record.
///
/// Deletion is a tombstone: the record stays in the store so replies can
/// keep hanging off it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,

    /// Id of the comment this one replies to; absent for thread roots.
    #[serde(default)]
    pub parent_id: Option<CommentId>,

    #[serde(default)]
    pub is_deleted: bool,
}

/// Payload for creating a comment. The id is minted client-side so the
/// caller can refer to the comment before the store round-trips.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub id: CommentId,
    pub text: String,
    pub parent_id: Option<CommentId>,
}

impl NewComment {
    pub fn new(text: String, parent_id: Option<CommentId>) -> NewComment {
        NewComment {
            id: CommentId::generate(),
            text,
            parent_id,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.text.is_empty() {
            return Err(Error::EmptyText);
        }
        crate::validate_string(&self.text)?;
        crate::validate_string(&self.id.0)?;
        if let Some(parent) = &self.parent_id {
            crate::validate_string(&parent.0)?;
        }
        Ok(())
    }
}

impl From<NewComment> for Comment {
    fn from(c: NewComment) -> Comment {
        Comment {
            id: c.id,
            text: c.text,
            parent_id: c.parent_id,
            is_deleted: false,
        }
    }
}
