use async_trait::async_trait;

use crate::{Comment, CommentId, Error, NewComment};

/// The external collection of comment records.
///
/// Mutations go straight to the store; consumers never patch a derived
/// tree in place but re-derive it from the next full snapshot.
#[async_trait]
pub trait Store {
    /// Every record currently in the store, tombstones included, in
    /// insertion order.
    async fn list_comments(&mut self) -> anyhow::Result<Vec<Comment>>;

    /// Validates the payload and enforces id uniqueness. Whether
    /// `parent_id` resolves is deliberately not checked here: a reply to a
    /// record that never lands simply stays out of every derived tree.
    async fn add_comment(&mut self, comment: NewComment) -> Result<Comment, Error>;

    /// Flip the tombstone flag. The record itself is never removed.
    async fn set_deleted(&mut self, comment: CommentId, now_deleted: bool) -> Result<(), Error>;
}
