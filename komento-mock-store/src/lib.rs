use async_trait::async_trait;
use komento_api::{Comment, CommentId, Error, NewComment, Store};
use tokio::sync::mpsc;

/// In-memory comment store, for tests and for driving the derivation
/// without a real backend.
///
/// Records are kept in insertion order, which is the order snapshots hand
/// them back in.
pub struct MockStore {
    comments: Vec<Comment>,
    feeds: Vec<mpsc::UnboundedSender<Vec<Comment>>>,
}

impl MockStore {
    pub fn new() -> MockStore {
        MockStore {
            comments: Vec::new(),
            feeds: Vec::new(),
        }
    }

    /// Watch the record set: every successful mutation pushes the full
    /// snapshot to all live subscribers. Consumers re-derive their view
    /// from each snapshot; there is no incremental protocol.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<Vec<Comment>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.feeds.push(tx);
        rx
    }

    /// Return the current number of records, tombstones included
    pub fn test_num_comments(&self) -> usize {
        self.comments.len()
    }

    fn relay_snapshot(&mut self) {
        let snapshot = self.comments.clone();
        self.feeds
            .retain_mut(|f| matches!(f.send(snapshot.clone()), Ok(())));
    }
}

#[async_trait]
impl Store for MockStore {
    async fn list_comments(&mut self) -> anyhow::Result<Vec<Comment>> {
        Ok(self.comments.clone())
    }

    async fn add_comment(&mut self, comment: NewComment) -> Result<Comment, Error> {
        comment.validate()?;
        if self.comments.iter().any(|c| c.id == comment.id) {
            return Err(Error::IdAlreadyUsed(comment.id));
        }
        let comment = Comment::from(comment);
        self.comments.push(comment.clone());
        self.relay_snapshot();
        Ok(comment)
    }

    async fn set_deleted(&mut self, comment: CommentId, now_deleted: bool) -> Result<(), Error> {
        match self.comments.iter_mut().find(|c| c.id == comment) {
            None => Err(Error::UnknownComment(comment)),
            Some(c) => {
                c.is_deleted = now_deleted;
                self.relay_snapshot();
                Ok(())
            }
        }
    }
}
