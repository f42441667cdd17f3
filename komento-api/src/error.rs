use crate::CommentId;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Comment id already used {0}")]
    IdAlreadyUsed(CommentId),

    #[error("Unknown comment {0}")]
    UnknownComment(CommentId),

    #[error("Comment text must not be empty")]
    EmptyText,

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),
}
