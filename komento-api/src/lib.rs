mod comment;
pub use comment::{Comment, CommentId, NewComment};

mod error;
pub use error::Error;

mod store;
pub use store::Store;

pub fn validate_string(s: &str) -> Result<(), Error> {
    match s.contains('\0') {
        true => Err(Error::NullByteInString(String::from(s))),
        false => Ok(()),
    }
}
