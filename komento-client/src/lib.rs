mod display;
pub use display::{display_rows, DisplayRow, DELETED_PLACEHOLDER};

mod forest;
pub use forest::{build_comment_tree, CommentForest, CommentNode, NodeId};

mod fuzz;

pub mod api {
    pub use komento_api::*;
}
