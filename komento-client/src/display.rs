use crate::api::CommentId;
use crate::forest::{CommentForest, NodeId};

/// Text shown in place of a deleted comment that still anchors visible
/// replies.
pub const DELETED_PLACEHOLDER: &str = "[deleted]";

/// One renderable line of a thread.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayRow {
    pub id: CommentId,

    /// Nesting level, 0 for thread roots.
    pub depth: usize,

    /// The comment text, or [`DELETED_PLACEHOLDER`] for a tombstone.
    pub text: String,

    pub is_placeholder: bool,

    /// Tombstones offer no delete action.
    pub can_delete: bool,
}

/// Project an annotated forest into the rows a renderer would paint, in
/// display order.
///
/// A deleted comment with no visible descendant disappears together with
/// its whole subtree. One that still anchors visible replies stays as a
/// placeholder, so a chain of deleted ancestors remains exactly as long as
/// needed to reach the surviving replies.
pub fn display_rows(forest: &CommentForest) -> Vec<DisplayRow> {
    let mut rows = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = forest.roots().iter().rev().map(|&r| (r, 0)).collect();
    while let Some((idx, depth)) = stack.pop() {
        let node = forest.get(idx);
        if node.is_deleted && !node.has_visible_children {
            continue;
        }
        rows.push(DisplayRow {
            id: node.id.clone(),
            depth,
            text: match node.is_deleted {
                true => String::from(DELETED_PLACEHOLDER),
                false => node.text.clone(),
            },
            is_placeholder: node.is_deleted,
            can_delete: !node.is_deleted,
        });
        stack.extend(forest.children(idx).iter().rev().map(|&c| (c, depth + 1)));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Comment;
    use crate::build_comment_tree;

    fn record(id: &str, parent: Option<&str>, deleted: bool) -> Comment {
        Comment {
            id: CommentId::from(id),
            text: format!("comment {id}"),
            parent_id: parent.map(CommentId::from),
            is_deleted: deleted,
        }
    }

    fn rows_for(records: &[Comment]) -> Vec<DisplayRow> {
        display_rows(&build_comment_tree(records))
    }

    fn ids(rows: &[DisplayRow]) -> Vec<String> {
        rows.iter().map(|r| r.id.0.clone()).collect()
    }

    #[test]
    fn thread_renders_depth_first_with_depths() {
        let rows = rows_for(&[
            record("1", None, false),
            record("2", None, false),
            record("1a", Some("1"), false),
            record("1a-i", Some("1a"), false),
            record("1b", Some("1"), false),
        ]);
        assert_eq!(ids(&rows), vec!["1", "1a", "1a-i", "1b", "2"]);
        assert_eq!(
            rows.iter().map(|r| r.depth).collect::<Vec<_>>(),
            vec![0, 1, 2, 1, 0]
        );
        assert!(rows.iter().all(|r| !r.is_placeholder && r.can_delete));
    }

    #[test]
    fn deleted_leaf_is_suppressed() {
        let rows = rows_for(&[record("1", None, false), record("2", Some("1"), true)]);
        assert_eq!(ids(&rows), vec!["1"]);
    }

    #[test]
    fn deleted_parent_with_live_reply_becomes_placeholder() {
        let rows = rows_for(&[record("1", None, true), record("2", Some("1"), false)]);
        assert_eq!(ids(&rows), vec!["1", "2"]);
        assert_eq!(rows[0].text, DELETED_PLACEHOLDER);
        assert!(rows[0].is_placeholder);
        assert!(!rows[0].can_delete);
        assert_eq!(rows[1].text, "comment 2");
        assert!(rows[1].can_delete);
    }

    #[test]
    fn fully_deleted_chain_collapses_away() {
        let rows = rows_for(&[
            record("1", None, true),
            record("2", Some("1"), true),
            record("3", Some("2"), true),
        ]);
        assert!(rows.is_empty());
    }

    #[test]
    fn placeholder_chain_reaches_down_to_the_survivor() {
        let rows = rows_for(&[
            record("1", None, true),
            record("2", Some("1"), true),
            record("3", Some("2"), false),
        ]);
        assert_eq!(ids(&rows), vec!["1", "2", "3"]);
        assert!(rows[0].is_placeholder);
        assert!(rows[1].is_placeholder);
        assert!(!rows[2].is_placeholder);
        assert_eq!(rows[2].depth, 2);
    }

    #[test]
    fn dead_subtree_under_live_node_is_pruned_from_rows() {
        let rows = rows_for(&[
            record("1", None, false),
            record("2", Some("1"), true),
            record("3", Some("2"), true),
            record("4", Some("1"), false),
        ]);
        assert_eq!(ids(&rows), vec!["1", "4"]);
    }
}
