use std::collections::{hash_map, HashMap};

use crate::api::{Comment, CommentId};

/// Index of a node inside its [`CommentForest`] arena.
pub type NodeId = usize;

/// One comment resolved into its thread position. Only meaningful inside
/// the forest it was built into; nodes are not shared across derivations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentNode {
    pub id: CommentId,
    pub text: String,
    pub parent_id: Option<CommentId>,
    pub is_deleted: bool,

    /// Whether some descendant still counts as displayable. Computed by
    /// [`CommentForest::annotate_visibility`], false until then.
    pub has_visible_children: bool,

    /// Children in input order, as arena indices.
    children: Vec<NodeId>,
}

impl CommentNode {
    fn from_record(record: &Comment) -> CommentNode {
        CommentNode {
            id: record.id.clone(),
            text: record.text.clone(),
            parent_id: record.parent_id.clone(),
            is_deleted: record.is_deleted,
            has_visible_children: false,
            children: Vec::new(),
        }
    }
}

/// One snapshot's worth of comment records resolved into disjoint trees.
///
/// Nodes live in a flat arena addressed by [`NodeId`]; each node holds the
/// indices of its children and `roots` lists the top-level comments. The
/// forest is rebuilt from scratch for every snapshot and discarded after
/// the consuming render, never updated in place.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentForest {
    nodes: Vec<CommentNode>,
    roots: Vec<NodeId>,
}

impl CommentForest {
    /// Resolve a flat record set into trees.
    ///
    /// Records arrive in any order, children possibly before their parent.
    /// A record whose `parent_id` does not resolve is dropped, together
    /// with everything that could only attach through it; so is any record
    /// whose parent chain loops back on itself. Duplicate ids keep the
    /// first record seen.
    pub fn build(records: &[Comment]) -> CommentForest {
        // One arena slot per record, indexed by id, so that children
        // listed before their parent still resolve in the linking pass.
        let mut by_id = HashMap::with_capacity(records.len());
        let mut nodes = Vec::with_capacity(records.len());
        for record in records {
            match by_id.entry(record.id.clone()) {
                hash_map::Entry::Occupied(_) => {
                    tracing::warn!(id = %record.id, "duplicate comment id, keeping the first record");
                }
                hash_map::Entry::Vacant(entry) => {
                    entry.insert(nodes.len());
                    nodes.push(CommentNode::from_record(record));
                }
            }
        }

        // Link each node under its parent, in input order.
        let mut roots = Vec::new();
        for idx in 0..nodes.len() {
            match nodes[idx].parent_id.clone() {
                None => roots.push(idx),
                Some(parent_id) => {
                    if let Some(&parent) = by_id.get(&parent_id) {
                        nodes[parent].children.push(idx);
                    }
                    // An unresolved parent is not an error; the node just
                    // stays unlinked and falls out below.
                }
            }
        }

        Self::keep_reachable(nodes, roots)
    }

    /// Compact the arena down to the nodes reachable from a root.
    ///
    /// Orphans were never linked anywhere, and a parent cycle contains no
    /// root (every member has a parent), so both end up unreachable here.
    /// Afterwards every node has exactly one parent and every parent chain
    /// ends at a root, which is what lets the traversals below run without
    /// a visited set.
    fn keep_reachable(nodes: Vec<CommentNode>, roots: Vec<NodeId>) -> CommentForest {
        let mut reachable = vec![false; nodes.len()];
        let mut stack = roots.clone();
        while let Some(idx) = stack.pop() {
            if reachable[idx] {
                continue;
            }
            reachable[idx] = true;
            stack.extend_from_slice(&nodes[idx].children);
        }

        let mut remap = vec![NodeId::MAX; nodes.len()];
        let mut kept = Vec::with_capacity(nodes.len());
        for (idx, node) in nodes.into_iter().enumerate() {
            if reachable[idx] {
                remap[idx] = kept.len();
                kept.push(node);
            } else {
                tracing::warn!(id = %node.id, "dropping comment with no path to a thread root");
            }
        }
        // Children of a kept node are reachable through it, so the remap
        // is total on everything still referenced.
        for node in &mut kept {
            for child in &mut node.children {
                *child = remap[*child];
            }
        }
        let roots = roots.into_iter().map(|root| remap[root]).collect();

        CommentForest { nodes: kept, roots }
    }

    /// Mark every node with whether one of its descendants must still be
    /// displayed: a child counts if it is not deleted, or transitively has
    /// a displayable descendant of its own.
    ///
    /// Post-order with an explicit work stack; thread depth is unbounded
    /// and must not be tied to the call stack.
    pub fn annotate_visibility(&mut self) {
        enum Walk {
            Enter(NodeId),
            Exit(NodeId),
        }

        let mut stack: Vec<Walk> = self.roots.iter().rev().map(|&r| Walk::Enter(r)).collect();
        while let Some(step) = stack.pop() {
            match step {
                Walk::Enter(idx) => {
                    stack.push(Walk::Exit(idx));
                    stack.extend(self.nodes[idx].children.iter().rev().map(|&c| Walk::Enter(c)));
                }
                Walk::Exit(idx) => {
                    let visible = self.nodes[idx].children.iter().any(|&child| {
                        let child = &self.nodes[child];
                        !child.is_deleted || child.has_visible_children
                    });
                    self.nodes[idx].has_visible_children = visible;
                }
            }
        }
    }

    /// Top-level comments, in input order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, node: NodeId) -> &CommentNode {
        &self.nodes[node]
    }

    /// Replies to `node`, in input order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    /// Number of comments in the forest, dropped records excluded.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find(&self, id: &CommentId) -> Option<NodeId> {
        self.nodes.iter().position(|node| node.id == *id)
    }
}

/// Full derivation for one snapshot: resolve the records into trees, then
/// annotate visibility. The one entry point the rendering layer needs.
pub fn build_comment_tree(records: &[Comment]) -> CommentForest {
    let mut forest = CommentForest::build(records);
    forest.annotate_visibility();
    forest
}
