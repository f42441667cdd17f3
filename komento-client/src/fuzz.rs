#![cfg(test)]

use std::collections::{BTreeMap, BTreeSet};

use crate::api::{Comment, CommentId};
use crate::{build_comment_tree, CommentForest, NodeId};

/// Raw fuzz record. Ids are drawn from a tiny space so that parent
/// references actually hit existing records often enough to build deep
/// threads, orphans, and cycles alike.
#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
struct FuzzRecord {
    id: u8,
    parent: Option<u8>,
    deleted: bool,
}

fn to_records(input: &[FuzzRecord]) -> Vec<Comment> {
    // Duplicate ids are a precondition violation the store rejects; drop
    // them here so the shape comparisons below are order-independent.
    let mut seen = BTreeSet::new();
    input
        .iter()
        .filter(|r| seen.insert(r.id))
        .map(|r| Comment {
            id: CommentId(r.id.to_string()),
            text: format!("comment {}", r.id),
            parent_id: r.parent.map(|p| CommentId(p.to_string())),
            is_deleted: r.deleted,
        })
        .collect()
}

/// Order-free view of a forest: the root set plus each node's child set.
fn shape(forest: &CommentForest) -> (BTreeSet<CommentId>, BTreeMap<CommentId, BTreeSet<CommentId>>) {
    let roots = forest
        .roots()
        .iter()
        .map(|&r| forest.get(r).id.clone())
        .collect();
    let mut children = BTreeMap::new();
    let mut stack: Vec<NodeId> = forest.roots().to_vec();
    while let Some(idx) = stack.pop() {
        children.insert(
            forest.get(idx).id.clone(),
            forest
                .children(idx)
                .iter()
                .map(|&c| forest.get(c).id.clone())
                .collect(),
        );
        stack.extend_from_slice(forest.children(idx));
    }
    (roots, children)
}

#[test]
fn shape_is_invariant_under_reordering() {
    bolero::check!()
        .with_type::<Vec<FuzzRecord>>()
        .cloned()
        .for_each(|input| {
            let records = to_records(&input);
            let original = build_comment_tree(&records);

            let mut reordered = records.clone();
            reordered.reverse();
            let reversed = build_comment_tree(&reordered);
            assert_eq!(shape(&original), shape(&reversed));

            if !records.is_empty() {
                let mut rotated = records.clone();
                rotated.rotate_left(records.len() / 2);
                assert_eq!(shape(&original), shape(&build_comment_tree(&rotated)));
            }
        });
}

#[test]
fn every_kept_node_attaches_through_resolvable_parents() {
    bolero::check!()
        .with_type::<Vec<FuzzRecord>>()
        .cloned()
        .for_each(|input| {
            let records = to_records(&input);
            let ids: BTreeSet<CommentId> = records.iter().map(|r| r.id.clone()).collect();
            let forest = build_comment_tree(&records);

            // a record replying to an id outside the set never shows up
            for record in &records {
                if let Some(parent) = &record.parent_id {
                    if !ids.contains(parent) {
                        assert_eq!(forest.find(&record.id), None);
                    }
                }
            }

            // and every node the forest kept has its parent in the forest
            for idx in 0..forest.len() {
                match &forest.get(idx).parent_id {
                    None => assert!(forest.roots().contains(&idx)),
                    Some(parent) => {
                        let parent = forest.find(parent).expect("parent of a kept node is kept");
                        assert!(forest.children(parent).contains(&idx));
                    }
                }
            }
        });
}

#[test]
fn visibility_matches_the_recursive_definition() {
    fn reference(forest: &CommentForest, node: NodeId) -> bool {
        forest.children(node).iter().any(|&child| {
            !forest.get(child).is_deleted || reference(forest, child)
        })
    }

    bolero::check!()
        .with_type::<Vec<FuzzRecord>>()
        .cloned()
        .for_each(|input| {
            let forest = build_comment_tree(&to_records(&input));
            for idx in 0..forest.len() {
                assert_eq!(forest.get(idx).has_visible_children, reference(&forest, idx));
            }
        });
}
