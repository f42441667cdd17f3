use komento_api::{Comment, CommentId};
use rand::Rng;

const NUM_ROOTS: usize = 5;
const NUM_REPLIES: usize = 40;

// roughly how many records end up as tombstones or orphans
const TOMBSTONE_ONE_IN: usize = 4;
const ORPHAN_ONE_IN: usize = 25;

const COMMENT_WORD_COUNT: usize = 12;

fn gen_comment_text() -> String {
    lipsum::lipsum_words(COMMENT_WORD_COUNT)
}

fn main() {
    let mut rng = rand::thread_rng();
    let mut comments: Vec<Comment> = Vec::with_capacity(NUM_ROOTS + NUM_REPLIES);

    for i in 0..NUM_ROOTS {
        comments.push(Comment {
            id: CommentId(format!("c{i}")),
            text: gen_comment_text(),
            parent_id: None,
            is_deleted: false,
        });
    }

    for i in NUM_ROOTS..NUM_ROOTS + NUM_REPLIES {
        // replying to any earlier comment yields threads of uneven depth;
        // the occasional reply to a missing id exercises orphan dropping
        let parent = match rng.gen_range(0..ORPHAN_ONE_IN) {
            0 => CommentId(String::from("missing")),
            _ => comments[rng.gen_range(0..comments.len())].id.clone(),
        };
        comments.push(Comment {
            id: CommentId(format!("c{i}")),
            text: gen_comment_text(),
            parent_id: Some(parent),
            is_deleted: rng.gen_range(0..TOMBSTONE_ONE_IN) == 0,
        });
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&comments).expect("serializing comments")
    );
}
