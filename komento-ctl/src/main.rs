use std::path::{Path, PathBuf};

use anyhow::Context;
use komento_api::{Comment, CommentId, Error, NewComment, Store};
use komento_client::{build_comment_tree, display_rows};

#[derive(structopt::StructOpt)]
struct Opt {
    /// Path of the JSON file holding the comment records
    #[structopt(short, long, default_value = "comments.json")]
    file: PathBuf,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Add a comment
    Add {
        /// Comment text
        text: String,

        /// Id of the comment this one replies to
        #[structopt(long)]
        parent_id: Option<String>,
    },

    /// Soft-delete a comment, keeping its replies anchored
    Delete {
        /// Id of the comment to tombstone
        id: String,
    },

    /// Restore a soft-deleted comment
    Undelete {
        /// Id of the comment to restore
        id: String,
    },

    /// Render the thread
    Show,
}

/// `Store` over a flat JSON file, one array of records in insertion order.
struct JsonStore {
    path: PathBuf,
    comments: Vec<Comment>,
}

impl JsonStore {
    fn open(path: &Path) -> anyhow::Result<JsonStore> {
        let comments = match std::fs::read(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("reading comments file {}", path.display()))
            }
            Ok(data) => serde_json::from_slice(&data)
                .with_context(|| format!("parsing comments file {}", path.display()))?,
        };
        Ok(JsonStore {
            path: path.to_owned(),
            comments,
        })
    }

    fn save(&self) -> anyhow::Result<()> {
        let data = serde_json::to_vec_pretty(&self.comments).context("serializing comments")?;
        std::fs::write(&self.path, data)
            .with_context(|| format!("writing comments file {}", self.path.display()))
    }
}

#[async_trait::async_trait]
impl Store for JsonStore {
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
        Ok(comment)
    }

    async fn set_deleted(&mut self, comment: CommentId, now_deleted: bool) -> Result<(), Error> {
        match self.comments.iter_mut().find(|c| c.id == comment) {
            None => Err(Error::UnknownComment(comment)),
            Some(c) => {
                c.is_deleted = now_deleted;
                Ok(())
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt::init();
    }

    let opt = <Opt as structopt::StructOpt>::from_args();
    let mut store = JsonStore::open(&opt.file)?;

    match opt.cmd {
        Command::Add { text, parent_id } => {
            let comment = store
                .add_comment(NewComment::new(text, parent_id.map(CommentId)))
                .await
                .context("adding comment")?;
            store.save()?;
            println!("{}", comment.id);
        }
        Command::Delete { id } => {
            store
                .set_deleted(CommentId(id), true)
                .await
                .context("deleting comment")?;
            store.save()?;
        }
        Command::Undelete { id } => {
            store
                .set_deleted(CommentId(id), false)
                .await
                .context("restoring comment")?;
            store.save()?;
        }
        Command::Show => {
            let records = store.list_comments().await?;
            for row in display_rows(&build_comment_tree(&records)) {
                println!("{}{}  ({})", "  ".repeat(row.depth), row.text, row.id);
            }
        }
    }

    Ok(())
}
