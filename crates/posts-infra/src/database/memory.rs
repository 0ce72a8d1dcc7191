//! In-memory post repository - a test double for the hosted store; the server never selects it.

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::{NewPost, Post};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

struct Table {
    rows: Vec<Post>,
    next_id: i64,
}

/// In-memory post table behind an async RwLock.
///
/// Assigns sequential ids starting at 1. Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();
        // Same-instant inserts fall back to insertion order.
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let post = post.into_post(table.next_id);
        table.next_id += 1;
        table.rows.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, RepoError> {
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}
