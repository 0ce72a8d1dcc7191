use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository - each method is exactly one round trip to the store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest `created_at` first.
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError>;

    /// Insert a post and return the stored row.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Fetch exactly one post. Absent rows are `RepoError::NotFound`.
    async fn find_by_id(&self, id: i64) -> Result<Post, RepoError>;
}
