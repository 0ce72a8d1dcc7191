//! Post repository backed by a hosted PostgREST endpoint.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use posts_core::domain::{NewPost, Post};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

use super::config::DatabaseConfig;

/// Columns every query projects onto.
const POST_COLUMNS: &str = "id,title,body,user_id,created_at,updated_at";

/// Makes PostgREST answer with a bare object and fail unless exactly one row matches.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// PostgREST code for "no (or more than one) row returned".
const NO_ROWS_CODE: &str = "PGRST116";

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
}

/// PostgREST post repository.
///
/// The HTTP client is built once and shared; every method is a single request.
pub struct PostgrestPostRepository {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl PostgrestPostRepository {
    pub fn new(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let client = Client::builder()
            .build()
            .map_err(|e| RepoError::Unreachable(e.to_string()))?;

        tracing::info!(endpoint = %config.endpoint(), "PostgREST client initialized");

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", POST_COLUMNS)])
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, RepoError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| RepoError::Decode(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(store_error(status, &body))
    }
}

#[async_trait]
impl PostRepository for PostgrestPostRepository {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        tracing::debug!("Selecting posts ordered by created_at desc");

        let request = self
            .request(Method::GET)
            .query(&[("order", "created_at.desc")]);

        Self::send(request).await
    }

    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        tracing::debug!(user_id = post.user_id, "Inserting post");

        let request = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(&post);

        Self::send(request).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, RepoError> {
        tracing::debug!(post_id = id, "Selecting post by id");

        let request = self
            .request(Method::GET)
            .query(&[("id", format!("eq.{id}"))])
            .header(ACCEPT, SINGLE_OBJECT);

        Self::send(request).await
    }
}

fn transport_error(err: reqwest::Error) -> RepoError {
    if err.is_connect() || err.is_timeout() {
        RepoError::Unreachable(err.to_string())
    } else {
        RepoError::query(err.to_string())
    }
}

/// Map a non-2xx PostgREST answer onto the repository taxonomy.
fn store_error(status: StatusCode, body: &str) -> RepoError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) if err.code.as_deref() == Some(NO_ROWS_CODE) => RepoError::NotFound,
        Ok(err) => RepoError::Query {
            code: err.code,
            message: err.message.unwrap_or_else(|| status.to_string()),
        },
        Err(_) if body.trim().is_empty() => RepoError::query(status.to_string()),
        Err(_) => RepoError::query(body.trim()),
    }
}
