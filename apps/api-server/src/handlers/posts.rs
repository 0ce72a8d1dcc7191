//! Post handlers. Each one is a single call to the store.

use actix_web::{HttpResponse, web};

use posts_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::validate::ValidatedPost;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!("Fetching all posts");

    let posts = state.posts.list_recent().await?;

    tracing::info!(count = posts.len(), "Fetched posts");
    Ok(HttpResponse::Ok().json(ApiResponse::list(posts)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    ValidatedPost(post): ValidatedPost,
) -> AppResult<HttpResponse> {
    tracing::info!(user_id = post.user_id, "Creating post");

    let created = state.posts.create(post).await?;

    tracing::info!(post_id = created.id, "Post created");
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        created,
        "Post created successfully",
    )))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    tracing::info!(post_id = id, "Fetching post");

    let post = state.posts.find_by_id(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

fn parse_post_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| {
        tracing::warn!(raw_id = %raw, "Rejected post id");
        AppError::Validation("Invalid post ID".to_string())
    })
}
