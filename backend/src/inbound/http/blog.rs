//! First-party blog endpoints backed by the content store.
//!
//! ```text
//! POST /api/v1/blog-posts
//! GET  /api/v1/blog-posts?limit=2
//! GET  /api/v1/blog-posts/{slug}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{BlogPost, DomainError, NewBlogPost};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{validate_max_chars, validate_min_chars};
use crate::inbound::http::{ApiError, ApiResult};

/// Creation payload for `POST /api/v1/blog-posts`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    /// Post title, at least five characters; the slug derives from it.
    pub title: String,
    /// Post body, at least one hundred characters.
    pub content: String,
    /// Listing summary, at most two hundred characters.
    pub excerpt: String,
    /// Optional cover image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Optional tag list.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Publication flag, defaulting to unpublished.
    #[serde(default)]
    pub published: bool,
    /// Optional SEO title.
    #[serde(default)]
    pub meta_title: Option<String>,
    /// Optional SEO description.
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Optional author override.
    #[serde(default)]
    pub author: Option<String>,
}

/// Query parameters for the post listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPostsQuery {
    /// Maximum number of posts to return, newest first.
    pub limit: Option<usize>,
}

fn validate_post(payload: &CreateBlogPostRequest) -> Result<(), DomainError> {
    validate_min_chars(
        "title",
        &payload.title,
        5,
        "Title must be at least 5 characters",
    )?;
    validate_min_chars(
        "content",
        &payload.content,
        100,
        "Content must be at least 100 characters",
    )?;
    validate_max_chars(
        "excerpt",
        &payload.excerpt,
        200,
        "Excerpt must not exceed 200 characters",
    )
}

/// Create a first-party blog post.
///
/// The store derives the slug from the title and stamps both timestamps.
/// Slug collisions are allowed; two posts with the same title share a slug.
#[utoipa::path(
    post,
    path = "/api/v1/blog-posts",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 201, description = "Post created", body = BlogPost),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["blog"],
    operation_id = "createBlogPost"
)]
#[post("/blog-posts")]
pub async fn create_blog_post(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBlogPostRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    validate_post(&payload)?;

    let post = state
        .store
        .create_blog_post(NewBlogPost {
            title: payload.title,
            content: payload.content,
            excerpt: payload.excerpt,
            cover_image: payload.cover_image,
            tags: payload.tags,
            published: payload.published,
            meta_title: payload.meta_title,
            meta_description: payload.meta_description,
            author: payload.author,
        })
        .await;
    Ok(HttpResponse::Created().json(post))
}

/// List first-party blog posts, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/blog-posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Posts, newest first", body = [BlogPost]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["blog"],
    operation_id = "listBlogPosts"
)]
#[get("/blog-posts")]
pub async fn list_blog_posts(
    state: web::Data<HttpState>,
    query: web::Query<ListPostsQuery>,
) -> web::Json<Vec<BlogPost>> {
    web::Json(state.store.list_blog_posts(query.limit).await)
}

/// Fetch a first-party blog post by slug.
#[utoipa::path(
    get,
    path = "/api/v1/blog-posts/{slug}",
    params(("slug" = String, Path, description = "Post slug derived from the title")),
    responses(
        (status = 200, description = "Matching post", body = BlogPost),
        (status = 404, description = "No post with this slug", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["blog"],
    operation_id = "getBlogPost"
)]
#[get("/blog-posts/{slug}")]
pub async fn get_blog_post(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
) -> ApiResult<web::Json<BlogPost>> {
    let slug = slug.into_inner();
    state
        .store
        .blog_post_by_slug(&slug)
        .await
        .map(web::Json)
        .ok_or_else(|| DomainError::not_found(format!("no blog post with slug {slug}")).into())
}
