//! CMS-sourced content endpoints with a degrade-to-empty policy.
//!
//! The landing site must render even when the CMS is unreachable, so every
//! remote failure here collapses into "no content": collections become empty
//! lists and singular lookups become 404s, with the real failure logged.
//! This availability-over-correctness tradeoff suits decorative content
//! only; nothing transactional sits behind these routes.

use actix_web::{get, web};
use tracing::warn;

use crate::domain::ports::RemoteContentError;
use crate::domain::{DomainError, RemotePage, RemotePost, RemoteService, RemoteTestimonial};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

fn empty_section<T>(section: &'static str, error: &RemoteContentError) -> Vec<T> {
    warn!(%error, section, "remote content fetch failed; serving empty section");
    Vec::new()
}

fn absent_entry<T>(section: &'static str, error: &RemoteContentError) -> Option<T> {
    warn!(%error, section, "remote content fetch failed; reporting not found");
    None
}

/// List CMS blog posts with related media populated.
#[utoipa::path(
    get,
    path = "/api/v1/content/posts",
    responses(
        (status = 200, description = "CMS posts; empty when the CMS is unreachable", body = [RemotePost])
    ),
    tags = ["content"],
    operation_id = "listRemotePosts"
)]
#[get("/content/posts")]
pub async fn list_remote_posts(state: web::Data<HttpState>) -> web::Json<Vec<RemotePost>> {
    let posts = state
        .remote
        .blog_posts()
        .await
        .unwrap_or_else(|error| empty_section("posts", &error));
    web::Json(posts)
}

/// Fetch one CMS blog post by slug.
#[utoipa::path(
    get,
    path = "/api/v1/content/posts/{slug}",
    params(("slug" = String, Path, description = "CMS-maintained post slug")),
    responses(
        (status = 200, description = "Matching post", body = RemotePost),
        (status = 404, description = "No such post, or the CMS is unreachable", body = ApiError)
    ),
    tags = ["content"],
    operation_id = "getRemotePost"
)]
#[get("/content/posts/{slug}")]
pub async fn get_remote_post(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
) -> ApiResult<web::Json<RemotePost>> {
    let slug = slug.into_inner();
    let post = state
        .remote
        .blog_post(&slug)
        .await
        .unwrap_or_else(|error| absent_entry("posts", &error));
    post.map(web::Json)
        .ok_or_else(|| DomainError::not_found(format!("no CMS post with slug {slug}")).into())
}

/// List services in CMS-maintained display order.
#[utoipa::path(
    get,
    path = "/api/v1/content/services",
    responses(
        (status = 200, description = "Services; empty when the CMS is unreachable", body = [RemoteService])
    ),
    tags = ["content"],
    operation_id = "listServices"
)]
#[get("/content/services")]
pub async fn list_services(state: web::Data<HttpState>) -> web::Json<Vec<RemoteService>> {
    let services = state
        .remote
        .services()
        .await
        .unwrap_or_else(|error| empty_section("services", &error));
    web::Json(services)
}

/// List testimonials with related media populated.
#[utoipa::path(
    get,
    path = "/api/v1/content/testimonials",
    responses(
        (status = 200, description = "Testimonials; empty when the CMS is unreachable", body = [RemoteTestimonial])
    ),
    tags = ["content"],
    operation_id = "listTestimonials"
)]
#[get("/content/testimonials")]
pub async fn list_testimonials(state: web::Data<HttpState>) -> web::Json<Vec<RemoteTestimonial>> {
    let testimonials = state
        .remote
        .testimonials()
        .await
        .unwrap_or_else(|error| empty_section("testimonials", &error));
    web::Json(testimonials)
}

/// List CMS pages.
#[utoipa::path(
    get,
    path = "/api/v1/content/pages",
    responses(
        (status = 200, description = "Pages; empty when the CMS is unreachable", body = [RemotePage])
    ),
    tags = ["content"],
    operation_id = "listPages"
)]
#[get("/content/pages")]
pub async fn list_pages(state: web::Data<HttpState>) -> web::Json<Vec<RemotePage>> {
    let pages = state
        .remote
        .pages()
        .await
        .unwrap_or_else(|error| empty_section("pages", &error));
    web::Json(pages)
}

/// Fetch one CMS page by slug.
#[utoipa::path(
    get,
    path = "/api/v1/content/pages/{slug}",
    params(("slug" = String, Path, description = "CMS-maintained page slug")),
    responses(
        (status = 200, description = "Matching page", body = RemotePage),
        (status = 404, description = "No such page, or the CMS is unreachable", body = ApiError)
    ),
    tags = ["content"],
    operation_id = "getPage"
)]
#[get("/content/pages/{slug}")]
pub async fn get_page(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
) -> ApiResult<web::Json<RemotePage>> {
    let slug = slug.into_inner();
    let page = state
        .remote
        .page(&slug)
        .await
        .unwrap_or_else(|error| absent_entry("pages", &error));
    page.map(web::Json)
        .ok_or_else(|| DomainError::not_found(format!("no page with slug {slug}")).into())
}
