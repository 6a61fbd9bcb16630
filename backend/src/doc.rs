//! OpenAPI surface used by Swagger UI and tooling.

use utoipa::OpenApi;

use crate::domain::{
    BlogPost, ContactSubmission, ErrorCode, RemoteMedia, RemotePage, RemotePost, RemoteService,
    RemoteTestimonial,
};
use crate::inbound::http::ApiError;
use crate::inbound::http::blog::CreateBlogPostRequest;
use crate::inbound::http::contact::ContactRequest;

/// Public OpenAPI document for the site backend.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blockmind Labs site API",
        description = "Contact submissions, first-party blog posts, and CMS content proxy."
    ),
    paths(
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::blog::create_blog_post,
        crate::inbound::http::blog::list_blog_posts,
        crate::inbound::http::blog::get_blog_post,
        crate::inbound::http::content::list_remote_posts,
        crate::inbound::http::content::get_remote_post,
        crate::inbound::http::content::list_services,
        crate::inbound::http::content::list_testimonials,
        crate::inbound::http::content::list_pages,
        crate::inbound::http::content::get_page,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ApiError,
        ErrorCode,
        ContactRequest,
        ContactSubmission,
        CreateBlogPostRequest,
        BlogPost,
        RemoteMedia,
        RemotePost,
        RemoteService,
        RemoteTestimonial,
        RemotePage,
    )),
    tags(
        (name = "contact", description = "Contact form submissions"),
        (name = "blog", description = "First-party blog posts"),
        (name = "content", description = "CMS-sourced display content"),
        (name = "health", description = "Orchestration probes"),
    )
)]
pub struct ApiDoc;
