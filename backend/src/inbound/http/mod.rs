//! HTTP inbound adapter exposing REST endpoints.

pub mod blog;
pub mod contact;
pub mod content;
pub mod error;
pub mod health;
pub mod state;
#[cfg(test)]
mod test_support;
mod validation;

pub use error::{ApiError, ApiResult};
pub use state::HttpState;

use actix_web::web;

/// Register the first-party and content-proxy endpoints under `/api/v1`.
///
/// The caller supplies [`HttpState`] as app data and wraps the app in the
/// trace middleware; this only wires routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(contact::submit_contact)
            .service(blog::create_blog_post)
            .service(blog::get_blog_post)
            .service(blog::list_blog_posts)
            .service(content::list_remote_posts)
            .service(content::get_remote_post)
            .service(content::list_services)
            .service(content::list_testimonials)
            .service(content::list_pages)
            .service(content::get_page),
    );
}
