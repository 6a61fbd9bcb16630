//! Blockmind Labs site backend.
//!
//! A small actix-web service behind the marketing site: it stores contact
//! submissions and first-party blog posts in a process-local content store,
//! and proxies display content (posts, services, testimonials, pages) from
//! a remote Strapi CMS with a degrade-to-empty policy.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request trace middleware re-exported for app assembly.
pub use middleware::Trace;
