//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters:
//! the process-local content store and the remote CMS. Each trait exposes
//! strongly typed results so adapters map their failures into predictable
//! variants instead of leaking transport errors.

use async_trait::async_trait;
use thiserror::Error;

use super::{
    BlogPost, ContactSubmission, NewBlogPost, NewContactSubmission, NewUser, RecordId, RemotePage,
    RemotePost, RemoteService, RemoteTestimonial, User,
};

/// Process-lifetime storage for users, contact submissions, and first-party
/// blog posts.
///
/// No operation here can fail: there is no I/O and no external call, so
/// "not found" is an absent result rather than an error. Mutations are
/// visible to subsequent reads within the same process immediately.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Assign the next id, stamp the creation time, store the user, and
    /// return the full record. Duplicate emails succeed silently; no
    /// uniqueness check exists.
    async fn create_user(&self, user: NewUser) -> User;

    /// Look up a user by id.
    async fn user(&self, id: RecordId) -> Option<User>;

    /// Linear scan for the first user whose login identifier matches, in
    /// insertion order.
    async fn user_by_username(&self, username: &str) -> Option<User>;

    /// Assign the next id, store the submission, and return the record.
    /// Validation is the inbound adapter's responsibility.
    async fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> ContactSubmission;

    /// Assign the next id, derive the slug from the title, stamp both
    /// timestamps with the current time, store, and return the record.
    async fn create_blog_post(&self, post: NewBlogPost) -> BlogPost;

    /// Look up a post by id.
    async fn blog_post(&self, id: RecordId) -> Option<BlogPost>;

    /// Linear scan for the first post with a matching slug. Slugs are not
    /// unique; the earliest match wins.
    async fn blog_post_by_slug(&self, slug: &str) -> Option<BlogPost>;

    /// All posts sorted by publish time descending, truncated to `limit`
    /// when given.
    async fn list_blog_posts(&self, limit: Option<usize>) -> Vec<BlogPost>;
}

/// Failures surfaced by the remote content adapter.
///
/// The tag keeps "fetch failed" distinguishable from "no content exists" at
/// the port boundary; callers that want the site to render regardless
/// collapse both into empty sections themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteContentError {
    /// Connection-level failure reaching the CMS.
    #[error("remote content transport failed: {message}")]
    Transport {
        /// Adapter-supplied description of the failure.
        message: String,
    },
    /// The CMS did not answer within the request timeout.
    #[error("remote content request timed out: {message}")]
    Timeout {
        /// Adapter-supplied description of the failure.
        message: String,
    },
    /// The CMS answered with a non-success status.
    #[error("remote content upstream returned status {status}: {message}")]
    Upstream {
        /// HTTP status code from the CMS.
        status: u16,
        /// Compacted preview of the response body.
        message: String,
    },
    /// The response body could not be decoded into content records.
    #[error("remote content payload failed to decode: {message}")]
    Decode {
        /// Adapter-supplied description of the failure.
        message: String,
    },
}

impl RemoteContentError {
    /// Helper for connection-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for request timeouts.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Helper for non-success upstream statuses.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Helper for payload decode failures.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Read-only access to display content owned by the remote CMS.
///
/// Every operation is a single request against the CMS collection API. No
/// retries, no caching, no circuit breaking: a slow remote call delays only
/// the requesting caller.
#[async_trait]
pub trait RemoteContentSource: Send + Sync {
    /// Fetch all CMS blog posts with related media populated.
    async fn blog_posts(&self) -> Result<Vec<RemotePost>, RemoteContentError>;

    /// Fetch the first CMS blog post matching `slug`, if any.
    async fn blog_post(&self, slug: &str) -> Result<Option<RemotePost>, RemoteContentError>;

    /// Fetch all services, ordered by the CMS-maintained `order` field.
    async fn services(&self) -> Result<Vec<RemoteService>, RemoteContentError>;

    /// Fetch all testimonials with related media populated.
    async fn testimonials(&self) -> Result<Vec<RemoteTestimonial>, RemoteContentError>;

    /// Fetch the first page matching `slug`, if any.
    async fn page(&self, slug: &str) -> Result<Option<RemotePage>, RemoteContentError>;

    /// Fetch all pages.
    async fn pages(&self) -> Result<Vec<RemotePage>, RemoteContentError>;
}
