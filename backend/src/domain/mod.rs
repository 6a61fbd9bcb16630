//! Transport-agnostic domain types for the site backend.
//!
//! The domain owns first-party records (users, contact submissions, blog
//! posts), the read-only mirrors of CMS-sourced content, and the ports that
//! adapters implement. Nothing in this module knows about HTTP or JSON wire
//! shapes.

mod content;
mod error;
pub mod ports;
mod remote;
mod slug;

pub use content::{
    BlogPost, ContactSubmission, DEFAULT_AUTHOR, NewBlogPost, NewContactSubmission, NewUser,
    RecordId, User, UserRole,
};
pub use error::{DomainError, ErrorCode};
pub use remote::{RemoteMedia, RemotePage, RemotePost, RemoteService, RemoteTestimonial};
pub use slug::slug_from_title;
