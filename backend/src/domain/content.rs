//! First-party content records and their creation inputs.
//!
//! Identifiers are allocator-assigned integers, unique and strictly
//! increasing within each entity's map for the lifetime of the process.
//! Nothing here is persisted: restart loses everything by design.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author stamped on blog posts when the request does not name one.
pub const DEFAULT_AUTHOR: &str = "BlockMind Labs";

/// Allocator-assigned identifier for first-party records.
///
/// Ids start at 1 and increase by one per created record within an entity
/// type. They are never reused while the process lives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// The first identifier handed out by a fresh allocator.
    pub const FIRST: Self = Self(1);

    /// Identifier that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Underlying integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Editorial role attached to a user. Carried on the record but never
/// checked anywhere; there is no authorisation enforcement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full editorial access.
    Admin,
    /// Content authoring access.
    #[default]
    Editor,
}

/// A stored user account.
///
/// The password is held verbatim, mirroring the schema this backend serves;
/// no authentication path reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Allocator-assigned identifier.
    pub id: RecordId,
    /// Login identifier. Not checked for uniqueness; duplicates store fine.
    pub email: String,
    /// Stored verbatim.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Editorial role, defaulting to editor.
    pub role: UserRole,
    /// Stamped with the creation time.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Login identifier.
    pub email: String,
    /// Stored verbatim.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Editorial role.
    #[serde(default)]
    pub role: UserRole,
}

/// A stored contact form submission. Immutable once created and never read
/// back by any endpoint; it exists so operators can inspect process state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Allocator-assigned identifier.
    pub id: RecordId,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Optional company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Input for creating a [`ContactSubmission`]. Validation happens in the
/// inbound adapter before this reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewContactSubmission {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Optional company name.
    #[serde(default)]
    pub company: Option<String>,
}

/// A stored first-party blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Allocator-assigned identifier.
    pub id: RecordId,
    /// Post title.
    pub title: String,
    /// Derived from the title at creation; collisions are allowed.
    pub slug: String,
    /// Post body.
    pub content: String,
    /// Short summary shown on listing pages.
    pub excerpt: String,
    /// Stamped with the creation time.
    pub published_at: DateTime<Utc>,
    /// Stamped with the creation time; no update path exists.
    pub updated_at: DateTime<Utc>,
    /// Optional cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Optional tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Publication flag.
    pub published: bool,
    /// Optional SEO title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// Optional SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Post author, defaulting to [`DEFAULT_AUTHOR`].
    pub author: String,
}

/// Input for creating a [`BlogPost`]. The store derives the slug and stamps
/// both timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    /// Post title; the slug derives from it.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Short summary shown on listing pages.
    pub excerpt: String,
    /// Optional cover image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Optional tag list.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Publication flag.
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
