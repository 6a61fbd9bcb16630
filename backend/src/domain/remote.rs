//! Read-only mirrors of CMS-owned content types.
//!
//! The remote CMS is the sole source of truth for these records; this
//! backend only ever reads them. Field shapes follow the CMS collection
//! schemas, with wire decoding handled by the outbound adapter's DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Media attachment resolved by the CMS (cover images, avatars).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMedia {
    /// Asset URL as served by the CMS.
    pub url: String,
    /// Accessibility text, when maintained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,
}

/// A CMS-authored blog post.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    /// Numeric identifier assigned by the CMS.
    pub id: i64,
    /// Stable document identifier assigned by the CMS.
    pub document_id: String,
    /// Post title.
    pub title: String,
    /// URL slug maintained in the CMS.
    pub slug: String,
    /// Post body.
    pub content: String,
    /// Listing summary.
    pub excerpt: String,
    /// Optional cover image with related media populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<RemoteMedia>,
    /// Optional tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Post author.
    pub author: String,
    /// Optional SEO title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// Optional SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// CMS publication timestamp.
    pub published_at: DateTime<Utc>,
}

/// A service offering shown on the landing page, ordered by an
/// externally-maintained `order` field.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoteService {
    /// Numeric identifier assigned by the CMS.
    pub id: i64,
    /// Stable document identifier assigned by the CMS.
    pub document_id: String,
    /// Service title.
    pub title: String,
    /// Service description.
    pub description: String,
    /// Icon name rendered by the UI.
    pub icon: String,
    /// Feature bullet points.
    pub features: Vec<String>,
    /// Display ordering maintained in the CMS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTestimonial {
    /// Numeric identifier assigned by the CMS.
    pub id: i64,
    /// Stable document identifier assigned by the CMS.
    pub document_id: String,
    /// Customer name.
    pub name: String,
    /// Customer company.
    pub company: String,
    /// Customer role.
    pub role: String,
    /// Quote body.
    pub content: String,
    /// Optional avatar with related media populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<RemoteMedia>,
    /// Star rating, one to five.
    pub rating: i32,
}

/// A CMS-authored page of block-based content.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemotePage {
    /// Numeric identifier assigned by the CMS.
    pub id: i64,
    /// Stable document identifier assigned by the CMS.
    pub document_id: String,
    /// Page title.
    pub title: String,
    /// URL slug maintained in the CMS.
    pub slug: String,
    /// Arbitrary JSON content blocks; the UI interprets these.
    #[schema(value_type = Object)]
    pub content: Value,
    /// Optional SEO title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// Optional SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}
