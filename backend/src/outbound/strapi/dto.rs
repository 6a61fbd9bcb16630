//! DTOs for decoding Strapi JSON responses.
//!
//! The adapter decodes the `{ "data": [...], "meta": {...} }` envelope into
//! these transport DTOs first, then maps into domain records in one pass.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{RemoteMedia, RemotePage, RemotePost, RemoteService, RemoteTestimonial};

/// Collection response envelope shared by every Strapi endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct EnvelopeDto<T> {
    #[serde(default = "Vec::new")]
    pub(super) data: Vec<T>,
    #[serde(default)]
    pub(super) meta: MetaDto,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct MetaDto {
    pub(super) pagination: Option<PaginationDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PaginationDto {
    pub(super) total: u64,
}

impl<T> EnvelopeDto<T> {
    /// Collection size reported by the CMS, when pagination metadata is
    /// present.
    pub(super) fn reported_total(&self) -> Option<u64> {
        self.meta.pagination.as_ref().map(|p| p.total)
    }
}

pub(super) fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<EnvelopeDto<T>, String> {
    serde_json::from_slice(body).map_err(|error| format!("invalid Strapi JSON payload: {error}"))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MediaDto {
    pub(super) url: String,
    pub(super) alternative_text: Option<String>,
}

impl MediaDto {
    fn into_domain(self) -> RemoteMedia {
        RemoteMedia {
            url: self.url,
            alternative_text: self.alternative_text,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostDto {
    pub(super) id: i64,
    pub(super) document_id: String,
    pub(super) title: String,
    pub(super) slug: String,
    pub(super) content: String,
    pub(super) excerpt: String,
    pub(super) cover_image: Option<MediaDto>,
    pub(super) tags: Option<Vec<String>>,
    pub(super) author: String,
    pub(super) meta_title: Option<String>,
    pub(super) meta_description: Option<String>,
    pub(super) published_at: DateTime<Utc>,
}

impl PostDto {
    pub(super) fn into_domain(self) -> RemotePost {
        RemotePost {
            id: self.id,
            document_id: self.document_id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            excerpt: self.excerpt,
            cover_image: self.cover_image.map(MediaDto::into_domain),
            tags: self.tags,
            author: self.author,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            published_at: self.published_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ServiceDto {
    pub(super) id: i64,
    pub(super) document_id: String,
    pub(super) title: String,
    pub(super) description: String,
    pub(super) icon: String,
    #[serde(default)]
    pub(super) features: Vec<String>,
    pub(super) order: Option<i64>,
}

impl ServiceDto {
    pub(super) fn into_domain(self) -> RemoteService {
        RemoteService {
            id: self.id,
            document_id: self.document_id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            features: self.features,
            order: self.order,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TestimonialDto {
    pub(super) id: i64,
    pub(super) document_id: String,
    pub(super) name: String,
    pub(super) company: String,
    pub(super) role: String,
    pub(super) content: String,
    pub(super) avatar: Option<MediaDto>,
    pub(super) rating: i32,
}

impl TestimonialDto {
    pub(super) fn into_domain(self) -> RemoteTestimonial {
        RemoteTestimonial {
            id: self.id,
            document_id: self.document_id,
            name: self.name,
            company: self.company,
            role: self.role,
            content: self.content,
            avatar: self.avatar.map(MediaDto::into_domain),
            rating: self.rating,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PageDto {
    pub(super) id: i64,
    pub(super) document_id: String,
    pub(super) title: String,
    pub(super) slug: String,
    pub(super) content: Value,
    pub(super) meta_title: Option<String>,
    pub(super) meta_description: Option<String>,
}

impl PageDto {
    pub(super) fn into_domain(self) -> RemotePage {
        RemotePage {
            id: self.id,
            document_id: self.document_id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
        }
    }
}
