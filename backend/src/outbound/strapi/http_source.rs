//! Reqwest-backed Strapi source adapter.
//!
//! This adapter owns transport details only: endpoint construction, timeout
//! and HTTP error mapping, and JSON decoding of the Strapi envelope into
//! domain content records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::dto::{EnvelopeDto, PageDto, PostDto, ServiceDto, TestimonialDto, decode_envelope};
use crate::domain::ports::{RemoteContentError, RemoteContentSource};
use crate::domain::{RemotePage, RemotePost, RemoteService, RemoteTestimonial};

/// Failures raised while constructing a [`StrapiHttpSource`].
#[derive(Debug, Error)]
pub enum StrapiSourceBuildError {
    /// The configured base URL cannot carry path segments.
    #[error("Strapi base URL cannot carry path segments: {0}")]
    BaseUrl(Url),
    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct Strapi HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Strapi source adapter that performs HTTP GET requests against the
/// collection API under one base URL.
pub struct StrapiHttpSource {
    client: Client,
    base_url: Url,
}

impl StrapiHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry path segments (for
    /// example `mailto:` URLs) or the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, StrapiSourceBuildError> {
        if base_url.cannot_be_a_base() {
            return Err(StrapiSourceBuildError::BaseUrl(base_url));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, collection: &str) -> Url {
        let mut url = self.base_url.clone();
        // The constructor rejects cannot-be-a-base URLs, so segments are
        // always available here.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", collection]);
        }
        url
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, RemoteContentError> {
        let response = self
            .client
            .get(self.endpoint(collection))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let envelope: EnvelopeDto<T> =
            decode_envelope(body.as_ref()).map_err(RemoteContentError::decode)?;
        debug!(
            collection,
            received = envelope.data.len(),
            total = envelope.reported_total(),
            "fetched Strapi collection"
        );
        Ok(envelope.data)
    }
}

#[async_trait]
impl RemoteContentSource for StrapiHttpSource {
    async fn blog_posts(&self) -> Result<Vec<RemotePost>, RemoteContentError> {
        let rows: Vec<PostDto> = self
            .fetch_collection("blog-posts", &[("populate", "*")])
            .await?;
        Ok(rows.into_iter().map(PostDto::into_domain).collect())
    }

    async fn blog_post(&self, slug: &str) -> Result<Option<RemotePost>, RemoteContentError> {
        let rows: Vec<PostDto> = self
            .fetch_collection(
                "blog-posts",
                &[("filters[slug][$eq]", slug), ("populate", "*")],
            )
            .await?;
        Ok(rows.into_iter().next().map(PostDto::into_domain))
    }

    async fn services(&self) -> Result<Vec<RemoteService>, RemoteContentError> {
        let rows: Vec<ServiceDto> = self
            .fetch_collection("services", &[("sort", "order:asc")])
            .await?;
        Ok(rows.into_iter().map(ServiceDto::into_domain).collect())
    }

    async fn testimonials(&self) -> Result<Vec<RemoteTestimonial>, RemoteContentError> {
        let rows: Vec<TestimonialDto> = self
            .fetch_collection("testimonials", &[("populate", "*")])
            .await?;
        Ok(rows.into_iter().map(TestimonialDto::into_domain).collect())
    }

    async fn page(&self, slug: &str) -> Result<Option<RemotePage>, RemoteContentError> {
        let rows: Vec<PageDto> = self
            .fetch_collection("pages", &[("filters[slug][$eq]", slug)])
            .await?;
        Ok(rows.into_iter().next().map(PageDto::into_domain))
    }

    async fn pages(&self) -> Result<Vec<RemotePage>, RemoteContentError> {
        let rows: Vec<PageDto> = self.fetch_collection("pages", &[]).await?;
        Ok(rows.into_iter().map(PageDto::into_domain).collect())
    }
}

fn map_transport_error(error: reqwest::Error) -> RemoteContentError {
    if error.is_timeout() {
        RemoteContentError::timeout(error.to_string())
    } else {
        RemoteContentError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RemoteContentError {
    let preview = body_preview(body);
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RemoteContentError::timeout(format!("status {}: {preview}", status.as_u16()))
        }
        _ => RemoteContentError::upstream(status.as_u16(), preview),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
