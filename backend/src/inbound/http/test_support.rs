//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::ports::{ContentStore, RemoteContentError, RemoteContentSource};
use crate::domain::{RemotePage, RemotePost, RemoteService, RemoteTestimonial};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemoryContentStore;

/// Remote content stub with canned collections and an optional forced
/// failure, so handler tests cover both the happy path and the
/// degrade-to-empty policy without a network.
#[derive(Debug, Default)]
pub(crate) struct StubRemote {
    pub(crate) posts: Vec<RemotePost>,
    pub(crate) services: Vec<RemoteService>,
    pub(crate) testimonials: Vec<RemoteTestimonial>,
    pub(crate) pages: Vec<RemotePage>,
    pub(crate) failure: Option<RemoteContentError>,
}

impl StubRemote {
    pub(crate) fn failing(error: RemoteContentError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn result<T>(&self, value: T) -> Result<T, RemoteContentError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl RemoteContentSource for StubRemote {
    async fn blog_posts(&self) -> Result<Vec<RemotePost>, RemoteContentError> {
        self.result(self.posts.clone())
    }

    async fn blog_post(&self, slug: &str) -> Result<Option<RemotePost>, RemoteContentError> {
        self.result(self.posts.iter().find(|post| post.slug == slug).cloned())
    }

    async fn services(&self) -> Result<Vec<RemoteService>, RemoteContentError> {
        self.result(self.services.clone())
    }

    async fn testimonials(&self) -> Result<Vec<RemoteTestimonial>, RemoteContentError> {
        self.result(self.testimonials.clone())
    }

    async fn page(&self, slug: &str) -> Result<Option<RemotePage>, RemoteContentError> {
        self.result(self.pages.iter().find(|page| page.slug == slug).cloned())
    }

    async fn pages(&self) -> Result<Vec<RemotePage>, RemoteContentError> {
        self.result(self.pages.clone())
    }
}

pub(crate) fn sample_remote_post(slug: &str) -> RemotePost {
    RemotePost {
        id: 1,
        document_id: "doc-1".to_owned(),
        title: "Sample".to_owned(),
        slug: slug.to_owned(),
        content: "Body".to_owned(),
        excerpt: "Summary".to_owned(),
        cover_image: None,
        tags: None,
        author: "BlockMind Labs".to_owned(),
        meta_title: None,
        meta_description: None,
        published_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).single().expect("valid timestamp"),
    }
}

pub(crate) fn sample_service(title: &str, order: Option<i64>) -> RemoteService {
    RemoteService {
        id: 1,
        document_id: "svc-1".to_owned(),
        title: title.to_owned(),
        description: "What we do".to_owned(),
        icon: "sparkles".to_owned(),
        features: vec!["Discovery".to_owned()],
        order,
    }
}

pub(crate) fn sample_page(slug: &str) -> RemotePage {
    RemotePage {
        id: 1,
        document_id: "pg-1".to_owned(),
        title: "About".to_owned(),
        slug: slug.to_owned(),
        content: serde_json::json!({ "blocks": [] }),
        meta_title: None,
        meta_description: None,
    }
}

pub(crate) fn store() -> Arc<MemoryContentStore> {
    Arc::new(MemoryContentStore::new())
}

pub(crate) fn state_with_store(store: Arc<MemoryContentStore>) -> HttpState {
    state(store, Arc::new(StubRemote::default()))
}

pub(crate) fn state_with_remote(remote: Arc<StubRemote>) -> HttpState {
    state(self::store(), remote)
}

pub(crate) fn state(store: Arc<dyn ContentStore>, remote: Arc<dyn RemoteContentSource>) -> HttpState {
    HttpState::new(store, remote)
}

/// Build the test application with the supplied state and the production
/// route table.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(super::configure)
}
