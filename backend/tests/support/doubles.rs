//! Shared test doubles and builders for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! this module is pulled in with `#[path]` by each suite that needs an
//! in-process remote content source.

use std::sync::Arc;

use async_trait::async_trait;
use backend::domain::ports::{ContentStore, RemoteContentError, RemoteContentSource};
use backend::domain::{RemotePage, RemotePost, RemoteService, RemoteTestimonial};
use backend::inbound::http::HttpState;
use backend::outbound::memory::MemoryContentStore;
use chrono::{TimeZone, Utc};

/// Remote content stub serving canned collections, with an optional forced
/// failure to exercise the degrade-to-empty policy.
#[derive(Debug, Default)]
pub struct StubRemote {
    pub posts: Vec<RemotePost>,
    pub services: Vec<RemoteService>,
    pub testimonials: Vec<RemoteTestimonial>,
    pub pages: Vec<RemotePage>,
    pub failure: Option<RemoteContentError>,
}

impl StubRemote {
    pub fn failing(error: RemoteContentError) -> Self {
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

pub fn remote_post(slug: &str) -> RemotePost {
    RemotePost {
        id: 1,
        document_id: "doc-1".to_owned(),
        title: "Launch notes".to_owned(),
        slug: slug.to_owned(),
        content: "Body".to_owned(),
        excerpt: "Summary".to_owned(),
        cover_image: None,
        tags: Some(vec!["news".to_owned()]),
        author: "BlockMind Labs".to_owned(),
        meta_title: None,
        meta_description: None,
        published_at: Utc
            .with_ymd_and_hms(2025, 6, 1, 10, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub fn remote_service(title: &str, order: Option<i64>) -> RemoteService {
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

pub fn remote_testimonial(name: &str) -> RemoteTestimonial {
    RemoteTestimonial {
        id: 1,
        document_id: "tm-1".to_owned(),
        name: name.to_owned(),
        company: "Acme".to_owned(),
        role: "CTO".to_owned(),
        content: "Shipped on time.".to_owned(),
        avatar: None,
        rating: 5,
    }
}

pub fn remote_page(slug: &str) -> RemotePage {
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

pub fn state(store: Arc<dyn ContentStore>, remote: Arc<dyn RemoteContentSource>) -> HttpState {
    HttpState::new(store, remote)
}

pub fn state_with_remote(remote: StubRemote) -> HttpState {
    state(Arc::new(MemoryContentStore::new()), Arc::new(remote))
}

pub fn default_state() -> HttpState {
    state_with_remote(StubRemote::default())
}
