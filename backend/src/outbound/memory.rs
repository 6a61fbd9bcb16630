//! In-memory content store adapter.
//!
//! One store instance owns three ordered maps and three id allocators behind
//! a single lock, constructed once at process start and shared with request
//! handlers via `Arc`. There is no ambient global state and no persistence:
//! restart loses everything.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::ContentStore;
use crate::domain::{
    BlogPost, ContactSubmission, DEFAULT_AUTHOR, NewBlogPost, NewContactSubmission, NewUser,
    RecordId, User, slug_from_title,
};

#[derive(Debug)]
struct Tables {
    users: BTreeMap<RecordId, User>,
    contacts: BTreeMap<RecordId, ContactSubmission>,
    posts: BTreeMap<RecordId, BlogPost>,
    next_user_id: RecordId,
    next_contact_id: RecordId,
    next_post_id: RecordId,
}

impl Tables {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            contacts: BTreeMap::new(),
            posts: BTreeMap::new(),
            next_user_id: RecordId::FIRST,
            next_contact_id: RecordId::FIRST,
            next_post_id: RecordId::FIRST,
        }
    }
}

/// Process-local [`ContentStore`] backed by ordered maps.
///
/// Map operations are synchronous and non-suspending; the lock is held only
/// for the duration of one operation, so a slow remote CMS call elsewhere in
/// the process never blocks the store.
#[derive(Debug)]
pub struct MemoryContentStore {
    tables: RwLock<Tables>,
}

impl MemoryContentStore {
    /// Create an empty store with all three allocators at their first id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::new()),
        }
    }

    // A poisoned lock only means another thread panicked mid-operation; the
    // maps themselves stay structurally valid, so recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn create_user(&self, user: NewUser) -> User {
        let now = Utc::now();
        let mut tables = self.write();
        let id = tables.next_user_id;
        tables.next_user_id = id.next();
        let record = User {
            id,
            email: user.email,
            password: user.password,
            name: user.name,
            role: user.role,
            created_at: now,
        };
        tables.users.insert(id, record.clone());
        record
    }

    async fn user(&self, id: RecordId) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    async fn user_by_username(&self, username: &str) -> Option<User> {
        // Ids increase monotonically, so map order is insertion order and the
        // first match is the earliest stored record.
        self.read()
            .users
            .values()
            .find(|user| user.email == username)
            .cloned()
    }

    async fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> ContactSubmission {
        let mut tables = self.write();
        let id = tables.next_contact_id;
        tables.next_contact_id = id.next();
        let record = ContactSubmission {
            id,
            name: submission.name,
            email: submission.email,
            message: submission.message,
            company: submission.company,
        };
        tables.contacts.insert(id, record.clone());
        record
    }

    async fn create_blog_post(&self, post: NewBlogPost) -> BlogPost {
        let now = Utc::now();
        let slug = slug_from_title(&post.title);
        let mut tables = self.write();
        let id = tables.next_post_id;
        tables.next_post_id = id.next();
        let record = BlogPost {
            id,
            title: post.title,
            slug,
            content: post.content,
            excerpt: post.excerpt,
            published_at: now,
            updated_at: now,
            cover_image: post.cover_image,
            tags: post.tags,
            published: post.published,
            meta_title: post.meta_title,
            meta_description: post.meta_description,
            author: post.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
        };
        tables.posts.insert(id, record.clone());
        record
    }

    async fn blog_post(&self, id: RecordId) -> Option<BlogPost> {
        self.read().posts.get(&id).cloned()
    }

    async fn blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.read()
            .posts
            .values()
            .find(|post| post.slug == slug)
            .cloned()
    }

    async fn list_blog_posts(&self, limit: Option<usize>) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = self.read().posts.values().cloned().collect();
        // Newest first; ties on the timestamp fall back to the newest id so
        // the ordering stays deterministic within one clock tick.
        posts.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        if let Some(limit) = limit {
            posts.truncate(limit);
        }
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_input(email: &str) -> NewUser {
        NewUser {
            email: email.to_owned(),
            password: "secret".to_owned(),
            name: "Test User".to_owned(),
            role: crate::domain::UserRole::Editor,
        }
    }

    fn post_input(title: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.to_owned(),
            content: "body".to_owned(),
            excerpt: "summary".to_owned(),
            cover_image: None,
            tags: None,
            published: true,
            meta_title: None,
            meta_description: None,
            author: None,
        }
    }

    #[tokio::test]
    async fn user_ids_are_strictly_increasing_and_unique() {
        let store = MemoryContentStore::new();
        let mut previous = None;
        for n in 0..5 {
            let user = store.create_user(user_input(&format!("u{n}@example.com"))).await;
            if let Some(last) = previous {
                assert!(user.id > last, "ids must strictly increase");
            }
            previous = Some(user.id);
        }
    }

    #[tokio::test]
    async fn duplicate_users_store_silently() {
        let store = MemoryContentStore::new();
        let first = store.create_user(user_input("dup@example.com")).await;
        let second = store.create_user(user_input("dup@example.com")).await;
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn username_lookup_returns_earliest_match() {
        let store = MemoryContentStore::new();
        let first = store.create_user(user_input("ada@example.com")).await;
        store.create_user(user_input("grace@example.com")).await;
        store.create_user(user_input("ada@example.com")).await;

        let found = store
            .user_by_username("ada@example.com")
            .await
            .expect("user exists");
        assert_eq!(found.id, first.id);
        assert!(store.user_by_username("nobody@example.com").await.is_none());
    }

    #[tokio::test]
    async fn users_are_stamped_with_creation_time() {
        let store = MemoryContentStore::new();
        let before = Utc::now();
        let user = store.create_user(user_input("ada@example.com")).await;
        assert!(user.created_at >= before);
        assert!(user.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn user_lookup_by_id_round_trips() {
        let store = MemoryContentStore::new();
        let created = store.create_user(user_input("ada@example.com")).await;
        assert_eq!(store.user(created.id).await, Some(created));
        assert!(store.user(RecordId::from(99)).await.is_none());
    }

    #[tokio::test]
    async fn contact_submissions_use_their_own_allocator() {
        let store = MemoryContentStore::new();
        store.create_user(user_input("ada@example.com")).await;
        let submission = store
            .create_contact_submission(NewContactSubmission {
                name: "Ada".to_owned(),
                email: "ada@example.com".to_owned(),
                message: "Interested in a project.".to_owned(),
                company: Some("Analytical Engines".to_owned()),
            })
            .await;
        // The user allocator already handed out 1; contacts start fresh.
        assert_eq!(submission.id, RecordId::FIRST);
    }

    #[tokio::test]
    async fn blog_posts_derive_slug_and_stamp_timestamps() {
        let store = MemoryContentStore::new();
        let before = Utc::now();
        let post = store.create_blog_post(post_input("Hello, World!")).await;
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.published_at, post.updated_at);
        assert!(post.published_at >= before);
        assert_eq!(post.author, DEFAULT_AUTHOR);
    }

    #[tokio::test]
    async fn identical_titles_keep_identical_slugs() {
        let store = MemoryContentStore::new();
        let first = store.create_blog_post(post_input("Launch Week")).await;
        let second = store.create_blog_post(post_input("Launch Week")).await;
        assert_eq!(first.slug, second.slug);
        // Slug lookup returns the earliest of the colliding posts.
        let found = store
            .blog_post_by_slug("launch-week")
            .await
            .expect("post exists");
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn listing_returns_newest_first_and_honours_limit() {
        let store = MemoryContentStore::new();
        store.create_blog_post(post_input("First")).await;
        let second = store.create_blog_post(post_input("Second")).await;
        let third = store.create_blog_post(post_input("Third")).await;

        let limited = store.list_blog_posts(Some(2)).await;
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].id, third.id);
        assert_eq!(limited[1].id, second.id);

        let all = store.list_blog_posts(None).await;
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn mutations_are_visible_to_immediate_reads() {
        let store = MemoryContentStore::new();
        let created = store.create_blog_post(post_input("Visible at once")).await;
        assert_eq!(store.blog_post(created.id).await, Some(created));
    }
}
