use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::data::post_repository::{NewPost, Pagination};
use crate::data::session_repository::NewSession;
use crate::data::user_repository::{NewUser, ProfilePatch, UserCredentials};
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::user::User;

/// Process-wide in-memory state: users, posts, sessions, plus the id
/// generator. Constructed once at startup and shared behind `Arc`; every
/// operation takes the single lock, which makes each one atomic.
pub(crate) struct Store {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    users: Vec<UserRecord>,
    posts: Vec<Post>,
    sessions: Vec<NewSession>,
    ids: IdGenerator,
}

struct UserRecord {
    user: User,
    password_hash: String,
}

/// Ids are wall-clock milliseconds rendered as a decimal string. Two ids
/// generated within the same millisecond get a sequence suffix so they never
/// collide inside one process.
#[derive(Default)]
struct IdGenerator {
    last_millis: i64,
    seq: u32,
}

impl IdGenerator {
    fn next(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        if millis == self.last_millis {
            self.seq += 1;
            format!("{millis}-{}", self.seq)
        } else {
            self.last_millis = millis;
            self.seq = 0;
            millis.to_string()
        }
    }
}

impl Store {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, DomainError> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Unexpected("store mutex poisoned".to_string()))
    }

    // users

    pub(crate) fn insert_user(&self, input: NewUser) -> Result<User, DomainError> {
        let mut inner = self.lock()?;

        if inner.users.iter().any(|r| r.user.email == input.email) {
            return Err(DomainError::AlreadyExists("Email already in use"));
        }
        if inner.users.iter().any(|r| r.user.username == input.username) {
            return Err(DomainError::AlreadyExists("Username already taken"));
        }

        let id = inner.ids.next(Utc::now());
        let user = User::new(id, input.name, input.username, input.email);
        inner.users.push(UserRecord {
            user: user.clone(),
            password_hash: input.password_hash,
        });
        Ok(user)
    }

    /// Fixture rows carry their own ids and bypass uniqueness checks.
    pub(crate) fn seed_user(&self, user: User, password_hash: String) -> Result<(), DomainError> {
        let mut inner = self.lock()?;
        inner.users.push(UserRecord {
            user,
            password_hash,
        });
        Ok(())
    }

    pub(crate) fn find_user_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let inner = self.lock()?;
        Ok(inner
            .users
            .iter()
            .find(|r| r.user.id == id)
            .map(|r| r.user.clone()))
    }

    pub(crate) fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let inner = self.lock()?;
        Ok(inner
            .users
            .iter()
            .find(|r| r.user.email == email)
            .map(|r| UserCredentials {
                user: r.user.clone(),
                password_hash: r.password_hash.clone(),
            }))
    }

    pub(crate) fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, DomainError> {
        let inner = self.lock()?;
        Ok(inner
            .users
            .iter()
            .find(|r| r.user.username == username)
            .map(|r| r.user.clone()))
    }

    /// Case-insensitive substring match on `name` or `username`, in insertion
    /// order. An empty query matches nothing.
    pub(crate) fn search_users(&self, query: &str) -> Result<Vec<User>, DomainError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let needle = query.to_lowercase();
        let inner = self.lock()?;
        Ok(inner
            .users
            .iter()
            .filter(|r| {
                r.user.name.to_lowercase().contains(&needle)
                    || r.user.username.to_lowercase().contains(&needle)
            })
            .map(|r| r.user.clone())
            .collect())
    }

    pub(crate) fn update_user(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> Result<Option<User>, DomainError> {
        let mut inner = self.lock()?;
        let Some(record) = inner.users.iter_mut().find(|r| r.user.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name.filter(|v| !v.is_empty()) {
            record.user.name = name;
        }
        if let Some(bio) = patch.bio.filter(|v| !v.is_empty()) {
            record.user.bio = Some(bio);
        }
        if let Some(avatar) = patch.avatar.filter(|v| !v.is_empty()) {
            record.user.avatar = Some(avatar);
        }
        Ok(Some(record.user.clone()))
    }

    pub(crate) fn increment_followers(&self, id: &str) -> Result<Option<u32>, DomainError> {
        let mut inner = self.lock()?;
        let Some(record) = inner.users.iter_mut().find(|r| r.user.id == id) else {
            return Ok(None);
        };
        record.user.followers += 1;
        Ok(Some(record.user.followers))
    }

    // posts

    /// New posts go to the head of the list, which keeps the table in
    /// reverse-chronological order without sorting on read.
    pub(crate) fn insert_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut inner = self.lock()?;
        let now = Utc::now();
        let post = Post {
            id: inner.ids.next(now),
            author: input.author,
            content: input.content,
            image: input.image,
            likes: 0,
            comments: 0,
            created_at: now,
        };
        inner.posts.insert(0, post.clone());
        Ok(post)
    }

    pub(crate) fn seed_post(&self, post: Post) -> Result<(), DomainError> {
        let mut inner = self.lock()?;
        inner.posts.push(post);
        Ok(())
    }

    pub(crate) fn get_post(&self, id: &str) -> Result<Option<Post>, DomainError> {
        let inner = self.lock()?;
        Ok(inner.posts.iter().find(|p| p.id == id).cloned())
    }

    pub(crate) fn posts_page(&self, pagination: Pagination) -> Result<Vec<Post>, DomainError> {
        let inner = self.lock()?;
        let start = (pagination.page as usize - 1) * pagination.limit as usize;
        let end = (start + pagination.limit as usize).min(inner.posts.len());
        if start >= inner.posts.len() {
            return Ok(Vec::new());
        }
        Ok(inner.posts[start..end].to_vec())
    }

    pub(crate) fn post_count(&self) -> Result<u64, DomainError> {
        let inner = self.lock()?;
        Ok(inner.posts.len() as u64)
    }

    pub(crate) fn increment_likes(&self, id: &str) -> Result<Option<u32>, DomainError> {
        let mut inner = self.lock()?;
        let Some(post) = inner.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.likes += 1;
        Ok(Some(post.likes))
    }

    pub(crate) fn increment_comments(&self, id: &str) -> Result<Option<u32>, DomainError> {
        let mut inner = self.lock()?;
        let Some(post) = inner.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.comments += 1;
        Ok(Some(post.comments))
    }

    // sessions

    pub(crate) fn insert_session(&self, input: NewSession) -> Result<(), DomainError> {
        let mut inner = self.lock()?;
        inner.sessions.push(input);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn session_count(&self) -> Result<usize, DomainError> {
        let inner = self.lock()?;
        Ok(inner.sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{IdGenerator, Store};
    use crate::data::post_repository::{NewPost, Pagination};
    use crate::data::user_repository::{NewUser, ProfilePatch};
    use crate::domain::error::DomainError;
    use crate::domain::post::PostAuthor;

    fn new_user(name: &str, username: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    fn new_post(content: &str) -> NewPost {
        NewPost {
            author: PostAuthor {
                id: "101".to_string(),
                name: "Sarah Johnson".to_string(),
                username: "sarahj".to_string(),
                avatar: Some("/placeholder.svg".to_string()),
            },
            content: content.to_string(),
            image: None,
        }
    }

    #[test]
    fn id_generator_disambiguates_within_one_millisecond() {
        let mut ids = IdGenerator::default();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        let first = ids.next(now);
        let second = ids.next(now);
        let third = ids.next(now);

        assert_eq!(first, "1700000000000");
        assert_ne!(first, second);
        assert_ne!(second, third);
    }

    #[test]
    fn insert_user_rejects_duplicate_email_then_username() {
        let store = Store::new();
        store
            .insert_user(new_user("Sarah Johnson", "sarahj", "sarah@example.com"))
            .expect("first insert must succeed");

        let err = store
            .insert_user(new_user("Other", "other", "sarah@example.com"))
            .expect_err("duplicate email must be rejected");
        assert!(matches!(
            err,
            DomainError::AlreadyExists("Email already in use")
        ));

        let err = store
            .insert_user(new_user("Other", "sarahj", "other@example.com"))
            .expect_err("duplicate username must be rejected");
        assert!(matches!(
            err,
            DomainError::AlreadyExists("Username already taken")
        ));
    }

    #[test]
    fn distinct_registrations_all_land_in_the_table() {
        let store = Store::new();
        for i in 0..5 {
            store
                .insert_user(new_user(
                    &format!("User {i}"),
                    &format!("user{i}"),
                    &format!("user{i}@example.com"),
                ))
                .expect("distinct users must insert");
        }
        let found = store
            .search_users("user")
            .expect("search must not fail");
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn lookups_match_exactly_and_case_sensitively() {
        let store = Store::new();
        let created = store
            .insert_user(new_user("Sarah Johnson", "sarahj", "sarah@example.com"))
            .expect("insert must succeed");

        let by_id = store
            .find_user_by_id(&created.id)
            .expect("lookup must not fail");
        assert!(by_id.is_some());

        let by_username = store
            .find_user_by_username("sarahj")
            .expect("lookup must not fail");
        assert!(by_username.is_some());

        // uniqueness and lookups are case-sensitive, unlike search
        let miss = store
            .find_user_by_username("SarahJ")
            .expect("lookup must not fail");
        assert!(miss.is_none());

        let creds = store
            .find_user_by_email("sarah@example.com")
            .expect("lookup must not fail")
            .expect("email must match");
        assert_eq!(creds.password_hash, "hash");
    }

    #[test]
    fn search_is_case_insensitive_and_empty_query_matches_nothing() {
        let store = Store::new();
        store
            .insert_user(new_user("Sarah Johnson", "sarahj", "sarah@example.com"))
            .expect("insert must succeed");
        store
            .insert_user(new_user("Alex Thompson", "alexthompson", "alex@example.com"))
            .expect("insert must succeed");

        assert!(store.search_users("").expect("must not fail").is_empty());

        let hits = store.search_users("SAR").expect("must not fail");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].username, "sarahj");

        // matches username as well as name
        let hits = store.search_users("thompson").expect("must not fail");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn update_user_ignores_absent_and_empty_fields() {
        let store = Store::new();
        let created = store
            .insert_user(new_user("Sarah Johnson", "sarahj", "sarah@example.com"))
            .expect("insert must succeed");

        let updated = store
            .update_user(
                &created.id,
                ProfilePatch {
                    name: Some(String::new()),
                    bio: Some("New bio".to_string()),
                    avatar: None,
                },
            )
            .expect("update must not fail")
            .expect("user must exist");

        assert_eq!(updated.name, "Sarah Johnson");
        assert_eq!(updated.bio.as_deref(), Some("New bio"));
        assert!(updated.avatar.is_none());
    }

    #[test]
    fn increment_followers_returns_new_value() {
        let store = Store::new();
        let created = store
            .insert_user(new_user("Sarah Johnson", "sarahj", "sarah@example.com"))
            .expect("insert must succeed");

        assert_eq!(
            store
                .increment_followers(&created.id)
                .expect("must not fail"),
            Some(1)
        );
        assert_eq!(
            store
                .increment_followers(&created.id)
                .expect("must not fail"),
            Some(2)
        );
        assert_eq!(
            store.increment_followers("missing").expect("must not fail"),
            None
        );
    }

    #[test]
    fn posts_list_newest_first() {
        let store = Store::new();
        let first = store.insert_post(new_post("first")).expect("must insert");
        let second = store.insert_post(new_post("second")).expect("must insert");

        let page = store
            .posts_page(Pagination { page: 1, limit: 10 })
            .expect("page must not fail");
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, second.id);
        assert_eq!(page[1].id, first.id);
        assert!(page[0].created_at >= page[1].created_at);
    }

    #[test]
    fn posts_page_clamps_and_empties_past_the_end() {
        let store = Store::new();
        for i in 0..3 {
            store
                .insert_post(new_post(&format!("post {i}")))
                .expect("must insert");
        }

        let page = store
            .posts_page(Pagination { page: 2, limit: 2 })
            .expect("page must not fail");
        assert_eq!(page.len(), 1);

        let page = store
            .posts_page(Pagination { page: 3, limit: 2 })
            .expect("page must not fail");
        assert!(page.is_empty());

        assert_eq!(store.post_count().expect("count must not fail"), 3);
    }

    #[test]
    fn like_and_comment_counters_increment_serially() {
        let store = Store::new();
        let post = store.insert_post(new_post("hello")).expect("must insert");

        for expected in 1..=3 {
            assert_eq!(
                store.increment_likes(&post.id).expect("must not fail"),
                Some(expected)
            );
        }
        assert_eq!(
            store.increment_comments(&post.id).expect("must not fail"),
            Some(1)
        );
        assert_eq!(store.increment_likes("missing").expect("must not fail"), None);
    }
}
