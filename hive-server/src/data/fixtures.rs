use chrono::{Duration, Utc};

use crate::data::store::Store;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostAuthor};
use crate::domain::user::User;
use crate::infrastructure::password;

pub(crate) const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// Password shared by all seeded accounts, hashed at seed time.
const SEED_PASSWORD: &str = "password123";

/// Seeds the Store so a fresh process has non-empty listings: three users
/// and two posts, newest first.
pub(crate) fn seed(store: &Store) -> Result<(), DomainError> {
    let sarah = seed_user(
        "101",
        "Sarah Johnson",
        "sarahj",
        "sarah@example.com",
        "Digital creator and photography enthusiast",
        (325, 150, 42),
    );
    let alex = seed_user(
        "102",
        "Alex Thompson",
        "alexthompson",
        "alex@example.com",
        "Travel blogger | Adventure seeker",
        (1240, 567, 128),
    );
    let mike = seed_user(
        "103",
        "Mike Chen",
        "mikechen",
        "mike@example.com",
        "Software developer and tech enthusiast",
        (528, 235, 78),
    );

    let password_hash = password::hash_password(SEED_PASSWORD)?;
    for user in [&sarah, &alex, &mike] {
        store.seed_user(user.clone(), password_hash.clone())?;
    }

    let now = Utc::now();
    store.seed_post(Post {
        id: "1".to_string(),
        author: PostAuthor::snapshot_of(&sarah),
        content: "Just launched my new project! Check it out and let me know what you think."
            .to_string(),
        image: Some("https://source.unsplash.com/random/1080x720/?project".to_string()),
        likes: 24,
        comments: 3,
        created_at: now - Duration::minutes(30),
    })?;
    store.seed_post(Post {
        id: "2".to_string(),
        author: PostAuthor::snapshot_of(&alex),
        content: "Beautiful sunset at the beach today. Nature never fails to amaze me.".to_string(),
        image: Some("https://source.unsplash.com/random/1080x720/?sunset,beach".to_string()),
        likes: 57,
        comments: 8,
        created_at: now - Duration::hours(2),
    })?;

    Ok(())
}

/// Author snapshot stamped onto created posts. The contract takes the author
/// from the session; the demo pins it to the first seeded user.
pub(crate) fn sentinel_author() -> PostAuthor {
    PostAuthor {
        id: "101".to_string(),
        name: "Sarah Johnson".to_string(),
        username: "sarahj".to_string(),
        avatar: Some(PLACEHOLDER_AVATAR.to_string()),
    }
}

/// Fixed user returned by the stubbed third-party sign-in. Never inserted
/// into the Users table.
pub(crate) fn google_demo_user() -> User {
    User::new(
        "google-user-123",
        "Google User",
        "googleuser",
        "google@example.com",
    )
}

fn seed_user(
    id: &str,
    name: &str,
    username: &str,
    email: &str,
    bio: &str,
    (followers, following, posts): (u32, u32, u32),
) -> User {
    let mut user = User::new(id, name, username, email);
    user.avatar = Some(PLACEHOLDER_AVATAR.to_string());
    user.bio = Some(bio.to_string());
    user.followers = followers;
    user.following = following;
    user.posts = posts;
    user
}
