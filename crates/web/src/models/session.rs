//! Session-related types.
//!
//! Auth state is written by the login flow, which lives outside this crate;
//! here it is only read and cleared. The current user is exposed to
//! templates only when both the token and the profile are present.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

/// Stored user profile, as written by the login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub username: String,
}

/// Auth state exposed to templates.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
    pub token: String,
}

/// Session keys for stored state.
pub mod keys {
    /// Key for the stored auth token.
    pub const AUTH_TOKEN: &str = "auth_token";

    /// Key for the stored user profile.
    pub const CURRENT_USER: &str = "user";

    /// Key for the serialized cart snapshot.
    pub const CART: &str = "cart";
}

/// Read the current user from the session.
///
/// Returns `None` unless both the token and the profile are stored;
/// unreadable values are treated as absent.
pub async fn current_user(session: &Session) -> Option<CurrentUser> {
    let token = session.get::<String>(keys::AUTH_TOKEN).await.ok().flatten()?;
    let user = session
        .get::<StoredUser>(keys::CURRENT_USER)
        .await
        .ok()
        .flatten()?;

    Some(CurrentUser {
        username: user.username,
        token,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_current_user_requires_both_keys() {
        let session = session();
        assert!(current_user(&session).await.is_none());

        session.insert(keys::AUTH_TOKEN, "tok-123").await.unwrap();
        assert!(current_user(&session).await.is_none());

        session
            .insert(
                keys::CURRENT_USER,
                StoredUser {
                    username: "alice".to_string(),
                },
            )
            .await
            .unwrap();

        let user = current_user(&session).await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.token, "tok-123");
    }
}
