//! Auth route handlers.
//!
//! Token issuance happens elsewhere; this surface only clears the stored
//! auth state.

use axum::response::Redirect;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session::keys;

/// Clear the stored token and profile wholesale, then reload the page.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    session.remove::<serde_json::Value>(keys::AUTH_TOKEN).await?;
    session
        .remove::<serde_json::Value>(keys::CURRENT_USER)
        .await?;

    Ok(Redirect::to("/"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    use crate::models::session::{self, StoredUser, keys};

    use super::*;

    #[tokio::test]
    async fn test_logout_clears_auth_state() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        session.insert(keys::AUTH_TOKEN, "tok-123").await.unwrap();
        session
            .insert(
                keys::CURRENT_USER,
                StoredUser {
                    username: "alice".to_string(),
                },
            )
            .await
            .unwrap();

        logout(session.clone()).await.unwrap();

        assert!(session::current_user(&session).await.is_none());
    }
}
