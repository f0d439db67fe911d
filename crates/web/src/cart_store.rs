//! Session-backed cart persistence.
//!
//! The session plays the role of the browser's durable storage: one key
//! holds the serialized cart snapshot. Reads fall back to an empty cart
//! when the snapshot is absent or unreadable; writes overwrite the whole
//! snapshot, last writer wins. No locking - concurrent writes from the
//! same browser are unguarded.

use tower_sessions::Session;

use shopfront_core::Cart;

use crate::models::session::keys;

/// Load the cart snapshot, falling back to an empty cart.
pub async fn load(session: &Session) -> Cart {
    match session.get::<Cart>(keys::CART).await {
        Ok(Some(cart)) => cart,
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!("Discarding unreadable cart snapshot: {e}");
            Cart::new()
        }
    }
}

/// Serialize and overwrite the cart snapshot.
///
/// # Errors
///
/// Returns an error if the session write fails.
pub async fn save(session: &Session, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}
