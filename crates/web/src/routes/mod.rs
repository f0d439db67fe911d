//! HTTP route handlers for the storefront widget.
//!
//! All event wiring happens here, once, at router construction: DOM-side
//! interactions (filter buttons, category cards, search box, add-to-cart
//! forms) are HTMX requests against these named handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page
//! GET  /health                   - Health check (registered in main)
//!
//! # Products (HTMX fragments)
//! GET  /products?filter=...      - Product grid (all | featured | sale)
//! GET  /products/category/{id}   - Product grid filtered by category
//! GET  /products/search?keyword= - Product grid from keyword search
//!
//! # Cart (HTMX fragments)
//! POST /cart/add                 - Add one unit, returns count badge + notice
//! GET  /cart/count               - Cart count badge
//!
//! # Auth
//! POST /auth/logout              - Clear stored token and profile
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list))
        .route("/category/{id}", get(products::by_category))
        .route("/search", get(products::search))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Auth routes
        .route("/auth/logout", post(auth::logout))
}
