//! Home page handler.
//!
//! Renders the full storefront shell: header with auth state and cart
//! badge, the category strip, filter buttons, and the initial product
//! grid. Everything after first paint is swapped in as fragments by the
//! product and cart routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::cart_store;
use crate::catalog::{Category, ProductSelector};
use crate::models::session::{self, CurrentUser};
use crate::notify::{DISMISS_MS, Notice};
use crate::state::AppState;

use super::products::{ProductView, product_views};

/// Icon shown for categories without a dedicated entry below.
const DEFAULT_ICON: &str = "\u{1F4E6}";

/// Fixed icon assignments for the well-known catalog categories.
const CATEGORY_ICONS: [(&str, &str); 5] = [
    ("Electronics", "\u{1F4BB}"),
    ("Clothing", "\u{1F455}"),
    ("Books", "\u{1F4DA}"),
    ("Home & Kitchen", "\u{1F3E0}"),
    ("Sports & Outdoors", "\u{26BD}"),
];

/// The category strip shows at most this many entries.
const MAX_CATEGORIES: usize = 5;

fn icon_for(name: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(category, _)| *category == name)
        .map_or(DEFAULT_ICON, |(_, icon)| icon)
}

/// Category card display data.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub id: i64,
    pub name: String,
    pub product_count: u64,
    pub icon: &'static str,
}

/// Build the category strip, keeping the first [`MAX_CATEGORIES`] entries
/// in listing order.
fn category_views(categories: &[Category]) -> Vec<CategoryView> {
    categories
        .iter()
        .take(MAX_CATEGORIES)
        .map(|category| CategoryView {
            id: category.id.as_i64(),
            name: category.name.clone(),
            product_count: category.product_count.unwrap_or(0),
            icon: icon_for(&category.name),
        })
        .collect()
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user: Option<CurrentUser>,
    pub categories: Vec<CategoryView>,
    pub products: Vec<ProductView>,
    pub count: u32,
    pub notice: Option<Notice>,
    pub dismiss_ms: u32,
}

/// Render the home page.
///
/// A category fetch failure is logged and leaves the strip empty; a
/// product fetch failure additionally surfaces an error notice.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> HomeTemplate {
    let user = session::current_user(&session).await;

    let categories = match state.catalog().categories().await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load categories");
            Vec::new()
        }
    };

    let (products, notice) = match state.catalog().products(&ProductSelector::All).await {
        Ok(products) => (products, None),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load products");
            (Vec::new(), Some(Notice::error("Failed to load products")))
        }
    };

    let cart = cart_store::load(&session).await;

    HomeTemplate {
        user,
        categories: category_views(&categories),
        products: product_views(&products),
        count: cart.item_count(),
        notice,
        dismiss_ms: DISMISS_MS,
    }
}
