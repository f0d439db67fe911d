//! Cart fragment handlers.
//!
//! The cart is never held in process memory across requests: every handler
//! re-hydrates from the session store, so changes made by other pages in
//! the same browser are picked up.

use askama::Template;
use axum::{Form, response::Html};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use shopfront_core::ProductId;

use crate::cart_store;
use crate::error::Result;
use crate::notify::{Notice, NoticeTemplate};

/// Add-to-cart form data. The card posts the effective price it displayed.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
    pub name: String,
    pub price: Decimal,
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Add one unit to the cart (HTMX).
///
/// Loads the stored cart, merges the line, persists, then returns the
/// refreshed count badge plus an out-of-band success notice.
#[instrument(skip(session, form), fields(product_id = form.product_id))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Html<String>> {
    let mut cart = cart_store::load(&session).await;
    cart.add_item(ProductId::new(form.product_id), &form.name, form.price);
    cart_store::save(&session, &cart).await?;

    let mut html = CartCountTemplate {
        count: cart.item_count(),
    }
    .render()?;
    html.push_str(
        &NoticeTemplate::oob(Notice::success(format!("Added {} to cart", form.name))).render()?,
    );

    Ok(Html(html))
}

/// Cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Html<String>> {
    let cart = cart_store::load(&session).await;

    Ok(Html(
        CartCountTemplate {
            count: cart.item_count(),
        }
        .render()?,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_count_badge_markup() {
        let html = CartCountTemplate { count: 6 }.render().unwrap();
        assert!(html.contains("id=\"cart-count\""));
        assert!(html.contains('6'));
    }
}
