//! Product listing fragment handlers.
//!
//! Every handler renders the same grid fragment for a different selector.
//! Catalog failures degrade to an empty grid with a generic error notice;
//! nothing here is fatal to the page.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use shopfront_core::{CategoryId, format_yen, pricing};

use crate::catalog::{Product, ProductSelector};
use crate::error::Result;
use crate::notify::{Notice, NoticeTemplate};
use crate::state::AppState;

/// Product card display data.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Effective price, formatted for display.
    pub price: String,
    /// Effective price as a plain decimal string, posted by the
    /// add-to-cart form.
    pub price_value: String,
    /// Regular price, present only when on sale.
    pub original_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub in_stock: bool,
    pub stock_quantity: i64,
    pub rating: String,
    pub review_count: u64,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        let effective = pricing::effective_price(product.price, product.sale_price);
        let on_sale = pricing::is_on_sale(product.price, product.sale_price);

        let (original_price, discount_percent) = if on_sale {
            (
                Some(format_yen(product.price)),
                product
                    .sale_price
                    .map(|sale| pricing::discount_percent(product.price, sale)),
            )
        } else {
            (None, None)
        };

        let stock_quantity = product.stock_quantity.unwrap_or(0);

        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            description: product
                .short_description
                .clone()
                .or_else(|| product.description.clone())
                .unwrap_or_default(),
            price: format_yen(effective),
            price_value: effective.normalize().to_string(),
            original_price,
            discount_percent,
            in_stock: stock_quantity > 0,
            stock_quantity,
            rating: product
                .average_rating
                .map_or_else(|| "0".to_string(), |rating| rating.normalize().to_string()),
            review_count: product.review_count.unwrap_or(0),
            image_url: product.main_image_url.clone(),
        }
    }
}

/// Product grid fragment template.
#[derive(Template)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductView>,
}

/// Build the product views for a listing.
pub fn product_views(products: &[Product]) -> Vec<ProductView> {
    products.iter().map(ProductView::from).collect()
}

/// Map the filter query value to a selector; unknown values mean "all".
fn selector_for_filter(filter: Option<&str>) -> ProductSelector {
    match filter {
        Some("featured") => ProductSelector::Featured,
        Some("sale") => ProductSelector::OnSale,
        _ => ProductSelector::All,
    }
}

/// Fetch a listing and render the grid fragment, degrading a catalog
/// failure to an empty grid with an out-of-band error notice.
async fn render_grid(state: &AppState, selector: &ProductSelector) -> Result<Html<String>> {
    let (products, notice) = match state.catalog().products(selector).await {
        Ok(products) => (products, None),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load products");
            (Vec::new(), Some(Notice::error("Failed to load products")))
        }
    };

    let mut html = ProductGridTemplate {
        products: product_views(&products),
    }
    .render()?;

    if let Some(notice) = notice {
        html.push_str(&NoticeTemplate::oob(notice).render()?);
    }

    Ok(Html(html))
}

/// Filtered listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub filter: Option<String>,
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

/// Product grid for a filter button (HTMX).
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
    render_grid(&state, &selector_for_filter(query.filter.as_deref())).await
}

/// Product grid for a category card (HTMX).
#[instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>> {
    render_grid(&state, &ProductSelector::Category(CategoryId::new(id))).await
}

/// Product grid for a keyword search (HTMX).
///
/// A blank keyword falls back to the unfiltered listing.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>> {
    let keyword = query.keyword.trim();
    let selector = if keyword.is_empty() {
        ProductSelector::All
    } else {
        ProductSelector::Search(keyword.to_string())
    };

    render_grid(&state, &selector).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use shopfront_core::ProductId;

    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Desk Lamp".to_string(),
            price: Decimal::from(1000),
            sale_price: None,
            short_description: Some("A lamp".to_string()),
            description: Some("A longer lamp description".to_string()),
            stock_quantity: Some(5),
            average_rating: Some("4.5".parse().unwrap()),
            review_count: Some(12),
            main_image_url: None,
        }
    }

    #[test]
    fn test_view_for_sale_product() {
        let mut on_sale = product();
        on_sale.sale_price = Some(Decimal::from(750));

        let view = ProductView::from(&on_sale);
        assert_eq!(view.price, "¥750");
        assert_eq!(view.price_value, "750");
        assert_eq!(view.original_price.as_deref(), Some("¥1,000"));
        assert_eq!(view.discount_percent, Some(25));
    }

    #[test]
    fn test_view_for_regular_product() {
        let view = ProductView::from(&product());
        assert_eq!(view.price, "¥1,000");
        assert!(view.original_price.is_none());
        assert!(view.discount_percent.is_none());
        assert!(view.in_stock);
        assert_eq!(view.rating, "4.5");
    }

    #[test]
    fn test_view_description_falls_back() {
        let mut bare = product();
        bare.short_description = None;
        assert_eq!(
            ProductView::from(&bare).description,
            "A longer lamp description"
        );

        bare.description = None;
        assert_eq!(ProductView::from(&bare).description, "");
    }

    #[test]
    fn test_view_out_of_stock() {
        let mut sold_out = product();
        sold_out.stock_quantity = Some(0);
        assert!(!ProductView::from(&sold_out).in_stock);

        sold_out.stock_quantity = None;
        assert!(!ProductView::from(&sold_out).in_stock);
    }

    #[test]
    fn test_selector_for_filter() {
        assert_eq!(selector_for_filter(Some("featured")), ProductSelector::Featured);
        assert_eq!(selector_for_filter(Some("sale")), ProductSelector::OnSale);
        assert_eq!(selector_for_filter(Some("bogus")), ProductSelector::All);
        assert_eq!(selector_for_filter(None), ProductSelector::All);
    }

    #[test]
    fn test_grid_renders_cards() {
        let html = ProductGridTemplate {
            products: product_views(&[product()]),
        }
        .render()
        .unwrap();

        assert!(html.contains("Desk Lamp"));
        assert!(html.contains("¥1,000"));
        assert!(html.contains("Add to Cart"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_grid_disables_out_of_stock_card() {
        let mut sold_out = product();
        sold_out.stock_quantity = Some(0);

        let html = ProductGridTemplate {
            products: product_views(&[sold_out]),
        }
        .render()
        .unwrap();

        assert!(html.contains("disabled"));
        assert!(html.contains("Out of stock"));
    }

    #[test]
    fn test_empty_grid_shows_placeholder() {
        let html = ProductGridTemplate { products: vec![] }.render().unwrap();
        assert!(html.contains("No products found"));
    }
}
