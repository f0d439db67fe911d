//! Catalog API client.
//!
//! reqwest-based client for the remote product/category API. Responses are
//! unwrapped from the `{success, data}` envelope; a non-success envelope is
//! indistinguishable from an empty result. Categories and non-search
//! product listings are cached using `moka` (5-minute TTL).

mod types;

pub use types::{Category, Envelope, Listing, Product};

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use shopfront_core::CategoryId;

use crate::config::CatalogConfig;

const CACHE_CAPACITY: u64 = 1000;
const CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Errors that can occur when talking to the catalog API.
///
/// Callers are expected to degrade these to an empty result; nothing here
/// is fatal to a page.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Product listing selector; each variant maps to a distinct endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSelector {
    All,
    Featured,
    OnSale,
    Category(CategoryId),
    Search(String),
}

impl ProductSelector {
    /// Path and query for this selector, relative to the API base URL.
    fn path(&self) -> String {
        match self {
            Self::All => "/products".to_string(),
            Self::Featured => "/products/featured".to_string(),
            Self::OnSale => "/products/on-sale".to_string(),
            Self::Category(id) => format!("/products/category/{id}"),
            Self::Search(keyword) => {
                format!("/products/search?keyword={}", urlencoding::encode(keyword))
            }
        }
    }

    /// Cache key, or `None` for listings that must not be cached.
    fn cache_key(&self) -> Option<String> {
        match self {
            Self::All => Some("products:all".to_string()),
            Self::Featured => Some("products:featured".to_string()),
            Self::OnSale => Some("products:on-sale".to_string()),
            Self::Category(id) => Some(format!("products:category:{id}")),
            Self::Search(_) => None,
        }
    }
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Categories(Arc<Vec<Category>>),
    Products(Arc<Vec<Product>>),
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                cache,
            }),
        }
    }

    /// Fetch one enveloped resource.
    ///
    /// Returns `Ok(None)` when the envelope reports non-success or carries
    /// no data. The HTTP status is not checked before decoding - an error
    /// body simply fails to decode, which is reported with diagnostics.
    async fn fetch<T>(&self, path: &str) -> Result<Option<T>, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.inner.base_url, path);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: Envelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(
                    %status,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to decode catalog response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        if !envelope.success {
            debug!(path, "Catalog reported non-success");
            return Ok(None);
        }

        Ok(envelope.data)
    }

    /// Fetch the category list.
    ///
    /// A non-success envelope yields an empty list, indistinguishable from
    /// "no categories".
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        const CACHE_KEY: &str = "categories";

        if let Some(CacheValue::Categories(cached)) = self.inner.cache.get(CACHE_KEY).await {
            debug!("Cache hit for categories");
            return Ok(cached.as_ref().clone());
        }

        let categories = self
            .fetch::<Vec<Category>>("/categories")
            .await?
            .unwrap_or_default();

        self.inner
            .cache
            .insert(
                CACHE_KEY.to_string(),
                CacheValue::Categories(Arc::new(categories.clone())),
            )
            .await;

        Ok(categories)
    }

    /// Fetch products for a selector.
    ///
    /// Flat and paginated payloads unwrap to the same sequence; a
    /// non-success envelope yields an empty list. Search results are never
    /// cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn products(&self, selector: &ProductSelector) -> Result<Vec<Product>, CatalogError> {
        let cache_key = selector.cache_key();

        if let Some(key) = &cache_key
            && let Some(CacheValue::Products(cached)) = self.inner.cache.get(key).await
        {
            debug!("Cache hit for products");
            return Ok(cached.as_ref().clone());
        }

        let products = self
            .fetch::<Listing<Product>>(&selector.path())
            .await?
            .map(Listing::into_vec)
            .unwrap_or_default();

        if let Some(key) = cache_key {
            self.inner
                .cache
                .insert(key, CacheValue::Products(Arc::new(products.clone())))
                .await;
        }

        Ok(products)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_paths() {
        assert_eq!(ProductSelector::All.path(), "/products");
        assert_eq!(ProductSelector::Featured.path(), "/products/featured");
        assert_eq!(ProductSelector::OnSale.path(), "/products/on-sale");
        assert_eq!(
            ProductSelector::Category(CategoryId::new(7)).path(),
            "/products/category/7"
        );
    }

    #[test]
    fn test_search_keyword_is_percent_encoded() {
        let selector = ProductSelector::Search("desk lamp & stand".to_string());
        assert_eq!(
            selector.path(),
            "/products/search?keyword=desk%20lamp%20%26%20stand"
        );
    }

    #[test]
    fn test_search_is_never_cached() {
        assert!(ProductSelector::Search("lamp".to_string()).cache_key().is_none());
        assert_eq!(
            ProductSelector::OnSale.cache_key().as_deref(),
            Some("products:on-sale")
        );
        assert_eq!(
            ProductSelector::Category(CategoryId::new(3)).cache_key().as_deref(),
            Some("products:category:3")
        );
    }
}
