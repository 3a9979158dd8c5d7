//! Store API client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use thiserror::Error;

use crate::backend::models::{OrderReceipt, OrderRequest, Product};

/// Configuration for reaching the store API.
#[derive(Debug, Clone)]
pub struct StoreApiConfig {
    /// Backend base address, e.g. `"http://localhost:5000"`.
    pub base_url: String,
}

/// HTTP client for the store API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: StoreApiConfig,
    http: Client,
}

impl HttpBackend {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: StoreApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn products_request(&self, category: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}/api/products", self.config.base_url);
        let request = self.http.get(url);

        // An empty filter means "no filter"; only attach the parameter when
        // there is something to filter by.
        match category.filter(|value| !value.is_empty()) {
            Some(category) => request.query(&[("category", category)]),
            None => request,
        }
    }
}

#[async_trait]
impl StoreBackend for HttpBackend {
    async fn fetch_products(&self, category: Option<String>) -> Result<Vec<Product>, BackendError> {
        let response = self.products_request(category.as_deref()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(BackendError::UnexpectedResponse(format!(
                "product listing failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }

    async fn create_order(&self, order: OrderRequest) -> Result<OrderReceipt, BackendError> {
        let url = format!("{}/api/orders", self.config.base_url);

        let response = self.http.post(url).json(&order).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(BackendError::UnexpectedResponse(format!(
                "order submission failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

/// Operations the storefront needs from the store API.
#[automock]
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Fetch the product catalog, filtered by category when one is given.
    async fn fetch_products(&self, category: Option<String>) -> Result<Vec<Product>, BackendError>;

    /// Submit an order, returning the receipt for the created record.
    async fn create_order(&self, order: OrderRequest) -> Result<OrderReceipt, BackendError>;
}

/// Errors that can occur when talking to the store API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store API returned a non-2xx response or an unexpected body.
    #[error("unexpected response from store API: {0}")]
    UnexpectedResponse(String),
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn backend() -> HttpBackend {
        HttpBackend::new(StoreApiConfig {
            base_url: "http://localhost:5000".to_string(),
        })
    }

    #[test]
    fn products_request_without_filter_has_no_query() -> TestResult {
        let request = backend().products_request(None).build()?;

        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/products"
        );

        Ok(())
    }

    #[test]
    fn products_request_treats_an_empty_filter_as_no_filter() -> TestResult {
        let request = backend().products_request(Some("")).build()?;

        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/products"
        );

        Ok(())
    }

    #[test]
    fn products_request_encodes_the_category_filter() -> TestResult {
        let request = backend().products_request(Some("Ice Cream")).build()?;

        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/products?category=Ice+Cream"
        );

        Ok(())
    }
}
