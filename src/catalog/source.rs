use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use tokio::time::timeout;

use crate::catalog::error::LoadError;
use crate::catalog::product::{decode_products, Product};
use crate::config::SourceConfig;

const AGENT: &str = concat!("product-browser/", env!("CARGO_PKG_VERSION"));

/// Reads the product listing endpoint.
pub struct ProductClient {
    client: Client,
    url: String,
    request_timeout: Duration,
    connect_timeout: Duration,
}

impl ProductClient {
    pub fn new(config: &SourceConfig) -> Result<Self, reqwest::Error> {
        let connect_timeout = Duration::from_secs(config.connect_timeout_seconds.into());
        let client = Client::builder().connect_timeout(connect_timeout).build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
            connect_timeout,
        })
    }

    /// Fetch the whole catalog with a single GET.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, LoadError> {
        tracing::info!("Fetching products from {}", self.url);

        let result = timeout(self.request_timeout, self.do_fetch()).await;

        let products = match result {
            Ok(products) => products,
            Err(_) => Err(self.timed_out(false)),
        };

        match &products {
            Ok(list) => tracing::info!(count = list.len(), "Catalog loaded"),
            Err(err) => tracing::warn!(kind = err.kind(), "Catalog load failed: {}", err),
        }
        products
    }

    async fn do_fetch(&self) -> Result<Vec<Product>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, AGENT)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let values: Vec<Value> = response.json().await.map_err(|e| LoadError::Decode {
            url: self.url.clone(),
            source: e,
        })?;

        Ok(decode_products(values))
    }

    fn transport_error(&self, err: reqwest::Error) -> LoadError {
        if err.is_timeout() {
            return self.timed_out(err.is_connect());
        }
        LoadError::Connection {
            url: self.url.clone(),
            source: err,
        }
    }

    /// Timeout error carrying the limit that was actually hit.
    fn timed_out(&self, during_connect: bool) -> LoadError {
        let limit = if during_connect {
            self.connect_timeout
        } else {
            self.request_timeout
        };
        LoadError::Timeout {
            url: self.url.clone(),
            seconds: limit.as_secs(),
        }
    }
}
