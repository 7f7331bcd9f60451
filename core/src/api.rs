//! The four product operations, wired to a transport.
//!
//! Failures are logged and returned unchanged; recovery belongs to the page.

use serde_json::Value;
use tracing::{error, info};

use crate::client::ProductClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Deleted, Product, ProductData, ProductId};

#[derive(Debug, Clone)]
pub struct ProductApi<T> {
    client: ProductClient,
    transport: T,
}

impl<T: Transport> ProductApi<T> {
    pub fn new(config: &ApiConfig, transport: T) -> Self {
        Self {
            client: ProductClient::new(&config.base_url),
            transport,
        }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        info!(url = %self.client.base_url(), "fetching products");
        let result = async {
            let response = self
                .transport
                .execute(self.client.build_list_products())
                .await?;
            self.client.parse_list_products(response)
        }
        .await;
        result.inspect_err(|e| error!(error = %e, "error fetching products"))
    }

    pub async fn create_product(&self, data: &ProductData) -> Result<Value, ApiError> {
        let result = async {
            let request = self.client.build_create_product(data)?;
            let response = self.transport.execute(request).await?;
            self.client.parse_create_product(response)
        }
        .await;
        result.inspect_err(|e| error!(error = %e, "error creating product"))
    }

    pub async fn update_product(
        &self,
        id: &ProductId,
        data: &ProductData,
    ) -> Result<Value, ApiError> {
        let result = async {
            let request = self.client.build_update_product(id, data)?;
            let response = self.transport.execute(request).await?;
            self.client.parse_update_product(id, response)
        }
        .await;
        result.inspect_err(|e| error!(%id, error = %e, "error updating product"))
    }

    pub async fn delete_product(&self, id: &ProductId) -> Result<Deleted, ApiError> {
        let result = async {
            let response = self
                .transport
                .execute(self.client.build_delete_product(id))
                .await?;
            self.client.parse_delete_product(id, response)
        }
        .await;
        result.inspect_err(|e| error!(%id, error = %e, "error deleting product"))
    }
}
