//! Stateless HTTP request builder and response parser for the product API.
//!
//! # Design
//! `ProductClient` holds only a `base_url`. Each CRUD operation is split into
//! a `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. All parsers share one failure contract:
//! a non-2xx status becomes `ApiError::Request` carrying the server's `error`
//! field, or the operation's default message when the body has none.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Deleted, Product, ProductData, ProductId};

pub const LIST_FAILED: &str = "Failed to fetch products.";
pub const CREATE_FAILED: &str = "Failed to create product.";

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Synchronous, stateless client for the product API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &ProductId) -> String {
        format!("{}/{id}", self.base_url)
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.base_url.clone(),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn build_create_product(&self, data: &ProductData) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(data).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.base_url.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_product(
        &self,
        id: &ProductId,
        data: &ProductData,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(data).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.item_url(id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_product(&self, id: &ProductId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        handle_response(response, LIST_FAILED)
    }

    /// The body is returned as-is; backends differ in what they echo back.
    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Value, ApiError> {
        handle_body(response, CREATE_FAILED)
    }

    pub fn parse_update_product(
        &self,
        id: &ProductId,
        response: HttpResponse,
    ) -> Result<Value, ApiError> {
        handle_body(response, &format!("Failed to update product {id}."))
    }

    /// 204 succeeds without looking at the body.
    pub fn parse_delete_product(
        &self,
        id: &ProductId,
        response: HttpResponse,
    ) -> Result<Deleted, ApiError> {
        if response.status == 204 {
            return Ok(Deleted::NoContent);
        }
        handle_body(response, &format!("Failed to delete product {id}.")).map(Deleted::Returned)
    }
}

/// Like `handle_response` for untyped bodies; an empty 2xx body is `Null`.
fn handle_body(response: HttpResponse, default_message: &str) -> Result<Value, ApiError> {
    if response.is_success() && response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    handle_response(response, default_message)
}

/// Check the status, then decode the body as `T`.
fn handle_response<T: DeserializeOwned>(
    response: HttpResponse,
    default_message: &str,
) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(failure(&response, default_message));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Build the error for a non-2xx response. An undecodable body counts as `{}`.
fn failure(response: &HttpResponse, default_message: &str) -> ApiError {
    let detail: Map<String, Value> = serde_json::from_str(&response.body).unwrap_or_default();
    let message = detail
        .get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default_message)
        .to_string();
    ApiError::Request {
        status: response.status,
        message,
    }
}
