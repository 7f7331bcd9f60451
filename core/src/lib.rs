//! Client core for the inventory service.
//!
//! # Overview
//! `ProductClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. `ProductApi` pairs it with a
//! `Transport` to run the four product operations, and `ProductPage` keeps
//! the client-side view of the collection in step with the backend.
//!
//! # Design
//! - The base URL comes from an injected `ApiConfig`, never a global.
//! - Every non-2xx response becomes one human-readable message.
//! - After each successful mutation the page re-fetches the whole list
//!   instead of patching it locally.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod page;
pub mod transport;
pub mod types;

pub use api::ProductApi;
pub use client::ProductClient;
pub use config::ApiConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use page::{FormProps, PageView, ProductPage, Prompt};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Deleted, EditSession, Product, ProductData, ProductId};
