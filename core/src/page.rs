//! Page controller for the product list.
//!
//! # Design
//! `ProductPage` owns the client-side snapshot of the collection and the edit
//! session. It never patches individual products: every successful mutation
//! is followed by exactly one full `refresh()`. It is the only place errors
//! are recovered; they become the `error` string shown by the view.
//!
//! Operations take `&mut self`, so a single page runs one request sequence at
//! a time and a refresh only starts after its mutation has resolved.

use serde_json::Map;
use tracing::{debug, warn};

use crate::api::ProductApi;
use crate::transport::Transport;
use crate::types::{EditSession, Product, ProductData, ProductId};

pub const LOAD_FAILED: &str = "Failed to load products. Check console for details.";
pub const CREATE_FALLBACK: &str = "Error creating product.";
pub const UPDATE_FALLBACK: &str = "Error updating product.";
pub const DELETE_FALLBACK: &str = "Error deleting product.";

pub const CREATED: &str = "Product created successfully!";
pub const UPDATED: &str = "Product updated successfully!";
pub const DELETED: &str = "Product deleted successfully!";

/// User interaction the page needs from its host.
pub trait Prompt {
    /// Ask a yes/no question. Returning `false` aborts the action.
    fn confirm(&mut self, message: &str) -> bool;

    /// Tell the user an action succeeded.
    fn notify(&mut self, message: &str);
}

/// Props for the form collaborator: `(onSubmit, initialData, isUpdate)`.
/// The submit handler is `ProductPage::submit`, which picks create or update
/// from the edit session.
#[derive(Debug, Clone, PartialEq)]
pub struct FormProps {
    pub initial_data: ProductData,
    pub is_update: bool,
}

/// What the page should display right now.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView<'a> {
    Loading,
    /// Replaces the whole page, list included.
    Error(&'a str),
    Ready {
        form: FormProps,
        products: &'a [Product],
    },
}

pub struct ProductPage<T, P> {
    api: ProductApi<T>,
    prompt: P,
    products: Vec<Product>,
    is_loading: bool,
    error: Option<String>,
    edit: EditSession,
}

impl<T: Transport, P: Prompt> ProductPage<T, P> {
    /// A fresh page is loading until its first `refresh()` completes.
    pub fn new(api: ProductApi<T>, prompt: P) -> Self {
        Self {
            api,
            prompt,
            products: Vec::new(),
            is_loading: true,
            error: None,
            edit: EditSession::Idle,
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn api(&self) -> &ProductApi<T> {
        &self.api
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub async fn refresh(&mut self) {
        self.is_loading = true;
        self.error = None;
        match self.api.list_products().await {
            Ok(products) => {
                debug!(count = products.len(), "products loaded");
                self.products = products;
            }
            Err(_) => self.error = Some(LOAD_FAILED.to_string()),
        }
        self.is_loading = false;
    }

    /// Create, or update the product being edited.
    pub async fn submit(&mut self, data: ProductData) {
        let editing = self.edit.product().map(|product| product.id.clone());
        let outcome = match editing {
            Some(id) => match self.api.update_product(&id, &data).await {
                Ok(_) => {
                    self.edit = EditSession::Idle;
                    Ok(UPDATED)
                }
                Err(e) => Err((e.to_string(), UPDATE_FALLBACK)),
            },
            None => match self.api.create_product(&data).await {
                Ok(_) => Ok(CREATED),
                Err(e) => Err((e.to_string(), CREATE_FALLBACK)),
            },
        };
        self.finish(outcome).await;
    }

    /// Delete after the user confirms. Declining changes nothing.
    pub async fn request_delete(&mut self, id: &ProductId) {
        if !self
            .prompt
            .confirm(&format!("Are you sure you want to delete product {id}?"))
        {
            debug!(%id, "delete declined");
            return;
        }
        let outcome = match self.api.delete_product(id).await {
            Ok(_) => Ok(DELETED),
            Err(e) => Err((e.to_string(), DELETE_FALLBACK)),
        };
        self.finish(outcome).await;
    }

    pub fn begin_edit(&mut self, product: Product) {
        self.edit = EditSession::Editing(product);
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditSession::Idle;
    }

    /// Find a loaded product by id and start editing it.
    pub fn begin_edit_by_id(&mut self, id: &ProductId) -> bool {
        match self.products.iter().find(|p| &p.id == id) {
            Some(product) => {
                self.edit = EditSession::Editing(product.clone());
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> PageView<'_> {
        if self.is_loading {
            return PageView::Loading;
        }
        if let Some(error) = &self.error {
            return PageView::Error(error);
        }
        let form = match &self.edit {
            EditSession::Editing(product) => FormProps {
                initial_data: product.to_data(),
                is_update: true,
            },
            EditSession::Idle => FormProps {
                initial_data: Map::new(),
                is_update: false,
            },
        };
        PageView::Ready {
            form,
            products: &self.products,
        }
    }

    async fn finish(&mut self, outcome: Result<&'static str, (String, &'static str)>) {
        match outcome {
            Ok(notice) => {
                self.refresh().await;
                self.prompt.notify(notice);
            }
            Err((message, fallback)) => {
                let message = if message.is_empty() {
                    fallback.to_string()
                } else {
                    message
                };
                warn!(error = %message, "product mutation failed");
                self.error = Some(message);
            }
        }
    }
}
