//! In-memory product backend for local development and tests.
//!
//! Serves `/products` and `/products/{id}`. Errors carry a JSON body with an
//! `error` field; delete answers 204 with no body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    products: Vec<Product>,
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(id: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("Product {id} not found"),
        }
    }

    fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub fn app() -> Router {
    app_with(Store::default())
}

/// Router over a pre-filled store.
pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

impl Store {
    /// Insert with the next id, as a POST would.
    pub fn insert(&mut self, mut fields: Map<String, Value>) -> Product {
        fields.remove("id");
        self.next_id += 1;
        let product = Product {
            id: self.next_id,
            fields,
        };
        self.products.push(product.clone());
        product
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id: i64 = id.parse().ok()?;
        self.products.iter().position(|p| p.id == id)
    }
}

fn into_object(body: Value) -> Result<Map<String, Value>, ApiError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::bad_request("Request body must be a JSON object")),
    }
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    Json(db.read().await.products.clone())
}

async fn create_product(
    State(db): State<Db>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let fields = into_object(body)?;
    let product = db.write().await.insert(fields);
    tracing::debug!(id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let store = db.read().await;
    let index = store.position(&id).ok_or_else(|| ApiError::not_found(&id))?;
    Ok(Json(store.products[index].clone()))
}

/// Fields in the body overwrite stored ones; absent fields are kept.
async fn update_product(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Product>, ApiError> {
    let mut fields = into_object(body)?;
    fields.remove("id");
    let mut store = db.write().await;
    let index = store.position(&id).ok_or_else(|| ApiError::not_found(&id))?;
    let product = &mut store.products[index];
    product.fields.extend(fields);
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    let index = store.position(&id).ok_or_else(|| ApiError::not_found(&id))?;
    store.products.remove(index);
    Ok(StatusCode::NO_CONTENT)
}
