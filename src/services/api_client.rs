// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Sin reintentos ni timeout de cliente: el timer de carga es la única señal
// de latencia que ve el usuario.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{Cart, CheckoutRequest, NewCartItem, Order, OrdersPayload, Product};
use crate::services::tracking::TrackingHeaders;

/// Frontera REST consumida por los viewmodels.
/// Un solo hilo (wasm): los futures no necesitan ser `Send`.
#[allow(async_fn_in_trait)]
pub trait ShopApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
    async fn get_cart(&self, user_id: &str) -> Result<Cart, ApiError>;
    async fn add_cart_item(&self, user_id: &str, item: &NewCartItem) -> Result<(), ApiError>;
    async fn remove_cart_item(&self, user_id: &str, item_id: i64) -> Result<(), ApiError>;
    async fn clear_cart(&self, user_id: &str) -> Result<(), ApiError>;
    async fn track_cart_view(&self, user_id: &str, headers: &TrackingHeaders) -> Result<(), ApiError>;
    async fn track_checkout_initiated(
        &self,
        user_id: &str,
        headers: &TrackingHeaders,
    ) -> Result<(), ApiError>;
    async fn checkout(
        &self,
        request: &CheckoutRequest,
        headers: &TrackingHeaders,
    ) -> Result<Order, ApiError>;
    async fn list_orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, ApiError>;
    /// Endpoint potencialmente lento (slow mode del order-service)
    async fn list_all_orders(&self) -> Result<Vec<Order>, ApiError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("⚠️ [API] {} → HTTP {}", response.url(), status);
        Err(ApiError::from_status(status, &body))
    }

    async fn send_builder(builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;
        Self::send(request).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn with_tracking(builder: RequestBuilder, headers: &TrackingHeaders) -> RequestBuilder {
        headers
            .pairs()
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }

    fn json_body<B: serde::Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
        builder
            .json(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopApi for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = Self::send_builder(Request::get(&self.url("/products"))).await?;
        Self::parse(response).await
    }

    async fn get_cart(&self, user_id: &str) -> Result<Cart, ApiError> {
        let response = Self::send_builder(Request::get(&self.url(&cart_path(user_id)))).await?;
        Self::parse(response).await
    }

    async fn add_cart_item(&self, user_id: &str, item: &NewCartItem) -> Result<(), ApiError> {
        log::info!("🛒 [API] Añadiendo {}x {} al carrito de {}", item.quantity, item.product_name, user_id);
        let url = self.url(&format!("{}/items", cart_path(user_id)));
        let request = Self::json_body(Request::post(&url), item)?;
        Self::send(request).await.map(|_| ())
    }

    async fn remove_cart_item(&self, user_id: &str, item_id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/items/{}", cart_path(user_id), item_id));
        Self::send_builder(Request::delete(&url)).await.map(|_| ())
    }

    async fn clear_cart(&self, user_id: &str) -> Result<(), ApiError> {
        Self::send_builder(Request::delete(&self.url(&cart_path(user_id))))
            .await
            .map(|_| ())
    }

    async fn track_cart_view(&self, user_id: &str, headers: &TrackingHeaders) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/view-event", cart_path(user_id)));
        let builder = Self::with_tracking(Request::post(&url), headers)
            .header("Content-Type", "application/json");
        Self::send_builder(builder).await.map(|_| ())
    }

    async fn track_checkout_initiated(
        &self,
        user_id: &str,
        headers: &TrackingHeaders,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/checkout-initiated", cart_path(user_id)));
        let builder = Self::with_tracking(Request::post(&url), headers)
            .header("Content-Type", "application/json");
        Self::send_builder(builder).await.map(|_| ())
    }

    async fn checkout(
        &self,
        request: &CheckoutRequest,
        headers: &TrackingHeaders,
    ) -> Result<Order, ApiError> {
        log::info!("💳 [API] Checkout de {} líneas para {}", request.items.len(), request.user_id);
        let builder = Self::with_tracking(Request::post(&self.url("/orders/checkout")), headers);
        let response = Self::send(Self::json_body(builder, request)?).await?;
        Self::parse(response).await
    }

    async fn list_orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, ApiError> {
        let url = self.url(&format!("/orders/user/{}", encode_segment(user_id)));
        let response = Self::send_builder(Request::get(&url)).await?;
        Self::parse(response).await
    }

    async fn list_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        let response = Self::send_builder(Request::get(&self.url("/orders"))).await?;
        let payload: OrdersPayload = Self::parse(response).await?;
        Ok(payload.into_orders())
    }
}

fn cart_path(user_id: &str) -> String {
    format!("/cart/{}", encode_segment(user_id))
}

/// Escapa un segmento de ruta (el user id lo escribe el usuario)
pub fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}
