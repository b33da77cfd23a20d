use serde::{Deserialize, Serialize};

/// Línea del carrito tal como la devuelve el cart-service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Total de la línea en céntimos
    pub fn line_total_cents(&self) -> i64 {
        price_to_cents(self.price) * i64::from(self.quantity)
    }
}

/// Snapshot de solo lectura del carrito (GET /api/cart/{userId}).
/// Nunca se modifica localmente: toda mutación pasa por la API y se re-lee.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Total calculado por el servidor (informativo)
    #[serde(default)]
    pub total: Option<f64>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Número de líneas (lo que muestra el badge)
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(CartItem::line_total_cents).sum()
    }

    pub fn total(&self) -> f64 {
        cents_to_price(self.total_cents())
    }
}

/// Body de POST /api/cart/{userId}/items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
}

pub fn price_to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

pub fn cents_to_price(cents: i64) -> f64 {
    cents as f64 / 100.0
}
