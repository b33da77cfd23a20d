use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::cart::{price_to_cents, CartItem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }

    /// Clase CSS del badge de estado
    pub fn css_class(&self) -> String {
        self.label().to_lowercase()
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total_cents(&self) -> i64 {
        price_to_cents(self.price) * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    /// LocalDateTime de Java (sin zona) o RFC 3339
    #[serde(default)]
    pub order_date: Option<String>,
}

impl Order {
    /// Fecha del pedido si el formato es reconocible
    pub fn placed_at(&self) -> Option<NaiveDateTime> {
        let raw = self.order_date.as_deref()?.trim();
        if let Ok(with_zone) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_zone.naive_utc());
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }
}

/// Ordena del más reciente al más antiguo; fechas ilegibles al final
pub fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.placed_at().cmp(&a.placed_at()));
}

/// GET /api/orders puede devolver un array o un objeto `{ "orders": [...] }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrdersPayload {
    Bare(Vec<Order>),
    Wrapped {
        #[serde(default)]
        orders: Vec<Order>,
    },
}

impl OrdersPayload {
    pub fn into_orders(self) -> Vec<Order> {
        match self {
            OrdersPayload::Bare(orders) => orders,
            OrdersPayload::Wrapped { orders } => orders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<&CartItem> for CheckoutItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Body de POST /api/orders/checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub user_id: String,
    pub items: Vec<CheckoutItem>,
}
