// ============================================================================
// FORMAT - Textos derivados de los modelos
// ============================================================================

use crate::models::cart::cents_to_price;
use crate::models::Order;

const DEFAULT_ICON: &str = "📦";

const PRODUCT_ICONS: [(&str, &str); 5] = [
    ("Laptop", "💻"),
    ("Mouse", "🖱️"),
    ("Keyboard", "⌨️"),
    ("Monitor", "🖥️"),
    ("Headphones", "🎧"),
];

/// `$1038.98`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn format_cents(cents: i64) -> String {
    format_price(cents_to_price(cents))
}

/// Icono por nombre exacto de producto; `📦` si no está en la tabla
pub fn product_icon(name: &str) -> &'static str {
    PRODUCT_ICONS
        .iter()
        .find(|(product, _)| *product == name)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Fecha legible del pedido; el texto crudo si no se reconoce el formato
pub fn format_order_date(order: &Order) -> String {
    match order.placed_at() {
        Some(placed_at) => placed_at.format("%Y-%m-%d %H:%M").to_string(),
        None => order.order_date.clone().unwrap_or_default(),
    }
}
