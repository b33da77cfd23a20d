// ============================================================================
// CART VIEW - Líneas del carrito + resumen
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, text_element, ElementBuilder, RenderSurface};
use crate::models::{Cart, CartItem};
use crate::views::format::{format_cents, format_price, product_icon};
use crate::views::shell::ids;

/// Resumen del carrito (contador, total y estado del botón de checkout)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub item_count: usize,
    pub total_label: String,
    pub checkout_enabled: bool,
}

impl CartSummary {
    pub fn from_cart(cart: Option<&Cart>) -> Self {
        let item_count = cart.map_or(0, Cart::line_count);
        let total_cents = cart.map_or(0, Cart::total_cents);
        Self {
            item_count,
            total_label: format_cents(total_cents),
            checkout_enabled: item_count > 0,
        }
    }

    pub fn apply(&self, surface: &dyn RenderSurface) {
        surface.set_text(ids::TOTAL_ITEMS, &self.item_count.to_string());
        surface.set_text(ids::TOTAL_AMOUNT, &self.total_label);
    }
}

/// `Quantity: 2 × $19.99`
pub fn line_details(item: &CartItem) -> String {
    format!("Quantity: {} × {}", item.quantity, format_price(item.price))
}

/// Renderizar una línea del carrito; `on_remove` recibe el id de la línea
pub fn render_cart_item(item: &CartItem, on_remove: Rc<dyn Fn(i64)>) -> Result<Element, JsValue> {
    let info = ElementBuilder::new("div")?
        .class("cart-item-info")
        .child(text_element("div", "cart-item-name", &item.product_name)?)?
        .child(text_element("div", "cart-item-details", &line_details(item))?)?
        .build();

    let remove_button = ElementBuilder::new("button")?
        .class("btn btn-danger btn-small")
        .text("Remove")
        .build();
    {
        let item_id = item.id;
        on_click(&remove_button, move |_| on_remove(item_id))?;
    }

    let actions = ElementBuilder::new("div")?
        .class("cart-item-actions")
        .child(text_element("div", "cart-item-price", &format_cents(item.line_total_cents()))?)?
        .child(remove_button)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("cart-item")
        .child(text_element("div", "cart-item-icon", product_icon(&item.product_name))?)?
        .child(info)?
        .child(actions)?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    fn line(id: i64, name: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id,
            product_id: id,
            product_name: name.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn summary_of_missing_cart_disables_checkout() {
        let summary = CartSummary::from_cart(None);
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.total_label, "$0.00");
        assert!(!summary.checkout_enabled);
    }

    #[test]
    fn summary_uses_exact_cent_totals() {
        let cart = Cart {
            items: vec![line(1, "Mouse", 19.99, 2), line(2, "Laptop", 999.00, 1)],
            ..Cart::default()
        };
        let summary = CartSummary::from_cart(Some(&cart));
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_label, "$1038.98");
        assert!(summary.checkout_enabled);

        let surface = RecordingSurface::default();
        summary.apply(&surface);
        assert_eq!(surface.text(ids::TOTAL_AMOUNT).as_deref(), Some("$1038.98"));
        assert_eq!(surface.text(ids::TOTAL_ITEMS).as_deref(), Some("2"));
    }

    #[test]
    fn line_details_show_unit_price() {
        assert_eq!(line_details(&line(1, "Mouse", 19.99, 2)), "Quantity: 2 × $19.99");
    }
}
