// ============================================================================
// MODAL VIEW - Confirmación de pedido
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, text_element, ElementBuilder};
use crate::models::Order;
use crate::views::format::format_price;

/// Clase que muestra el modal
pub const MODAL_SHOW_CLASS: &str = "show";

pub fn render_order_confirmation(order: &Order, on_view_orders: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let view_orders = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("View Orders")
        .build();
    on_click(&view_orders, move |_| on_view_orders())?;

    Ok(ElementBuilder::new("div")?
        .class("order-confirmation")
        .child(text_element("div", "confirmation-icon", "✅")?)?
        .child(ElementBuilder::new("h2")?.text("Order Confirmed!").build())?
        .child(text_element(
            "p",
            "confirmation-message",
            &format!("Your order #{} has been placed successfully.", order.id),
        )?)?
        .child(text_element(
            "div",
            "confirmation-total",
            &format!("Total: {}", format_price(order.total_amount)),
        )?)?
        .child(view_orders)?
        .build())
}
