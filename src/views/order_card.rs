// ============================================================================
// ORDER CARD VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};
use crate::models::{Order, OrderItem};
use crate::views::format::{format_cents, format_order_date, format_price, product_icon};

fn render_order_item(item: &OrderItem) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("div")?
        .child(text_element("span", "order-item-icon", product_icon(&item.product_name))?)?
        .child(text_element("span", "order-item-name", &item.product_name)?)?
        .child(text_element("span", "order-item-details", &format!(" × {}", item.quantity))?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("order-item")
        .child(label)?
        .child(text_element("div", "", &format_cents(item.line_total_cents()))?)?
        .build())
}

pub fn render_order_card(order: &Order) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("order-header")
        .child(
            ElementBuilder::new("div")?
                .child(text_element("div", "order-id", &format!("Order #{}", order.id))?)?
                .child(text_element("div", "order-date", &format_order_date(order))?)?
                .build(),
        )?
        .child(text_element(
            "div",
            &format!("order-status {}", order.status.css_class()),
            order.status.label(),
        )?)?
        .build();

    let items = ElementBuilder::new("div")?
        .class("order-items")
        .children(
            order
                .items
                .iter()
                .map(render_order_item)
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    let total = ElementBuilder::new("div")?
        .class("order-total")
        .child(text_element("span", "", "Total:")?)?
        .child(text_element("span", "", &format_price(order.total_amount))?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("order-card")
        .child(header)?
        .child(items)?
        .child(total)?
        .build())
}
