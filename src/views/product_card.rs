// ============================================================================
// PRODUCT CARD VIEW
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, text_element, ElementBuilder};
use crate::models::Product;
use crate::views::format::{format_price, product_icon};

/// ID del input de cantidad de un producto
pub fn quantity_input_id(product_id: i64) -> String {
    format!("qty-{}", product_id)
}

/// Renderizar product card; `on_add` recibe el id del producto
pub fn render_product_card(product: &Product, on_add: Rc<dyn Fn(i64)>) -> Result<Element, JsValue> {
    let footer = ElementBuilder::new("div")?
        .class("product-footer")
        .child(text_element("div", "product-price", &format_price(product.price))?)?
        .child(text_element("div", "product-stock", &format!("Stock: {}", product.stock))?)?
        .build();

    let quantity = ElementBuilder::new("input")?
        .id(&quantity_input_id(product.id))?
        .attr("type", "number")?
        .attr("min", "1")?
        .attr("max", &product.stock.to_string())?
        .attr("value", "1")?
        .build();

    let add_button = ElementBuilder::new("button")?
        .class("btn btn-primary btn-small")
        .text("Add to Cart")
        .build();
    {
        let product_id = product.id;
        on_click(&add_button, move |_| on_add(product_id))?;
    }

    let actions = ElementBuilder::new("div")?
        .class("product-actions")
        .child(quantity)?
        .child(add_button)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("product-card")
        .attr("data-product-id", &product.id.to_string())?
        .child(text_element("div", "product-icon", product_icon(&product.name))?)?
        .child(text_element("div", "product-name", &product.name)?)?
        .child(text_element("div", "product-description", &product.description)?)?
        .child(footer)?
        .child(actions)?
        .build())
}
