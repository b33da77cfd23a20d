use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};

/// Mensaje para listas vacías
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub hint: Option<&'static str>,
}

impl EmptyState {
    pub const NO_PRODUCTS: EmptyState = EmptyState {
        icon: "📦",
        title: "No products available",
        hint: None,
    };

    pub const EMPTY_CART: EmptyState = EmptyState {
        icon: "🛒",
        title: "Your cart is empty",
        hint: Some("Add some products to get started!"),
    };

    pub const NO_ORDERS: EmptyState = EmptyState {
        icon: "📋",
        title: "No orders yet",
        hint: Some("Start shopping to see your orders here!"),
    };

    pub const NO_ORDERS_IN_SYSTEM: EmptyState = EmptyState {
        icon: "📋",
        title: "No orders in system",
        hint: Some("No orders have been placed yet."),
    };
}

pub fn render_empty_state(state: &EmptyState) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("div")?
        .class("empty-state")
        .child(text_element("div", "empty-state-icon", state.icon)?)?
        .child(ElementBuilder::new("h3")?.text(state.title).build())?;
    if let Some(hint) = state.hint {
        builder = builder.child(ElementBuilder::new("p")?.text(hint).build())?;
    }
    Ok(builder.build())
}
