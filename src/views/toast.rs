use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};
use crate::state::Toast;

/// Clase que dispara la animación de salida
pub const TOAST_EXIT_CLASS: &str = "leaving";

pub fn render_toast(toast: &Toast) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(&format!("toast {}", toast.kind.css_class()))
        .id(&toast.id.dom_id())?
        .child(text_element("div", "toast-icon", toast.kind.icon())?)?
        .child(text_element("div", "toast-message", &toast.message)?)?
        .build())
}
