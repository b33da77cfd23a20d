// ============================================================================
// EVENT HANDLING
// ============================================================================
// forget() deja el Closure vivo para siempre, junto con lo que captura (un
// clon de App). Cada re-render de tarjetas o líneas del carrito pierde así
// los closures de la lista anterior aunque el elemento ya no exista.
// Los listeners globales se registran UNA sola vez en App::mount.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Registrar un click handler
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click handler por ID; no-op si el elemento no existe
pub fn on_click_id<F>(id: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    match crate::dom::get_element_by_id(id) {
        Some(element) => on_click(&element, handler),
        None => {
            log::warn!("⚠️ [DOM] #{} no existe, click handler ignorado", id);
            Ok(())
        }
    }
}

/// ID del elemento que recibió el evento (para clicks en el backdrop)
pub fn event_target_id(event: &MouseEvent) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| element.id())
}
