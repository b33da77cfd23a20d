// ============================================================================
// RENDER SURFACE - Lo mínimo que el núcleo necesita del DOM
// ============================================================================
// Navegación, badge y timer de carga solo hablan con este trait; así se
// prueban sin navegador. DomSurface es la implementación real.
// ============================================================================

use web_sys::Element;

use crate::dom::{get_element_by_id, set_display, set_text_content, toggle_class};

pub trait RenderSurface {
    /// Mostrar/ocultar una región o control
    fn set_visible(&self, id: &str, visible: bool);
    fn set_text(&self, id: &str, text: &str);
    fn set_class(&self, id: &str, class: &str, on: bool);
}

/// Superficie real sobre `document`
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSurface;

impl DomSurface {
    fn element(&self, id: &str) -> Option<Element> {
        let element = get_element_by_id(id);
        if element.is_none() {
            log::warn!("⚠️ [DOM] Elemento #{} no encontrado", id);
        }
        element
    }
}

impl RenderSurface for DomSurface {
    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(element) = self.element(id) {
            let display = if visible { "" } else { "none" };
            if let Err(e) = set_display(&element, display) {
                log::error!("❌ [DOM] set_visible #{}: {:?}", id, e);
            }
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            set_text_content(&element, text);
        }
    }

    fn set_class(&self, id: &str, class: &str, on: bool) {
        if let Some(element) = self.element(id) {
            if let Err(e) = toggle_class(&element, class, on) {
                log::error!("❌ [DOM] set_class #{} .{}: {:?}", id, class, e);
            }
        }
    }
}
