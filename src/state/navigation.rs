// ============================================================================
// NAVIGATION - Registro de vistas + controlador de página activa
// ============================================================================
// Máquina de Mealy: las acciones de carga dependen solo de la página destino.
// ============================================================================

use crate::dom::RenderSurface;
use crate::models::Page;

pub const ACTIVE_CLASS: &str = "active";

/// Acción de carga que dispara una transición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadAction {
    ReloadCart,
    /// Evento de funnel "cart viewed" (fire-and-forget)
    TrackCartView,
    ReloadMyOrders,
}

/// Región del DOM + acciones asociadas a una página
#[derive(Debug)]
pub struct ViewEntry {
    pub page: Page,
    pub region_id: &'static str,
    pub nav_button_id: &'static str,
    /// Al entrar por navegación
    pub on_enter: &'static [LoadAction],
    /// Al recargar datos sin navegar (cambio de usuario)
    pub on_reload: &'static [LoadAction],
}

const VIEWS: [ViewEntry; 3] = [
    ViewEntry {
        page: Page::Products,
        region_id: "productsPage",
        nav_button_id: "navProducts",
        // El catálogo se carga una sola vez al arrancar
        on_enter: &[],
        on_reload: &[],
    },
    ViewEntry {
        page: Page::Cart,
        region_id: "cartPage",
        nav_button_id: "navCart",
        on_enter: &[LoadAction::ReloadCart, LoadAction::TrackCartView],
        on_reload: &[LoadAction::ReloadCart],
    },
    ViewEntry {
        page: Page::Orders,
        region_id: "ordersPage",
        nav_button_id: "navOrders",
        on_enter: &[LoadAction::ReloadMyOrders],
        on_reload: &[LoadAction::ReloadMyOrders],
    },
];

pub struct ViewRegistry;

impl ViewRegistry {
    pub fn entry(page: Page) -> &'static ViewEntry {
        // VIEWS cubre Page::ALL en el mismo orden
        match page {
            Page::Products => &VIEWS[0],
            Page::Cart => &VIEWS[1],
            Page::Orders => &VIEWS[2],
        }
    }

    pub fn entries() -> &'static [ViewEntry] {
        &VIEWS
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    active: Page,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_page(&self) -> Page {
        self.active
    }

    /// Pinta el estado inicial: solo la página activa lleva `.active`
    pub fn mount(&self, surface: &dyn RenderSurface) {
        for entry in ViewRegistry::entries() {
            set_entry_active(surface, entry, entry.page == self.active);
        }
    }

    /// Transición a `page_id` (valor de `data-page`).
    /// Devuelve las acciones de carga, o `None` si la página no existe (no-op).
    pub fn navigate_to(
        &mut self,
        page_id: &str,
        surface: &dyn RenderSurface,
    ) -> Option<&'static [LoadAction]> {
        let target: Page = match page_id.parse() {
            Ok(page) => page,
            Err(e) => {
                log::warn!("⚠️ [NAV] {}", e);
                return None;
            }
        };

        set_entry_active(surface, ViewRegistry::entry(self.active), false);
        let entry = ViewRegistry::entry(target);
        set_entry_active(surface, entry, true);

        log::info!("🧭 [NAV] {} → {}", self.active, target);
        self.active = target;
        Some(entry.on_enter)
    }

    /// Recargas de datos de la página activa (sin eventos de funnel)
    pub fn reload_actions(&self) -> &'static [LoadAction] {
        ViewRegistry::entry(self.active).on_reload
    }
}

fn set_entry_active(surface: &dyn RenderSurface, entry: &ViewEntry, active: bool) {
    surface.set_class(entry.region_id, ACTIVE_CLASS, active);
    surface.set_class(entry.nav_button_id, ACTIVE_CLASS, active);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    #[test]
    fn registry_covers_every_page_once() {
        for page in Page::ALL {
            assert_eq!(ViewRegistry::entry(page).page, page);
        }
        assert_eq!(ViewRegistry::entries().len(), Page::ALL.len());
    }

    #[test]
    fn starts_on_products() {
        let surface = RecordingSurface::default();
        let nav = NavigationController::new();
        nav.mount(&surface);
        assert_eq!(nav.active_page(), Page::Products);
        assert!(surface.has_class("productsPage", ACTIVE_CLASS));
        assert!(!surface.has_class("cartPage", ACTIVE_CLASS));
        assert!(!surface.has_class("ordersPage", ACTIVE_CLASS));
    }

    #[test]
    fn cart_entry_fires_one_reload_and_one_view_event_every_time() {
        let surface = RecordingSurface::default();
        let mut nav = NavigationController::new();
        for _ in 0..3 {
            let actions = nav.navigate_to("cart", &surface).unwrap();
            let reloads = actions.iter().filter(|a| **a == LoadAction::ReloadCart).count();
            let views = actions.iter().filter(|a| **a == LoadAction::TrackCartView).count();
            assert_eq!((reloads, views), (1, 1));
        }
        assert_eq!(nav.active_page(), Page::Cart);
        assert!(surface.has_class("cartPage", ACTIVE_CLASS));
    }

    #[test]
    fn output_depends_only_on_target() {
        let surface = RecordingSurface::default();
        let mut nav = NavigationController::new();
        let from_products = nav.navigate_to("orders", &surface).unwrap();
        nav.navigate_to("cart", &surface);
        let from_cart = nav.navigate_to("orders", &surface).unwrap();
        assert_eq!(from_products, from_cart);
        assert_eq!(from_cart, &[LoadAction::ReloadMyOrders]);
    }

    #[test]
    fn products_never_reloads_on_navigation() {
        let surface = RecordingSurface::default();
        let mut nav = NavigationController::new();
        nav.navigate_to("cart", &surface);
        assert_eq!(nav.navigate_to("products", &surface).map(|a| a.is_empty()), Some(true));
        assert!(surface.has_class("productsPage", ACTIVE_CLASS));
        assert!(!surface.has_class("cartPage", ACTIVE_CLASS));
        assert!(!surface.has_class("navCart", ACTIVE_CLASS));
    }

    #[test]
    fn unknown_page_is_a_full_no_op() {
        let surface = RecordingSurface::default();
        let mut nav = NavigationController::new();
        nav.navigate_to("orders", &surface);
        let writes_before = surface.write_count();

        assert_eq!(nav.navigate_to("admin", &surface), None);
        assert_eq!(nav.active_page(), Page::Orders);
        assert_eq!(surface.write_count(), writes_before);
    }

    #[test]
    fn reload_skips_funnel_event() {
        let surface = RecordingSurface::default();
        let mut nav = NavigationController::new();
        assert!(nav.reload_actions().is_empty());
        nav.navigate_to("cart", &surface);
        assert_eq!(nav.reload_actions(), &[LoadAction::ReloadCart]);
    }
}
