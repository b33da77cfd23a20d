// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Todo el estado mutable vive aquí, en campos Rc<RefCell<_>>. Clonar AppState
// comparte los mismos datos (un solo hilo, futures locales).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::dom::{DomSurface, RenderSurface};
use crate::models::{Cart, Page, Product};
use crate::services::{BrowserStore, KeyValueStore, TrackingContext};
use crate::state::{
    Clock, GlooTicker, LoadAction, LoadTimer, NavigationController, NotificationCenter,
    RequestSequencer, RequestSlot, SystemClock, Ticker, Toast, ToastKind,
};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState<T: Ticker + 'static = GlooTicker> {
    pub user_id: Rc<RefCell<String>>,
    /// Último snapshot leído del carrito (`None` hasta la primera carga)
    pub cart: Rc<RefCell<Option<Cart>>>,
    pub products: Rc<RefCell<Vec<Product>>>,
    pub navigation: Rc<RefCell<NavigationController>>,
    pub notifications: Rc<RefCell<NotificationCenter>>,
    pub sequencer: RequestSequencer,
    pub load_timer: LoadTimer<T>,
    pub tracking: TrackingContext,
    pub surface: Rc<dyn RenderSurface>,
}

impl AppState<GlooTicker> {
    /// Estado real del navegador: DOM, localStorage/sessionStorage, gloo timers
    pub fn new() -> Self {
        Self::with_parts(
            GlooTicker,
            Rc::new(SystemClock),
            Rc::new(DomSurface),
            BrowserStore::Local.open(),
            BrowserStore::Session.open(),
        )
    }
}

impl Default for AppState<GlooTicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ticker + 'static> AppState<T> {
    pub fn with_parts(
        ticker: T,
        clock: Rc<dyn Clock>,
        surface: Rc<dyn RenderSurface>,
        durable: Rc<dyn KeyValueStore>,
        tab: Rc<dyn KeyValueStore>,
    ) -> Self {
        let ui = &CONFIG.ui_config;
        Self {
            user_id: Rc::new(RefCell::new(CONFIG.default_user_id.clone())),
            cart: Rc::new(RefCell::new(None)),
            products: Rc::new(RefCell::new(Vec::new())),
            navigation: Rc::new(RefCell::new(NavigationController::new())),
            notifications: Rc::new(RefCell::new(NotificationCenter::new())),
            sequencer: RequestSequencer::new(),
            load_timer: LoadTimer::new(
                ticker,
                clock,
                surface.clone(),
                ui.load_tick_ms,
                ui.slow_load_threshold_secs,
            ),
            tracking: TrackingContext::new(durable, tab),
            surface,
        }
    }

    // ========================================================================
    // USUARIO
    // ========================================================================

    pub fn user_id(&self) -> String {
        self.user_id.borrow().clone()
    }

    /// Cambia el usuario activo. Entrada vacía → usuario por defecto.
    /// Descarta el snapshot del carrito del usuario anterior y deja como
    /// superadas las cargas en vuelo que dependen del usuario.
    pub fn switch_user(&self, raw: &str) -> String {
        let user_id = resolve_user_id(raw);
        *self.user_id.borrow_mut() = user_id.clone();
        *self.cart.borrow_mut() = None;
        for slot in [RequestSlot::Cart, RequestSlot::Orders, RequestSlot::Badge] {
            self.sequencer.issue(slot);
        }
        log::info!("👤 [USER] Usuario activo: {}", user_id);
        user_id
    }

    // ========================================================================
    // SNAPSHOTS
    // ========================================================================

    pub fn set_cart(&self, cart: Cart) {
        *self.cart.borrow_mut() = Some(cart);
    }

    pub fn cart_snapshot(&self) -> Option<Cart> {
        self.cart.borrow().clone()
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
    }

    pub fn find_product(&self, product_id: i64) -> Option<Product> {
        self.products
            .borrow()
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
    }

    // ========================================================================
    // NAVEGACIÓN
    // ========================================================================

    pub fn active_page(&self) -> Page {
        self.navigation.borrow().active_page()
    }

    pub fn mount_navigation(&self) {
        self.navigation.borrow().mount(self.surface.as_ref());
    }

    pub fn navigate_to(&self, page_id: &str) -> Option<&'static [LoadAction]> {
        self.navigation
            .borrow_mut()
            .navigate_to(page_id, self.surface.as_ref())
    }

    pub fn reload_actions(&self) -> &'static [LoadAction] {
        self.navigation.borrow().reload_actions()
    }

    // ========================================================================
    // TOASTS
    // ========================================================================

    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) -> Toast {
        self.notifications.borrow_mut().notify(message, kind)
    }
}

pub fn resolve_user_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        CONFIG.default_user_id.clone()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::services::MemoryStore;
    use crate::testing::{FakeTicker, ManualClock, RecordingSurface};

    pub struct TestState {
        pub state: AppState<FakeTicker>,
        pub ticker: FakeTicker,
        pub clock: Rc<ManualClock>,
        pub surface: Rc<RecordingSurface>,
    }

    pub fn test_state() -> TestState {
        let ticker = FakeTicker::default();
        let clock = Rc::new(ManualClock::default());
        let surface = Rc::new(RecordingSurface::default());
        let state = AppState::with_parts(
            ticker.clone(),
            clock.clone(),
            surface.clone(),
            Rc::new(MemoryStore::new()),
            Rc::new(MemoryStore::new()),
        );
        TestState {
            state,
            ticker,
            clock,
            surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::test_state;
    use super::*;

    #[test]
    fn starts_with_default_user_on_products() {
        let t = test_state();
        assert_eq!(t.state.user_id(), "user123");
        assert_eq!(t.state.active_page(), Page::Products);
        assert_eq!(t.state.cart_snapshot(), None);
    }

    #[test]
    fn empty_user_input_falls_back_to_default() {
        assert_eq!(resolve_user_id("   "), "user123");
        assert_eq!(resolve_user_id(" alice "), "alice");
    }

    #[test]
    fn switching_user_drops_previous_cart_snapshot() {
        let t = test_state();
        t.state.set_cart(Cart::default());
        assert_eq!(t.state.switch_user("bob"), "bob");
        assert_eq!(t.state.user_id(), "bob");
        assert_eq!(t.state.cart_snapshot(), None);
    }

    #[test]
    fn switching_user_supersedes_user_scoped_loads() {
        let t = test_state();
        let cart = t.state.sequencer.issue(RequestSlot::Cart);
        let orders = t.state.sequencer.issue(RequestSlot::Orders);
        let badge = t.state.sequencer.issue(RequestSlot::Badge);
        let products = t.state.sequencer.issue(RequestSlot::Products);

        t.state.switch_user("bob");
        assert!(!t.state.sequencer.is_current(cart));
        assert!(!t.state.sequencer.is_current(orders));
        assert!(!t.state.sequencer.is_current(badge));
        assert!(t.state.sequencer.is_current(products));
    }

    #[test]
    fn clones_share_navigation() {
        let t = test_state();
        let other = t.state.clone();
        other.navigate_to("orders");
        assert_eq!(t.state.active_page(), Page::Orders);
        assert!(t.surface.has_class("ordersPage", "active"));
    }
}
