// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Conecta eventos del DOM con los viewmodels y pinta sus resultados.
// Cada gesto del usuario es una tarea spawn_local; sus errores acaban en UN
// toast aquí y no se propagan más allá.
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{
    append_child, clear_children, confirm, event_target_id, get_element_by_id, input_value,
    on_click_id, require_element, set_button_disabled, set_input_value,
    toggle_class,
};
use crate::models::{Cart, Order, Page};
use crate::services::ApiClient;
use crate::state::{AppState, LoadAction, ToastKind};
use crate::viewmodels::{
    cart_viewmodel, catalog_viewmodel, ActionOutcome, CartViewModel, CatalogViewModel,
    LoadOutcome, NavigationViewModel, OrdersLoaded, OrdersScope, OrdersViewModel,
};
use crate::views::cart_view::CartSummary;
use crate::views::modal::MODAL_SHOW_CLASS;
use crate::views::product_card::quantity_input_id;
use crate::views::shell::{self, ids};
use crate::views::toast::TOAST_EXIT_CLASS;
use crate::views::{
    render_cart_item, render_empty_state, render_order_card, render_order_confirmation,
    render_product_card, render_shell, render_toast, EmptyState,
};

const CLEAR_CART_PROMPT: &str = "Are you sure you want to clear your cart?";

/// Aplicación principal (clonar comparte estado y cliente)
#[derive(Clone)]
pub struct App {
    state: AppState,
    api: ApiClient,
    root: Element,
}

impl App {
    /// Crear nueva aplicación sobre `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = require_element("app")?;
        Ok(Self {
            state: AppState::new(),
            api: ApiClient::new(),
            root,
        })
    }

    /// Pinta el shell, registra listeners y lanza las cargas iniciales
    pub fn mount(&self) -> Result<(), JsValue> {
        clear_children(&self.root);
        append_child(&self.root, &render_shell(&self.state.user_id())?)?;
        self.state.mount_navigation();

        let headers = self.state.tracking.tracking_headers();
        log::info!(
            "🆔 [TRACKING] SessionID: {} JourneyID: {}",
            headers.session_id,
            headers.journey_id
        );

        self.wire_events()?;
        self.load_products();
        self.refresh_badge();
        Ok(())
    }

    // ========================================================================
    // LISTENERS (registrados UNA vez)
    // ========================================================================

    fn wire_events(&self) -> Result<(), JsValue> {
        for page in Page::ALL {
            let app = self.clone();
            let entry = crate::state::ViewRegistry::entry(page);
            on_click_id(entry.nav_button_id, move |_| app.navigate_to(page.as_str()))?;
        }

        let app = self.clone();
        on_click_id(ids::LOAD_USER_BUTTON, move |_| app.switch_user())?;

        let app = self.clone();
        on_click_id(ids::CHECKOUT_BUTTON, move |_| app.checkout())?;

        let app = self.clone();
        on_click_id(ids::CLEAR_CART_BUTTON, move |_| app.clear_cart())?;

        let app = self.clone();
        on_click_id(ids::LOAD_MY_ORDERS_BUTTON, move |_| app.load_orders(OrdersScope::Mine))?;

        let app = self.clone();
        on_click_id(ids::LOAD_ALL_ORDERS_BUTTON, move |_| app.load_orders(OrdersScope::All))?;

        let app = self.clone();
        on_click_id(ids::MODAL_CLOSE, move |_| app.close_modal())?;

        // Click en el backdrop (no en el contenido)
        let app = self.clone();
        on_click_id(ids::MODAL, move |event| {
            if event_target_id(&event).as_deref() == Some(ids::MODAL) {
                app.close_modal();
            }
        })?;

        Ok(())
    }

    fn spawn<F>(&self, task: impl FnOnce(App) -> F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(task(self.clone()));
    }

    // ========================================================================
    // NAVEGACIÓN
    // ========================================================================

    pub fn navigate_to(&self, page_id: &str) {
        if let Some(actions) = self.state.navigate_to(page_id) {
            for action in actions {
                self.run_action(*action);
            }
        }
    }

    fn run_action(&self, action: LoadAction) {
        if let Some(list) = shell::stale_list(action).and_then(get_element_by_id) {
            clear_children(&list);
        }
        if action == LoadAction::ReloadCart {
            self.state.surface.set_visible(ids::CART_LOADING, true);
        }
        self.spawn(move |app| async move {
            let vm = NavigationViewModel::new(app.api.clone());
            let outcome = vm.run(&app.state, action).await;
            app.apply_outcome(outcome);
        });
    }

    fn apply_outcome(&self, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::Cart(Ok(LoadOutcome::Loaded(cart))) => self.render_cart(Some(&cart)),
            ActionOutcome::Cart(Ok(LoadOutcome::Superseded)) => {}
            ActionOutcome::Cart(Err(e)) => {
                self.state.surface.set_visible(ids::CART_LOADING, false);
                self.toast(cart_viewmodel::load_failed_message(&e), ToastKind::Error);
            }
            ActionOutcome::CartViewTracked => {}
            ActionOutcome::Orders(result) => self.apply_orders(OrdersScope::Mine, result),
        }
    }

    // ========================================================================
    // CATÁLOGO
    // ========================================================================

    fn load_products(&self) {
        self.state.surface.set_visible(ids::PRODUCTS_LOADING, true);
        if let Some(grid) = get_element_by_id(ids::PRODUCTS_GRID) {
            clear_children(&grid);
        }

        self.spawn(|app| async move {
            let vm = CatalogViewModel::new(app.api.clone());
            let result = vm.load_products(&app.state).await;
            app.state.surface.set_visible(ids::PRODUCTS_LOADING, false);
            match result {
                Ok(LoadOutcome::Loaded(products)) => {
                    if let Err(e) = app.render_products(&products) {
                        log::error!("❌ [CATALOG] Error renderizando productos: {:?}", e);
                    }
                }
                Ok(LoadOutcome::Superseded) => {}
                Err(e) => app.toast(catalog_viewmodel::load_failed_message(&e), ToastKind::Error),
            }
        });
    }

    fn render_products(&self, products: &[crate::models::Product]) -> Result<(), JsValue> {
        let grid = require_element(ids::PRODUCTS_GRID)?;
        clear_children(&grid);

        if products.is_empty() {
            return append_child(&grid, &render_empty_state(&EmptyState::NO_PRODUCTS)?);
        }

        let on_add: Rc<dyn Fn(i64)> = {
            let app = self.clone();
            Rc::new(move |product_id| app.add_to_cart(product_id))
        };
        for product in products {
            append_child(&grid, &render_product_card(product, on_add.clone())?)?;
        }
        Ok(())
    }

    fn add_to_cart(&self, product_id: i64) {
        let input_id = quantity_input_id(product_id);
        let raw_quantity = input_value(&input_id).unwrap_or_default();

        self.spawn(move |app| async move {
            let vm = CartViewModel::new(app.api.clone());
            match vm.add_to_cart(&app.state, product_id, &raw_quantity).await {
                Ok(notice) => {
                    app.toast(notice, ToastKind::Success);
                    set_input_value(&input_id, "1");
                    app.refresh_badge();
                }
                Err(e) => app.toast(cart_viewmodel::add_failed_message(&e), ToastKind::Error),
            }
        });
    }

    // ========================================================================
    // CARRITO
    // ========================================================================

    fn render_cart(&self, cart: Option<&Cart>) {
        self.state.surface.set_visible(ids::CART_LOADING, false);
        if let Err(e) = self.render_cart_items(cart) {
            log::error!("❌ [CART] Error renderizando carrito: {:?}", e);
        }

        let summary = CartSummary::from_cart(cart);
        summary.apply(self.state.surface.as_ref());
        set_button_disabled(ids::CHECKOUT_BUTTON, !summary.checkout_enabled);
    }

    fn render_cart_items(&self, cart: Option<&Cart>) -> Result<(), JsValue> {
        let container = require_element(ids::CART_ITEMS)?;
        clear_children(&container);

        let items = match cart {
            Some(cart) if !cart.is_empty() => &cart.items,
            _ => return append_child(&container, &render_empty_state(&EmptyState::EMPTY_CART)?),
        };

        let on_remove: Rc<dyn Fn(i64)> = {
            let app = self.clone();
            Rc::new(move |item_id| app.remove_item(item_id))
        };
        for item in items {
            append_child(&container, &render_cart_item(item, on_remove.clone())?)?;
        }
        Ok(())
    }

    /// Tras una mutación: recarga del carrito + badge
    fn after_cart_mutation(&self) {
        self.run_action(LoadAction::ReloadCart);
        self.refresh_badge();
    }

    fn remove_item(&self, item_id: i64) {
        self.spawn(move |app| async move {
            let vm = CartViewModel::new(app.api.clone());
            match vm.remove_item(&app.state, item_id).await {
                Ok(()) => {
                    app.toast("Item removed from cart", ToastKind::Success);
                    app.after_cart_mutation();
                }
                Err(e) => app.toast(cart_viewmodel::remove_failed_message(&e), ToastKind::Error),
            }
        });
    }

    fn clear_cart(&self) {
        if !confirm(CLEAR_CART_PROMPT) {
            return;
        }
        self.spawn(|app| async move {
            let vm = CartViewModel::new(app.api.clone());
            match vm.clear_cart(&app.state).await {
                Ok(()) => {
                    app.toast("Cart cleared", ToastKind::Success);
                    app.after_cart_mutation();
                }
                Err(e) => app.toast(cart_viewmodel::clear_failed_message(&e), ToastKind::Error),
            }
        });
    }

    fn checkout(&self) {
        self.spawn(|app| async move {
            let vm = CartViewModel::new(app.api.clone());
            match vm.checkout(&app.state).await {
                Ok(order) => {
                    app.show_order_confirmation(&order);
                    // El backend vacía el carrito tras el checkout
                    app.after_cart_mutation();
                }
                Err(e) => app.toast(cart_viewmodel::checkout_failed_message(&e), ToastKind::Error),
            }
        });
    }

    fn refresh_badge(&self) {
        self.spawn(|app| async move {
            CartViewModel::new(app.api.clone())
                .refresh_cart_badge(&app.state)
                .await;
        });
    }

    // ========================================================================
    // PEDIDOS
    // ========================================================================

    fn load_orders(&self, scope: OrdersScope) {
        if let Some(list) = get_element_by_id(ids::ORDERS_LIST) {
            clear_children(&list);
        }
        self.spawn(move |app| async move {
            let vm = OrdersViewModel::new(app.api.clone());
            let result = match scope {
                OrdersScope::Mine => vm.load_my_orders(&app.state).await,
                OrdersScope::All => vm.load_all_orders(&app.state).await,
            };
            app.apply_orders(scope, result);
        });
    }

    fn apply_orders(
        &self,
        scope: OrdersScope,
        result: Result<LoadOutcome<OrdersLoaded>, crate::error::ApiError>,
    ) {
        match result {
            Ok(LoadOutcome::Loaded(loaded)) => {
                if let Err(e) = self.render_orders(&loaded) {
                    log::error!("❌ [ORDERS] Error renderizando pedidos: {:?}", e);
                }
                if let Some(notice) = loaded.success_notice() {
                    self.toast(notice, ToastKind::Success);
                }
            }
            Ok(LoadOutcome::Superseded) => {}
            Err(e) => self.toast(scope.load_failed_message(&e), ToastKind::Error),
        }
    }

    fn render_orders(&self, loaded: &OrdersLoaded) -> Result<(), JsValue> {
        let list = require_element(ids::ORDERS_LIST)?;
        clear_children(&list);

        if loaded.orders.is_empty() {
            let empty = match loaded.scope {
                OrdersScope::Mine => EmptyState::NO_ORDERS,
                OrdersScope::All => EmptyState::NO_ORDERS_IN_SYSTEM,
            };
            return append_child(&list, &render_empty_state(&empty)?);
        }

        for order in &loaded.orders {
            append_child(&list, &render_order_card(order)?)?;
        }
        Ok(())
    }

    // ========================================================================
    // USUARIO
    // ========================================================================

    fn switch_user(&self) {
        let raw = input_value(ids::USER_ID_INPUT).unwrap_or_default();
        let user_id = self.state.switch_user(&raw);
        set_input_value(ids::USER_ID_INPUT, &user_id);

        self.toast(format!("User changed to: {}", user_id), ToastKind::Success);
        self.refresh_badge();
        for action in self.state.reload_actions() {
            self.run_action(*action);
        }
    }

    // ========================================================================
    // MODAL
    // ========================================================================

    fn show_order_confirmation(&self, order: &Order) {
        let on_view_orders: Rc<dyn Fn()> = {
            let app = self.clone();
            Rc::new(move || {
                app.close_modal();
                app.navigate_to(Page::Orders.as_str());
            })
        };

        let shown = require_element(ids::MODAL_BODY).and_then(|body| {
            clear_children(&body);
            append_child(&body, &render_order_confirmation(order, on_view_orders)?)?;
            toggle_class(&require_element(ids::MODAL)?, MODAL_SHOW_CLASS, true)
        });
        if let Err(e) = shown {
            log::error!("❌ [MODAL] Error mostrando confirmación: {:?}", e);
        }
    }

    fn close_modal(&self) {
        self.state.surface.set_class(ids::MODAL, MODAL_SHOW_CLASS, false);
    }

    // ========================================================================
    // TOASTS
    // ========================================================================

    /// Añade un toast y agenda su salida (cada uno con sus propios timers)
    fn toast(&self, message: impl Into<String>, kind: ToastKind) {
        let toast = self.state.notify(message, kind);

        let element = match require_element(ids::TOAST_CONTAINER)
            .and_then(|container| {
                let element = render_toast(&toast)?;
                append_child(&container, &element)?;
                Ok(element)
            }) {
            Ok(element) => element,
            Err(e) => {
                log::error!("❌ [TOAST] Error pintando toast: {:?}", e);
                self.state.notifications.borrow_mut().dismiss(toast.id);
                return;
            }
        };

        let notifications = self.state.notifications.clone();
        let ui = &CONFIG.ui_config;
        let exit_ms = ui.toast_exit_ms;
        Timeout::new(ui.toast_duration_ms, move || {
            if let Err(e) = toggle_class(&element, TOAST_EXIT_CLASS, true) {
                log::warn!("⚠️ [TOAST] {:?}", e);
            }
            Timeout::new(exit_ms, move || {
                element.remove();
                notifications.borrow_mut().dismiss(toast.id);
            })
            .forget();
        })
        .forget();
    }
}

