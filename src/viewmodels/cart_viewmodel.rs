// ============================================================================
// CART VIEWMODEL - Carrito, badge y checkout
// ============================================================================
// El carrito local es un snapshot de solo lectura: cada mutación va a la API
// y después se vuelve a leer el carrito completo.
// ============================================================================

use crate::dom::RenderSurface;
use crate::error::ApiError;
use crate::models::{Cart, CheckoutItem, CheckoutRequest, NewCartItem, Order};
use crate::services::ShopApi;
use crate::state::{AppState, RequestSlot, Ticker};
use crate::viewmodels::LoadOutcome;

pub const CART_BADGE_ID: &str = "cartBadge";
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Lo que muestra el badge del carrito
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeState {
    pub count: usize,
    pub visible: bool,
}

impl BadgeState {
    pub fn from_cart(cart: &Cart) -> Self {
        let count = cart.line_count();
        Self {
            count,
            visible: count > 0,
        }
    }

    pub fn apply(&self, surface: &dyn RenderSurface) {
        surface.set_text(CART_BADGE_ID, &self.count.to_string());
        surface.set_visible(CART_BADGE_ID, self.visible);
    }
}

pub struct CartViewModel<A: ShopApi> {
    api: A,
}

impl<A: ShopApi> CartViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Lee el carrito del usuario activo y guarda el snapshot
    pub async fn load_cart<T: Ticker + 'static>(
        &self,
        state: &AppState<T>,
    ) -> Result<LoadOutcome<Cart>, ApiError> {
        let ticket = state.sequencer.issue(RequestSlot::Cart);
        let result = self.api.get_cart(&state.user_id()).await;

        // También cubre el cambio de usuario (switch_user invalida el slot)
        if !state.sequencer.is_current(ticket) {
            log::info!("⏭️ [CART] Respuesta de carrito superada, se descarta");
            return Ok(LoadOutcome::Superseded);
        }
        let cart = result?;

        log::info!("🛒 [CART] {} líneas, total ${:.2}", cart.line_count(), cart.total());
        state.set_cart(cart.clone());
        Ok(LoadOutcome::Loaded(cart))
    }

    /// Añade `raw_quantity` (texto del input) unidades del producto.
    /// Devuelve el texto del aviso de éxito.
    pub async fn add_to_cart<T: Ticker + 'static>(
        &self,
        state: &AppState<T>,
        product_id: i64,
        raw_quantity: &str,
    ) -> Result<String, ApiError> {
        let product = state
            .find_product(product_id)
            .ok_or_else(|| ApiError::Validation(format!("Unknown product #{}", product_id)))?;
        let quantity = product.clamp_quantity(raw_quantity);

        let item = NewCartItem {
            product_id: product.id,
            product_name: product.name.clone(),
            price: product.price,
            quantity,
        };
        self.api.add_cart_item(&state.user_id(), &item).await?;

        Ok(format!("Added {}x {} to cart!", quantity, product.name))
    }

    pub async fn remove_item<T: Ticker + 'static>(
        &self,
        state: &AppState<T>,
        item_id: i64,
    ) -> Result<(), ApiError> {
        log::info!("🗑️ [CART] Eliminando línea {}", item_id);
        self.api.remove_cart_item(&state.user_id(), item_id).await
    }

    /// La confirmación del usuario la pide app.rs antes de llamar aquí
    pub async fn clear_cart<T: Ticker + 'static>(&self, state: &AppState<T>) -> Result<(), ApiError> {
        log::info!("🧹 [CART] Vaciando carrito de {}", state.user_id());
        self.api.clear_cart(&state.user_id()).await
    }

    /// Recalcula el badge. Los fallos solo se registran en el log.
    pub async fn refresh_cart_badge<T: Ticker + 'static>(
        &self,
        state: &AppState<T>,
    ) -> Option<BadgeState> {
        let ticket = state.sequencer.issue(RequestSlot::Badge);
        match self.api.get_cart(&state.user_id()).await {
            Ok(cart) if state.sequencer.is_current(ticket) => {
                let badge = BadgeState::from_cart(&cart);
                badge.apply(state.surface.as_ref());
                Some(badge)
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("⚠️ [BADGE] Error actualizando badge: {}", e);
                None
            }
        }
    }

    /// Evento de funnel "cart viewed" (fire-and-forget, solo log)
    pub async fn track_cart_view<T: Ticker + 'static>(&self, state: &AppState<T>) {
        let headers = state.tracking.tracking_headers();
        match self.api.track_cart_view(&state.user_id(), &headers).await {
            Ok(()) => log::info!("FUNNEL_TRACKING: Cart view event tracked"),
            Err(e) => log::warn!("⚠️ [FUNNEL] Failed to track cart view event: {}", e),
        }
    }

    /// Checkout del último snapshot. Carrito vacío → `Validation` sin red.
    pub async fn checkout<T: Ticker + 'static>(&self, state: &AppState<T>) -> Result<Order, ApiError> {
        let items: Vec<CheckoutItem> = match state.cart_snapshot() {
            Some(cart) if !cart.is_empty() => cart.items.iter().map(CheckoutItem::from).collect(),
            _ => return Err(ApiError::Validation(EMPTY_CART_MESSAGE.to_string())),
        };

        let user_id = state.user_id();
        let headers = state.tracking.tracking_headers();

        log::info!("FUNNEL_TRACKING: Checkout initiated");
        if let Err(e) = self.api.track_checkout_initiated(&user_id, &headers).await {
            log::warn!("⚠️ [FUNNEL] checkout-initiated no registrado: {}", e);
        }

        let request = CheckoutRequest { user_id, items };
        match self.api.checkout(&request, &headers).await {
            Ok(order) => {
                log::info!("FUNNEL_TRACKING: Checkout completed successfully");
                Ok(order)
            }
            Err(e) => {
                log::info!("FUNNEL_DROP_OFF: Checkout error - {}", e);
                Err(e)
            }
        }
    }
}

// ============================================================================
// TEXTOS DE AVISO
// ============================================================================

pub fn add_failed_message(error: &ApiError) -> String {
    format!("Failed to add to cart: {}", error.user_message("Failed to add to cart"))
}

pub fn remove_failed_message(error: &ApiError) -> String {
    format!("Failed to remove item: {}", error.user_message("Failed to remove item"))
}

pub fn clear_failed_message(error: &ApiError) -> String {
    format!("Failed to clear cart: {}", error.user_message("Failed to clear cart"))
}

pub fn load_failed_message(error: &ApiError) -> String {
    format!("Failed to load cart: {}", error)
}

/// Carrito vacío es un aviso propio, no "Checkout failed: ..."
pub fn checkout_failed_message(error: &ApiError) -> String {
    match error {
        ApiError::Validation(message) => message.clone(),
        other => format!("Checkout failed: {}", other.user_message("Checkout failed")),
    }
}
