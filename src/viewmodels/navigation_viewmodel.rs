// ============================================================================
// NAVIGATION VIEWMODEL - Ejecuta las acciones de carga de cada transición
// ============================================================================

use crate::error::ApiError;
use crate::models::Cart;
use crate::services::ShopApi;
use crate::state::{AppState, LoadAction, Ticker};
use crate::viewmodels::{CartViewModel, LoadOutcome, OrdersLoaded, OrdersViewModel};

/// Resultado de una acción de carga, listo para pintar
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Cart(Result<LoadOutcome<Cart>, ApiError>),
    CartViewTracked,
    Orders(Result<LoadOutcome<OrdersLoaded>, ApiError>),
}

pub struct NavigationViewModel<A: ShopApi + Clone> {
    cart: CartViewModel<A>,
    orders: OrdersViewModel<A>,
}

impl<A: ShopApi + Clone> NavigationViewModel<A> {
    pub fn new(api: A) -> Self {
        Self {
            cart: CartViewModel::new(api.clone()),
            orders: OrdersViewModel::new(api),
        }
    }

    pub async fn run<T: Ticker + 'static>(
        &self,
        state: &AppState<T>,
        action: LoadAction,
    ) -> ActionOutcome {
        match action {
            LoadAction::ReloadCart => ActionOutcome::Cart(self.cart.load_cart(state).await),
            LoadAction::TrackCartView => {
                self.cart.track_cart_view(state).await;
                ActionOutcome::CartViewTracked
            }
            LoadAction::ReloadMyOrders => {
                ActionOutcome::Orders(self.orders.load_my_orders(state).await)
            }
        }
    }
}
