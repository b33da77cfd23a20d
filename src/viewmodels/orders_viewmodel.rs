// ============================================================================
// ORDERS VIEWMODEL - Historial de pedidos con timer de carga
// ============================================================================

use crate::error::ApiError;
use crate::models::order::sort_newest_first;
use crate::models::Order;
use crate::services::ShopApi;
use crate::state::{AppState, RequestSlot, Ticker};
use crate::viewmodels::LoadOutcome;

pub const ORDERS_LOADING_ID: &str = "ordersLoading";
pub const LOADING_TIMER_ID: &str = "loadingTimer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersScope {
    /// Pedidos del usuario activo
    Mine,
    /// Todos los pedidos (endpoint afectado por el slow mode)
    All,
}

impl OrdersScope {
    pub fn load_failed_message(&self, error: &ApiError) -> String {
        match self {
            OrdersScope::Mine => format!("Failed to load orders: {}", error),
            OrdersScope::All => format!("Failed to load all orders: {}", error),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersLoaded {
    pub scope: OrdersScope,
    /// Del más reciente al más antiguo
    pub orders: Vec<Order>,
    pub elapsed_secs: f64,
}

impl OrdersLoaded {
    /// Solo "mis pedidos" con resultados anuncia el tiempo de carga
    pub fn success_notice(&self) -> Option<String> {
        if self.scope == OrdersScope::Mine && !self.orders.is_empty() {
            Some(format!(
                "Loaded {} orders in {:.2}s ⚡",
                self.orders.len(),
                self.elapsed_secs
            ))
        } else {
            None
        }
    }
}

pub struct OrdersViewModel<A: ShopApi> {
    api: A,
}

impl<A: ShopApi> OrdersViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load_my_orders<T: Ticker + 'static>(
        &self,
        state: &AppState<T>,
    ) -> Result<LoadOutcome<OrdersLoaded>, ApiError> {
        self.load(state, OrdersScope::Mine).await
    }

    pub async fn load_all_orders<T: Ticker + 'static>(
        &self,
        state: &AppState<T>,
    ) -> Result<LoadOutcome<OrdersLoaded>, ApiError> {
        self.load(state, OrdersScope::All).await
    }

    async fn load<T: Ticker + 'static>(
        &self,
        state: &AppState<T>,
        scope: OrdersScope,
    ) -> Result<LoadOutcome<OrdersLoaded>, ApiError> {
        let ticket = state.sequencer.issue(RequestSlot::Orders);
        state.surface.set_visible(ORDERS_LOADING_ID, true);
        let guard = state.load_timer.begin(LOADING_TIMER_ID);

        log::info!("📋 [ORDERS] Cargando pedidos ({:?})", scope);
        let result = match scope {
            OrdersScope::Mine => self.api.list_orders_for_user(&state.user_id()).await,
            OrdersScope::All => self.api.list_all_orders().await,
        };

        let elapsed = guard.finish();
        if !state.sequencer.is_current(ticket) {
            log::info!("⏭️ [ORDERS] Respuesta ({:?}) superada, se descarta", scope);
            // Sin otra carga en curso (p.ej. cambio de usuario) el spinner sobra
            if !state.load_timer.is_active() {
                state.surface.set_visible(ORDERS_LOADING_ID, false);
            }
            return Ok(LoadOutcome::Superseded);
        }
        state.surface.set_visible(ORDERS_LOADING_ID, false);

        let mut orders = result?;
        sort_newest_first(&mut orders);
        let elapsed_secs = elapsed.unwrap_or_default();
        log::info!("✅ [ORDERS] {} pedidos en {:.2}s", orders.len(), elapsed_secs);

        Ok(LoadOutcome::Loaded(OrdersLoaded {
            scope,
            orders,
            elapsed_secs,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::fixtures::test_state;
    use crate::testing::{order, FakeApi};
    use futures::executor::block_on;

    fn api_with_history() -> FakeApi {
        let api = FakeApi::new();
        api.seed_order(order(1, "user123", "2026-01-01T10:00:00"));
        api.seed_order(order(2, "user123", "2026-03-01T10:00:00"));
        api.seed_order(order(3, "alice", "2026-02-01T10:00:00"));
        api.seed_order(order(4, "user123", "not a date"));
        api
    }

    fn ids(loaded: &OrdersLoaded) -> Vec<i64> {
        loaded.orders.iter().map(|o| o.id).collect()
    }

    #[test]
    fn my_orders_are_sorted_newest_first() {
        let t = test_state();
        let api = api_with_history();
        let clock = t.clock.clone();
        api.on_call("list_orders_for_user", move || clock.advance(1_250.0));
        let vm = OrdersViewModel::new(api);

        let loaded = block_on(vm.load_my_orders(&t.state)).unwrap().loaded().unwrap();
        assert_eq!(ids(&loaded), vec![2, 1, 4]);
        assert_eq!(loaded.success_notice().as_deref(), Some("Loaded 3 orders in 1.25s ⚡"));
        assert!(!t.state.load_timer.is_active());
        assert_eq!(t.ticker.live_count(), 0);
        assert!(!t.surface.is_visible(ORDERS_LOADING_ID));
    }

    #[test]
    fn all_orders_have_no_timing_notice() {
        let t = test_state();
        let vm = OrdersViewModel::new(api_with_history());
        let loaded = block_on(vm.load_all_orders(&t.state)).unwrap().loaded().unwrap();
        assert_eq!(ids(&loaded), vec![2, 3, 1, 4]);
        assert_eq!(loaded.success_notice(), None);
    }

    #[test]
    fn empty_history_has_no_notice() {
        let t = test_state();
        let vm = OrdersViewModel::new(FakeApi::new());
        let loaded = block_on(vm.load_my_orders(&t.state)).unwrap().loaded().unwrap();
        assert!(loaded.orders.is_empty());
        assert_eq!(loaded.success_notice(), None);
    }

    #[test]
    fn failure_tears_down_timer_and_names_scope() {
        let t = test_state();
        let api = FakeApi::new();
        api.fail("list_all_orders", ApiError::from_status(504, ""));
        let vm = OrdersViewModel::new(api);

        let error = block_on(vm.load_all_orders(&t.state)).unwrap_err();
        assert_eq!(
            OrdersScope::All.load_failed_message(&error),
            "Failed to load all orders: HTTP 504"
        );
        assert!(!t.state.load_timer.is_active());
        assert_eq!(t.ticker.live_count(), 0);
        assert!(!t.surface.is_visible(ORDERS_LOADING_ID));
    }

    #[test]
    fn slow_load_escalates_indicator_while_pending() {
        let t = test_state();
        let api = api_with_history();
        let (clock, ticker, surface) = (t.clock.clone(), t.ticker.clone(), t.surface.clone());
        api.on_call("list_all_orders", move || {
            clock.advance(2_600.0);
            ticker.fire();
            assert!(surface.has_class(LOADING_TIMER_ID, "slow"));
            assert_eq!(surface.text(LOADING_TIMER_ID).as_deref(), Some("⏱️ 2.6s"));
        });
        let vm = OrdersViewModel::new(api);
        assert!(block_on(vm.load_all_orders(&t.state)).is_ok());
    }

    #[test]
    fn superseded_load_keeps_newer_timer_alive() {
        let t = test_state();
        let api = api_with_history();
        let newer = std::rc::Rc::new(std::cell::RefCell::new(None));
        {
            let state = t.state.clone();
            let newer = newer.clone();
            api.on_call("list_all_orders", move || {
                // El usuario pulsa "My orders" mientras "All orders" sigue en vuelo
                state.sequencer.issue(RequestSlot::Orders);
                *newer.borrow_mut() = Some(state.load_timer.begin(LOADING_TIMER_ID));
            });
        }
        let vm = OrdersViewModel::new(api);

        let outcome = block_on(vm.load_all_orders(&t.state)).unwrap();
        assert_eq!(outcome, LoadOutcome::Superseded);
        assert!(t.state.load_timer.is_active());
        assert_eq!(t.ticker.live_count(), 1);
        assert!(t.surface.is_visible(ORDERS_LOADING_ID));
        drop(newer);
    }

    #[test]
    fn orders_of_previous_user_are_discarded() {
        let t = test_state();
        let api = api_with_history();
        let state = t.state.clone();
        api.on_call("list_orders_for_user", move || {
            state.switch_user("bob");
        });
        let vm = OrdersViewModel::new(api.clone());

        let outcome = block_on(vm.load_my_orders(&t.state)).unwrap();
        assert_eq!(outcome, LoadOutcome::Superseded);
        assert!(!t.state.load_timer.is_active());
        assert_eq!(t.ticker.live_count(), 0);
        assert!(!t.surface.is_visible(ORDERS_LOADING_ID));
    }

    #[test]
    fn superseded_failure_is_discarded() {
        let t = test_state();
        let api = FakeApi::new();
        api.fail("list_orders_for_user", ApiError::from_status(500, ""));
        let state = t.state.clone();
        api.on_call("list_orders_for_user", move || {
            state.switch_user("bob");
        });
        let vm = OrdersViewModel::new(api);

        let outcome = block_on(vm.load_my_orders(&t.state)).unwrap();
        assert_eq!(outcome, LoadOutcome::Superseded);
    }
}
