// ============================================================================
// TESTING - Dobles en memoria para los tests nativos
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::dom::RenderSurface;
use crate::error::ApiError;
use crate::models::{
    Cart, CartItem, CheckoutRequest, NewCartItem, Order, OrderItem, OrderStatus, Product,
};
use crate::services::{ShopApi, TrackingHeaders};
use crate::state::{Clock, Ticker};

// ============================================================================
// RENDER SURFACE
// ============================================================================

#[derive(Default)]
pub struct RecordingSurface {
    texts: RefCell<HashMap<String, String>>,
    classes: RefCell<HashSet<(String, String)>>,
    hidden: RefCell<HashSet<String>>,
    writes: Cell<usize>,
}

impl RecordingSurface {
    pub fn text(&self, id: &str) -> Option<String> {
        self.texts.borrow().get(id).cloned()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.classes
            .borrow()
            .contains(&(id.to_string(), class.to_string()))
    }

    /// Visible salvo que se haya ocultado explícitamente
    pub fn is_visible(&self, id: &str) -> bool {
        !self.hidden.borrow().contains(id)
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn touch(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

impl RenderSurface for RecordingSurface {
    fn set_visible(&self, id: &str, visible: bool) {
        self.touch();
        if visible {
            self.hidden.borrow_mut().remove(id);
        } else {
            self.hidden.borrow_mut().insert(id.to_string());
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        self.touch();
        self.texts.borrow_mut().insert(id.to_string(), text.to_string());
    }

    fn set_class(&self, id: &str, class: &str, on: bool) {
        self.touch();
        let key = (id.to_string(), class.to_string());
        if on {
            self.classes.borrow_mut().insert(key);
        } else {
            self.classes.borrow_mut().remove(&key);
        }
    }
}

// ============================================================================
// TIEMPO
// ============================================================================

#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

struct TickSlot {
    alive: Rc<Cell<bool>>,
    tick: Box<dyn FnMut()>,
}

/// Ticker manual: `fire()` ejecuta una vez cada tick vivo
#[derive(Clone, Default)]
pub struct FakeTicker {
    slots: Rc<RefCell<Vec<TickSlot>>>,
}

pub struct FakeTickHandle {
    alive: Rc<Cell<bool>>,
}

impl Drop for FakeTickHandle {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

impl FakeTicker {
    pub fn live_count(&self) -> usize {
        self.slots.borrow().iter().filter(|slot| slot.alive.get()).count()
    }

    pub fn started_count(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn fire(&self) {
        for slot in self.slots.borrow_mut().iter_mut() {
            if slot.alive.get() {
                (slot.tick)();
            }
        }
    }
}

impl Ticker for FakeTicker {
    type Handle = FakeTickHandle;

    fn every(&self, _period_ms: u32, tick: Box<dyn FnMut()>) -> FakeTickHandle {
        let alive = Rc::new(Cell::new(true));
        self.slots.borrow_mut().push(TickSlot {
            alive: alive.clone(),
            tick,
        });
        FakeTickHandle { alive }
    }
}

// ============================================================================
// API
// ============================================================================

#[derive(Default)]
struct FakeBackend {
    products: Vec<Product>,
    carts: HashMap<String, Vec<CartItem>>,
    orders: Vec<Order>,
    next_id: i64,
    calls: HashMap<&'static str, usize>,
    failures: HashMap<&'static str, ApiError>,
    hooks: HashMap<&'static str, Rc<dyn Fn()>>,
}

/// Backend de tienda en memoria con contadores de llamadas.
/// Clonar comparte el mismo backend.
#[derive(Clone, Default)]
pub struct FakeApi {
    backend: Rc<RefCell<FakeBackend>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let api = Self::new();
        api.backend.borrow_mut().products = products;
        api
    }

    pub fn calls(&self, operation: &str) -> usize {
        self.backend.borrow().calls.get(operation).copied().unwrap_or(0)
    }

    /// Todas las llamadas siguientes a `operation` fallan con `error`
    pub fn fail(&self, operation: &'static str, error: ApiError) {
        self.backend.borrow_mut().failures.insert(operation, error);
    }

    /// Ejecuta `hook` durante cada llamada a `operation` (antes de responder)
    pub fn on_call(&self, operation: &'static str, hook: impl Fn() + 'static) {
        self.backend.borrow_mut().hooks.insert(operation, Rc::new(hook));
    }

    pub fn seed_order(&self, order: Order) {
        self.backend.borrow_mut().orders.push(order);
    }

    pub fn cart_items(&self, user_id: &str) -> Vec<CartItem> {
        self.backend.borrow().carts.get(user_id).cloned().unwrap_or_default()
    }

    fn enter(&self, operation: &'static str) -> Result<(), ApiError> {
        let hook = {
            let mut backend = self.backend.borrow_mut();
            *backend.calls.entry(operation).or_insert(0) += 1;
            backend.hooks.get(operation).cloned()
        };
        if let Some(hook) = hook {
            hook();
        }
        match self.backend.borrow().failures.get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> i64 {
        let mut backend = self.backend.borrow_mut();
        backend.next_id += 1;
        backend.next_id
    }
}

pub fn product(id: i64, name: &str, price: f64, stock: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{} for the demo", name),
        price,
        stock,
    }
}

pub fn order(id: i64, user_id: &str, order_date: &str) -> Order {
    Order {
        id,
        user_id: user_id.to_string(),
        items: Vec::new(),
        total_amount: 0.0,
        status: OrderStatus::Confirmed,
        order_date: Some(order_date.to_string()),
    }
}

impl ShopApi for FakeApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.enter("list_products")?;
        Ok(self.backend.borrow().products.clone())
    }

    async fn get_cart(&self, user_id: &str) -> Result<Cart, ApiError> {
        self.enter("get_cart")?;
        Ok(Cart {
            id: Some(1),
            user_id: user_id.to_string(),
            items: self.cart_items(user_id),
            total: None,
        })
    }

    async fn add_cart_item(&self, user_id: &str, item: &NewCartItem) -> Result<(), ApiError> {
        self.enter("add_cart_item")?;
        let id = self.next_id();
        let mut backend = self.backend.borrow_mut();
        let lines = backend.carts.entry(user_id.to_string()).or_default();
        match lines.iter_mut().find(|line| line.product_id == item.product_id) {
            Some(line) => line.quantity += item.quantity,
            None => lines.push(CartItem {
                id,
                product_id: item.product_id,
                product_name: item.product_name.clone(),
                price: item.price,
                quantity: item.quantity,
            }),
        }
        Ok(())
    }

    async fn remove_cart_item(&self, user_id: &str, item_id: i64) -> Result<(), ApiError> {
        self.enter("remove_cart_item")?;
        if let Some(lines) = self.backend.borrow_mut().carts.get_mut(user_id) {
            lines.retain(|line| line.id != item_id);
        }
        Ok(())
    }

    async fn clear_cart(&self, user_id: &str) -> Result<(), ApiError> {
        self.enter("clear_cart")?;
        self.backend.borrow_mut().carts.remove(user_id);
        Ok(())
    }

    async fn track_cart_view(&self, _user_id: &str, _headers: &TrackingHeaders) -> Result<(), ApiError> {
        self.enter("track_cart_view")
    }

    async fn track_checkout_initiated(
        &self,
        _user_id: &str,
        _headers: &TrackingHeaders,
    ) -> Result<(), ApiError> {
        self.enter("track_checkout_initiated")
    }

    async fn checkout(
        &self,
        request: &CheckoutRequest,
        _headers: &TrackingHeaders,
    ) -> Result<Order, ApiError> {
        self.enter("checkout")?;
        if request.items.is_empty() {
            return Err(ApiError::from_status(400, r#"{"error":"Empty Cart"}"#));
        }
        let id = self.next_id();
        let items: Vec<OrderItem> = request
            .items
            .iter()
            .map(|item| OrderItem {
                id: None,
                product_id: item.product_id,
                product_name: item.product_name.clone(),
                price: item.price,
                quantity: item.quantity,
            })
            .collect();
        let total_cents: i64 = items.iter().map(OrderItem::line_total_cents).sum();
        let order = Order {
            id,
            user_id: request.user_id.clone(),
            items,
            total_amount: total_cents as f64 / 100.0,
            status: OrderStatus::Pending,
            order_date: Some("2026-01-01T12:00:00".to_string()),
        };
        let mut backend = self.backend.borrow_mut();
        backend.carts.remove(&request.user_id);
        backend.orders.push(order.clone());
        Ok(order)
    }

    async fn list_orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, ApiError> {
        self.enter("list_orders_for_user")?;
        Ok(self
            .backend
            .borrow()
            .orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.enter("list_all_orders")?;
        Ok(self.backend.borrow().orders.clone())
    }
}
