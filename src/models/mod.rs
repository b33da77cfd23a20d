pub mod product;
pub mod cart;
pub mod order;
pub mod page;

pub use product::Product;
pub use cart::{Cart, CartItem, NewCartItem};
pub use order::{CheckoutItem, CheckoutRequest, Order, OrderItem, OrderStatus, OrdersPayload};
pub use page::Page;
