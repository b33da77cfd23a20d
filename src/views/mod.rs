// ============================================================================
// VIEWS - Funciones que construyen DOM (sin lógica)
// ============================================================================

pub mod format;
pub mod empty_state;
pub mod shell;
pub mod product_card;
pub mod cart_view;
pub mod order_card;
pub mod toast;
pub mod modal;

pub use format::{format_price, product_icon};
pub use empty_state::{render_empty_state, EmptyState};
pub use shell::render_shell;
pub use product_card::render_product_card;
pub use cart_view::{render_cart_item, CartSummary};
pub use order_card::render_order_card;
pub use toast::render_toast;
pub use modal::render_order_confirmation;
