// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod navigation;
pub mod load_timer;
pub mod notifications;
pub mod sequence;
pub mod app_state;

pub use navigation::{LoadAction, NavigationController, ViewRegistry};
pub use load_timer::{Clock, GlooTicker, LoadGuard, LoadTimer, SystemClock, Ticker};
pub use notifications::{NotificationCenter, Toast, ToastId, ToastKind};
pub use sequence::{RequestSequencer, RequestSlot, RequestTicket};
pub use app_state::AppState;
