// ============================================================================
// VIEWMODELS - Lógica de UI
// ============================================================================
// Devuelven valores; app.rs decide qué pintar con ellos. Sin acceso al DOM
// salvo a través de `AppState::surface`.
// ============================================================================

pub mod catalog_viewmodel;
pub mod cart_viewmodel;
pub mod orders_viewmodel;
pub mod navigation_viewmodel;

pub use catalog_viewmodel::CatalogViewModel;
pub use cart_viewmodel::{BadgeState, CartViewModel};
pub use orders_viewmodel::{OrdersLoaded, OrdersScope, OrdersViewModel};
pub use navigation_viewmodel::{ActionOutcome, NavigationViewModel};

/// Resultado de una carga protegida por el secuenciador
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    /// Otra carga del mismo slot empezó después: la respuesta se descarta
    Superseded,
}

impl<T> LoadOutcome<T> {
    pub fn loaded(self) -> Option<T> {
        match self {
            LoadOutcome::Loaded(value) => Some(value),
            LoadOutcome::Superseded => None,
        }
    }
}
