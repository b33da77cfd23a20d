// ============================================================================
// CATALOG VIEWMODEL - Catálogo de productos
// ============================================================================

use crate::error::ApiError;
use crate::models::Product;
use crate::services::ShopApi;
use crate::state::{AppState, RequestSlot, Ticker};
use crate::viewmodels::LoadOutcome;

pub struct CatalogViewModel<A: ShopApi> {
    api: A,
}

impl<A: ShopApi> CatalogViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Carga el catálogo (una vez, al arrancar) y lo guarda en el estado
    pub async fn load_products<T: Ticker + 'static>(
        &self,
        state: &AppState<T>,
    ) -> Result<LoadOutcome<Vec<Product>>, ApiError> {
        let ticket = state.sequencer.issue(RequestSlot::Products);
        let result = self.api.list_products().await;

        // Una respuesta superada se descarta aunque sea un error
        if !state.sequencer.is_current(ticket) {
            log::info!("⏭️ [CATALOG] Respuesta superada, se descarta");
            return Ok(LoadOutcome::Superseded);
        }
        let products = result?;

        log::info!("📦 [CATALOG] {} productos cargados", products.len());
        state.set_products(products.clone());
        Ok(LoadOutcome::Loaded(products))
    }
}

pub fn load_failed_message(error: &ApiError) -> String {
    format!("Failed to load products: {}", error)
}
