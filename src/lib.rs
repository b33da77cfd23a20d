// ============================================================================
// SHOP DEMO PWA - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica UI, devuelven valores
// - Services: SOLO comunicación API + storage del navegador
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
mod app;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Shop Demo - Rust Puro + MVVM (API: {})", CONFIG.api_base_url);

    let app = App::new()?;
    app.mount()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Navegación llamable desde JavaScript (`data-page` de la página destino)
#[wasm_bindgen]
pub fn navigate_to(page_id: &str) {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => app.navigate_to(page_id),
        None => log::warn!("⚠️ [NAV] App no está inicializada"),
    });
}
