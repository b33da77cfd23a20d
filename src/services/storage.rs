// ============================================================================
// STORAGE - localStorage / sessionStorage detrás de un trait
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, SessionStorage, Storage};

/// Almacén clave/valor de strings (localStorage, sessionStorage o memoria)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Ámbito del almacén del navegador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserStore {
    /// Sobrevive a recargas (localStorage)
    Local,
    /// Vive lo que viva la pestaña (sessionStorage)
    Session,
}

impl BrowserStore {
    /// El almacén del navegador, o uno en memoria si el navegador lo bloquea
    /// (cookies desactivadas, iframes sandbox). Los ids duran entonces lo que
    /// dure la página.
    pub fn open(self) -> Rc<dyn KeyValueStore> {
        if self.is_available() {
            Rc::new(self)
        } else {
            log::warn!("⚠️ [STORAGE] {:?} no disponible, se usa memoria", self);
            Rc::new(MemoryStore::new())
        }
    }

    fn is_available(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let storage = match self {
            BrowserStore::Local => window.local_storage(),
            BrowserStore::Session => window.session_storage(),
        };
        matches!(storage, Ok(Some(_)))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        // Los valores se guardan en crudo, sin pasar por JSON
        let raw = match self {
            BrowserStore::Local => LocalStorage::raw().get_item(key),
            BrowserStore::Session => SessionStorage::raw().get_item(key),
        };
        raw.ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let result = match self {
            BrowserStore::Local => LocalStorage::raw().set_item(key, value),
            BrowserStore::Session => SessionStorage::raw().set_item(key, value),
        };
        result.map_err(|_| format!("Error guardando '{}' en {:?}", key, self))
    }
}

/// Almacén en memoria: sustituto de `BrowserStore` cuando el navegador no da storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de escrituras realizadas
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
