// ============================================================================
// TRACKING CONTEXT - Identificadores de sesión y journey para el funnel
// ============================================================================
// session id: localStorage (sobrevive recargas)
// journey id: sessionStorage (vive lo que vive la pestaña)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use super::storage::KeyValueStore;

pub const SESSION_ID_KEY: &str = "sessionId";
pub const JOURNEY_ID_KEY: &str = "journeyId";
pub const SESSION_HEADER: &str = "X-Session-ID";
pub const JOURNEY_HEADER: &str = "X-Journey-ID";

const RANDOM_SUFFIX_LEN: usize = 9;

/// Cabeceras que marcan los eventos del funnel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingHeaders {
    pub session_id: String,
    pub journey_id: String,
}

impl TrackingHeaders {
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (SESSION_HEADER, self.session_id.as_str()),
            (JOURNEY_HEADER, self.journey_id.as_str()),
        ]
    }
}

#[derive(Clone)]
pub struct TrackingContext {
    durable: Rc<dyn KeyValueStore>,
    tab: Rc<dyn KeyValueStore>,
    // Cache en memoria: también cubre el caso de storage que rechaza escrituras
    session_id: Rc<RefCell<Option<String>>>,
    journey_id: Rc<RefCell<Option<String>>>,
}

impl TrackingContext {
    pub fn new(durable: Rc<dyn KeyValueStore>, tab: Rc<dyn KeyValueStore>) -> Self {
        Self {
            durable,
            tab,
            session_id: Rc::new(RefCell::new(None)),
            journey_id: Rc::new(RefCell::new(None)),
        }
    }

    pub fn get_or_create_session_id(&self) -> String {
        get_or_create(&self.session_id, self.durable.as_ref(), SESSION_ID_KEY, "session")
    }

    pub fn get_or_create_journey_id(&self) -> String {
        get_or_create(&self.journey_id, self.tab.as_ref(), JOURNEY_ID_KEY, "journey")
    }

    pub fn tracking_headers(&self) -> TrackingHeaders {
        TrackingHeaders {
            session_id: self.get_or_create_session_id(),
            journey_id: self.get_or_create_journey_id(),
        }
    }
}

fn get_or_create(
    cache: &RefCell<Option<String>>,
    store: &dyn KeyValueStore,
    key: &str,
    prefix: &str,
) -> String {
    if let Some(id) = cache.borrow().as_ref() {
        return id.clone();
    }

    let id = match store.get(key).filter(|id| is_header_safe(id)) {
        Some(existing) => existing,
        None => {
            let fresh = generate_id(prefix, chrono::Utc::now().timestamp_millis());
            if let Err(e) = store.set(key, &fresh) {
                log::warn!("⚠️ [TRACKING] {} (se usa id solo en memoria)", e);
            }
            log::info!("🆔 [TRACKING] Nuevo {}: {}", key, fresh);
            fresh
        }
    };

    *cache.borrow_mut() = Some(id.clone());
    id
}

/// `<prefix>-<epoch ms>-<9 caracteres aleatorios base36>`
pub fn generate_id(prefix: &str, epoch_ms: i64) -> String {
    let random = Uuid::new_v4().as_u128();
    format!("{}-{}-{}", prefix, epoch_ms, base36(random, RANDOM_SUFFIX_LEN))
}

fn base36(mut value: u128, len: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.into_iter().map(char::from).collect()
}

/// Visible ASCII sin espacios: seguro como valor de cabecera HTTP
fn is_header_safe(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_graphic())
}
