// ============================================================================
// LOAD TIMER - Feedback visual de latencia de una carga de datos
// ============================================================================
// Un único slot global: empezar una carga nueva para el timer anterior.
// La limpieza en todas las salidas (ok, error, superada) la garantiza el
// LoadGuard: se cierra al hacer drop aunque el future devuelva antes.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

use crate::dom::RenderSurface;

/// Clase que escala visualmente el indicador cuando la carga va lenta
pub const SLOW_CLASS: &str = "slow";

pub trait Clock {
    fn now_ms(&self) -> f64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// Fuente de ticks periódicos. Soltar el handle detiene el tick.
pub trait Ticker {
    type Handle;
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTicker;

impl Ticker for GlooTicker {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

struct ActiveLoad<H> {
    generation: u64,
    indicator_id: String,
    started_at_ms: f64,
    _tick: H,
}

struct TimerSlot<T: Ticker> {
    ticker: T,
    clock: Rc<dyn Clock>,
    surface: Rc<dyn RenderSurface>,
    tick_ms: u32,
    slow_threshold_secs: f64,
    generation: u64,
    active: Option<ActiveLoad<T::Handle>>,
}

/// Timer de carga compartido (clonar comparte el mismo slot)
pub struct LoadTimer<T: Ticker> {
    slot: Rc<RefCell<TimerSlot<T>>>,
}

impl<T: Ticker> Clone for LoadTimer<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T: Ticker + 'static> LoadTimer<T> {
    pub fn new(
        ticker: T,
        clock: Rc<dyn Clock>,
        surface: Rc<dyn RenderSurface>,
        tick_ms: u32,
        slow_threshold_secs: f64,
    ) -> Self {
        Self {
            slot: Rc::new(RefCell::new(TimerSlot {
                ticker,
                clock,
                surface,
                tick_ms,
                slow_threshold_secs,
                generation: 0,
                active: None,
            })),
        }
    }

    /// Empieza una carga en `indicator_id`. Si había otra en curso, su timer
    /// se detiene primero: nunca hay dos ticks vivos.
    pub fn begin(&self, indicator_id: &str) -> LoadGuard<T> {
        let mut slot = self.slot.borrow_mut();

        if let Some(previous) = slot.active.take() {
            log::info!(
                "⏹️ [LOAD] Carga #{} en #{} superada por una nueva",
                previous.generation,
                previous.indicator_id
            );
        }

        slot.generation += 1;
        let generation = slot.generation;
        let started_at_ms = slot.clock.now_ms();

        slot.surface.set_text(indicator_id, "");
        slot.surface.set_class(indicator_id, SLOW_CLASS, false);

        let tick = {
            let clock = slot.clock.clone();
            let surface = slot.surface.clone();
            let indicator = indicator_id.to_string();
            let threshold = slot.slow_threshold_secs;
            move || {
                let elapsed = elapsed_secs(started_at_ms, clock.now_ms());
                surface.set_text(&indicator, &tick_label(elapsed));
                if elapsed > threshold {
                    surface.set_class(&indicator, SLOW_CLASS, true);
                }
            }
        };
        let handle = slot.ticker.every(slot.tick_ms, Box::new(tick));

        slot.active = Some(ActiveLoad {
            generation,
            indicator_id: indicator_id.to_string(),
            started_at_ms,
            _tick: handle,
        });

        LoadGuard {
            timer: self.clone(),
            generation: Some(generation),
        }
    }

    /// Detiene el timer activo (si lo hay) y devuelve los segundos transcurridos
    pub fn end(&self) -> Option<f64> {
        let mut slot = self.slot.borrow_mut();
        let active = slot.active.take()?;
        Some(elapsed_secs(active.started_at_ms, slot.clock.now_ms()))
    }

    fn end_generation(&self, generation: u64) -> Option<f64> {
        let is_current = self
            .slot
            .borrow()
            .active
            .as_ref()
            .map_or(false, |active| active.generation == generation);
        if is_current {
            self.end()
        } else {
            None
        }
    }

    pub fn is_active(&self) -> bool {
        self.slot.borrow().active.is_some()
    }
}

/// Cierra su carga al terminar (o al hacer drop).
/// Si una carga más nueva ya ocupó el slot, no toca nada.
pub struct LoadGuard<T: Ticker + 'static> {
    timer: LoadTimer<T>,
    generation: Option<u64>,
}

impl<T: Ticker + 'static> LoadGuard<T> {
    /// Segundos transcurridos si esta carga seguía siendo la vigente
    pub fn finish(mut self) -> Option<f64> {
        let generation = self.generation.take()?;
        self.timer.end_generation(generation)
    }

    pub fn is_current(&self) -> bool {
        match self.generation {
            Some(generation) => self
                .timer
                .slot
                .borrow()
                .active
                .as_ref()
                .map_or(false, |active| active.generation == generation),
            None => false,
        }
    }
}

impl<T: Ticker + 'static> Drop for LoadGuard<T> {
    fn drop(&mut self) {
        if let Some(generation) = self.generation.take() {
            self.timer.end_generation(generation);
        }
    }
}

pub fn elapsed_secs(started_at_ms: f64, now_ms: f64) -> f64 {
    ((now_ms - started_at_ms) / 1000.0).max(0.0)
}

pub fn tick_label(elapsed_secs: f64) -> String {
    format!("⏱️ {:.1}s", elapsed_secs)
}
