// ============================================================================
// REQUEST SEQUENCER - Descarta respuestas superadas
// ============================================================================
// Cada carga toma un ticket de su slot. Si al volver la respuesta ya hay un
// ticket más nuevo en ese slot, la respuesta se ignora en vez de pisar el DOM.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestSlot {
    Products,
    Cart,
    Orders,
    Badge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    slot: RequestSlot,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<RefCell<HashMap<RequestSlot, u64>>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, slot: RequestSlot) -> RequestTicket {
        let mut latest = self.latest.borrow_mut();
        let seq = latest.entry(slot).or_insert(0);
        *seq += 1;
        RequestTicket { slot, seq: *seq }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.borrow().get(&ticket.slot) == Some(&ticket.seq)
    }
}
