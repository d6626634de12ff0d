//! Change-Benachrichtigung: Subscriber-Listen mit expliziter Abmeldung.
//!
//! Subscriber werden in Registrierungsreihenfolge benachrichtigt.

use crate::core::SlotId;

/// Handle einer Anmeldung (für `unsubscribe`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Geänderte Sichtbarkeit eines Slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotVisibilityChange {
    pub slot_id: SlotId,
    pub visible: bool,
}

type Callback<T> = Box<dyn FnMut(&T)>;

/// Liste angemeldeter Callbacks für Werte vom Typ `T`.
pub struct Observers<T: ?Sized> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T: ?Sized> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscriber_count", &self.callbacks.len())
            .finish()
    }
}

impl<T: ?Sized> Observers<T> {
    /// Meldet einen Callback an.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Meldet einen Callback ab. `false`, wenn die ID unbekannt war.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub_id, _)| *sub_id != id);
        self.callbacks.len() != before
    }

    /// Ruft alle Callbacks mit `value` auf.
    pub fn notify(&mut self, value: &T) {
        for (_, callback) in &mut self.callbacks {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}
