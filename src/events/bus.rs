//! Event listeners.
//!
//! The bus stores listener callbacks and delivers each published event to
//! every listener whose filter matches. Listeners only observe; they get a
//! shared reference to the event and never touch engine state.

use serde::{Deserialize, Serialize};

use super::event::{EventKind, GameEvent};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

type Callback = Box<dyn FnMut(&GameEvent)>;

struct Listener {
    id: ListenerId,
    /// `None` listens to everything.
    kinds: Option<Vec<EventKind>>,
    callback: Callback,
}

impl Listener {
    fn wants(&self, kind: EventKind) -> bool {
        self.kinds.as_ref().map_or(true, |kinds| kinds.contains(&kind))
    }
}

/// Registry of event listeners.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Listener>,
    next_id: u32,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen to every event.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.register(None, Box::new(callback))
    }

    /// Listen only to the given kinds of event.
    pub fn subscribe_to(
        &mut self,
        kinds: &[EventKind],
        callback: impl FnMut(&GameEvent) + 'static,
    ) -> ListenerId {
        self.register(Some(kinds.to_vec()), Box::new(callback))
    }

    fn register(&mut self, kinds: Option<Vec<EventKind>>, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener { id, kinds, callback });
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Deliver events in order, each to listeners in subscription order.
    pub fn publish(&mut self, events: &[GameEvent]) {
        for event in events {
            let kind = event.kind();
            for listener in &mut self.listeners {
                if listener.wants(kind) {
                    (listener.callback)(event);
                }
            }
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
