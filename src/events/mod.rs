//! Event-driven observer model.
//!
//! The engine never renders. A roll returns its events in the `RollOutcome`;
//! every event, including undo, redo and restart, is also published to
//! subscribed listeners.
//!
//! ## Key Types
//!
//! - `GameEvent`: what happened (`MoveApplied`, `PlayerWon`, `TurnChanged`, ...)
//! - `EventKind`: discriminant for filtered subscriptions
//! - `EventBus`: listener registry
//! - `ListenerId`: handle for unsubscribing

mod bus;
mod event;

pub use bus::{EventBus, ListenerId};
pub use event::{EventKind, GameEvent};
