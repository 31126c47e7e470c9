//! Session events and the observer boundary.
//!
//! The session never touches a visual surface. Each transition produces
//! `SessionEvent`s which are handed to every subscribed `SessionObserver`;
//! a renderer implements the observer and redraws from them.
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::core::{SessionConfig, ThemeId};
//! use memory_match::session::{EventLog, GameSession, SessionEvent, SessionState};
//!
//! let mut session = GameSession::with_seed(42);
//! let log = EventLog::new();
//! session.subscribe(Box::new(log.clone()));
//!
//! session.start(SessionConfig::new(2, 2, 5, ThemeId::light())).unwrap();
//!
//! assert_eq!(log.take(), vec![SessionEvent::StateChanged(SessionState::Playing)]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::state::SessionState;
use crate::cards::CardId;

/// Something the renderer should reflect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A card flipped or was matched.
    CardChanged {
        card: CardId,
        is_face_up: bool,
        is_matched: bool,
    },

    /// The countdown moved.
    TimerTick { seconds_left: u32 },

    /// The session moved to a new state. Carries the outcome when ended.
    StateChanged(SessionState),
}

impl SessionEvent {
    /// Hand this event to the matching observer hook.
    pub fn dispatch(&self, observer: &mut dyn SessionObserver) {
        match *self {
            SessionEvent::CardChanged {
                card,
                is_face_up,
                is_matched,
            } => observer.on_card_changed(card, is_face_up, is_matched),
            SessionEvent::TimerTick { seconds_left } => observer.on_timer_tick(seconds_left),
            SessionEvent::StateChanged(state) => observer.on_state_changed(state),
        }
    }
}

/// Listener for session events.
///
/// All hooks default to doing nothing, so observers only implement what
/// they draw.
pub trait SessionObserver {
    /// A card's face or matched flag changed.
    fn on_card_changed(&mut self, _card: CardId, _is_face_up: bool, _is_matched: bool) {}

    /// The countdown now shows `seconds_left`.
    fn on_timer_tick(&mut self, _seconds_left: u32) {}

    /// The session entered `state`.
    fn on_state_changed(&mut self, _state: SessionState) {}
}

/// Observer that records every event.
///
/// Clones share one buffer, so keep a clone to inspect what a subscribed
/// log has seen.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<SessionEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: SessionEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl SessionObserver for EventLog {
    fn on_card_changed(&mut self, card: CardId, is_face_up: bool, is_matched: bool) {
        self.push(SessionEvent::CardChanged {
            card,
            is_face_up,
            is_matched,
        });
    }

    fn on_timer_tick(&mut self, seconds_left: u32) {
        self.push(SessionEvent::TimerTick { seconds_left });
    }

    fn on_state_changed(&mut self, state: SessionState) {
        self.push(SessionEvent::StateChanged(state));
    }
}

/// Observer that forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn on_card_changed(&mut self, card: CardId, is_face_up: bool, is_matched: bool) {
        tracing::trace!(%card, is_face_up, is_matched, "card changed");
    }

    fn on_timer_tick(&mut self, seconds_left: u32) {
        tracing::trace!(seconds_left, "timer tick");
    }

    fn on_state_changed(&mut self, state: SessionState) {
        tracing::debug!(%state, "state changed");
    }
}
