//! Events emitted during a tick
//!
//! Audio and UI layers drain these after the tick; the simulation never calls
//! into presentation code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Player performed a jump (ground, coyote or mid-air)
    Jumped,
    /// Player landed a stomp on the boss
    Stomped,
    /// Player lost a health point
    Damaged,
    /// Boss of the given stage was defeated
    StageCleared { stage: usize },
    /// Final boss defeated
    RunWon,
    /// Health exhausted
    GameOver,
    Paused,
    Resumed,
}

/// Append-only queue for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQueue {
    events: Vec<SimEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SimEvent) {
        log::trace!("event: {:?}", event);
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn drain(&mut self) -> impl Iterator<Item = SimEvent> + '_ {
        self.events.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimEvent> {
        self.events.iter()
    }

    pub fn contains(&self, event: SimEvent) -> bool {
        self.events.contains(&event)
    }

    pub fn count(&self, event: SimEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn as_slice(&self) -> &[SimEvent] {
        &self.events
    }
}
