//! Held-button state to per-tick intents
//!
//! Devices report levels (is the button down right now); the simulation wants
//! edges for jump and pause. The latch remembers the previous frame's levels.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Abstract buttons held during a frame, already merged across devices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub pause: bool,
    pub quit: bool,
}

impl ButtonState {
    /// Horizontal intent; right wins when both directions are held
    pub fn move_axis(&self) -> i8 {
        if self.right {
            1
        } else if self.left {
            -1
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    prev: ButtonState,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert this frame's buttons into a tick input and remember them
    pub fn sample(&mut self, buttons: ButtonState) -> TickInput {
        let input = TickInput {
            move_axis: buttons.move_axis(),
            jump_pressed: buttons.jump && !self.prev.jump,
            pause_toggled: buttons.pause && !self.prev.pause,
        };
        self.prev = buttons;
        input
    }

    /// Forget held buttons, e.g. after a reset, so a still-held jump fires
    /// again on the next frame
    pub fn clear(&mut self) {
        self.prev = ButtonState::default();
    }
}
