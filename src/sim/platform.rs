//! Static and oscillating platforms

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::theme::Tint;

/// Axis a moving platform swings along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Sine-wave back-and-forth motion
///
/// The phase advances by `speed` every tick regardless of elapsed time, so
/// motion is frame-paced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    /// Amplitude in pixels
    pub range: f32,
    /// Phase increment per tick (radians)
    pub speed: f32,
    pub phase: f32,
    pub axis: Axis,
}

impl Oscillation {
    pub fn new(range: f32, speed: f32, axis: Axis) -> Self {
        Self {
            range,
            speed,
            phase: 0.0,
            axis,
        }
    }

    /// Whole-pixel displacement the next `step` will produce
    pub fn peek(&self) -> i32 {
        let prev = self.phase.sin() * self.range;
        let curr = (self.phase + self.speed).sin() * self.range;
        (curr - prev) as i32
    }

    /// Advance one tick and return the whole-pixel displacement along the axis
    pub fn step(&mut self) -> i32 {
        let delta = self.peek();
        self.phase += self.speed;
        delta
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub tint: Tint,
    /// `None` for static platforms
    pub motion: Option<Oscillation>,
    /// Self-caused displacement this tick, world scroll excluded
    pub local_delta: IVec2,
}

impl Platform {
    pub fn solid(rect: Rect, tint: Tint) -> Self {
        Self {
            rect,
            tint,
            motion: None,
            local_delta: IVec2::ZERO,
        }
    }

    pub fn oscillating(rect: Rect, tint: Tint, motion: Oscillation) -> Self {
        Self {
            rect,
            tint,
            motion: Some(motion),
            local_delta: IVec2::ZERO,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    /// Own motion the next `advance` will apply
    ///
    /// Actors resolve before the stage advances platforms, so riders are
    /// carried by this value to move in the same tick as their platform.
    pub fn upcoming_delta(&self) -> IVec2 {
        match self.motion {
            Some(motion) => along(motion.axis, motion.peek()),
            None => IVec2::ZERO,
        }
    }

    /// Run this tick's own motion and record it in `local_delta`
    pub fn advance(&mut self) -> IVec2 {
        let delta = match self.motion.as_mut() {
            Some(motion) => along(motion.axis, motion.step()),
            None => IVec2::ZERO,
        };
        self.rect.pos += delta;
        self.local_delta = delta;
        delta
    }

    /// Shift left with the world
    pub fn scroll(&mut self, speed: i32) {
        self.rect.pos.x -= speed;
    }
}

fn along(axis: Axis, step: i32) -> IVec2 {
    match axis {
        Axis::Horizontal => IVec2::new(step, 0),
        Axis::Vertical => IVec2::new(0, step),
    }
}
