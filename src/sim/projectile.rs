//! Boss projectiles: straight-line, gravity-free

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{HEIGHT, WIDTH};
use crate::theme::Tint;

/// Off-screen slack before a projectile is dropped
pub const PROJECTILE_MARGIN: i32 = 100;
/// Where spent projectiles are parked until the next prune
pub const RETIRED_X: i32 = -9999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: Vec2,
    pub tint: Tint,
}

impl Projectile {
    pub fn new(rect: Rect, vel: Vec2, tint: Tint) -> Self {
        Self { rect, vel, tint }
    }

    pub fn update(&mut self) {
        self.rect.pos.x += self.vel.x as i32;
        self.rect.pos.y += self.vel.y as i32;
    }

    /// Still inside the visible area plus margin
    pub fn in_play(&self) -> bool {
        -PROJECTILE_MARGIN < self.rect.right()
            && self.rect.left() < WIDTH + PROJECTILE_MARGIN
            && -PROJECTILE_MARGIN < self.rect.bottom()
            && self.rect.top() < HEIGHT + PROJECTILE_MARGIN
    }

    /// Move far off-stage so the next prune drops it
    pub fn retire(&mut self) {
        self.rect.set_left(RETIRED_X);
    }
}
