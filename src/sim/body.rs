//! Kinematic body shared by the player and the boss
//!
//! Movement is resolved one axis at a time against the platform set:
//! horizontal first, then vertical. There is no sweep, so a fast enough body
//! can pass through a thin platform in one tick.

use glam::Vec2;

use super::platform::Platform;
use super::rect::Rect;
use crate::consts::{CONTACT_THRESHOLD, GRAVITY};

/// Result of vertical resolution for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalContact {
    /// Index into the platform slice of the platform landed on this tick
    pub landed_on: Option<usize>,
    /// Snapped under a platform while rising
    pub hit_ceiling: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
        }
    }

    pub fn apply_gravity(&mut self) {
        self.vel.y += GRAVITY;
    }

    /// Apply vx and push the leading edge out of any overlapped platform
    ///
    /// Returns true if a correction was applied. A body with vx == 0 that
    /// overlaps something is left alone.
    pub fn step_horizontal(&mut self, platforms: &[Platform]) -> bool {
        self.rect.pos.x += self.vel.x as i32;
        let mut blocked = false;
        for platform in platforms {
            if !self.rect.overlaps(&platform.rect) {
                continue;
            }
            if self.vel.x > 0.0 {
                self.rect.set_right(platform.rect.left());
                blocked = true;
            } else if self.vel.x < 0.0 {
                self.rect.set_left(platform.rect.right());
                blocked = true;
            }
        }
        blocked
    }

    /// Apply vy and settle on top of (or under) overlapped platforms
    ///
    /// Direction is taken from vy before resolution. When several platforms
    /// qualify, each one snaps in turn and the last in slice order wins.
    /// A body that is not rising and whose bottom sits exactly on a
    /// platform's top counts as standing on it, since sub-pixel gravity
    /// leaves a resting body touching without overlap.
    pub fn step_vertical(&mut self, platforms: &[Platform]) -> VerticalContact {
        self.rect.pos.y += self.vel.y as i32;
        let falling = self.vel.y > 0.0;
        let rising = self.vel.y < 0.0;
        let mut contact = VerticalContact::default();

        for (index, platform) in platforms.iter().enumerate() {
            if !self.rect.overlaps(&platform.rect) {
                if !rising
                    && self.rect.bottom() == platform.rect.top()
                    && self.rect.overlaps_x(&platform.rect)
                {
                    self.vel.y = 0.0;
                    contact.landed_on = Some(index);
                }
                continue;
            }
            if falling && self.rect.bottom() - platform.rect.top() < CONTACT_THRESHOLD {
                self.rect.set_bottom(platform.rect.top());
                self.vel.y = 0.0;
                contact.landed_on = Some(index);
            } else if rising && platform.rect.bottom() - self.rect.top() < CONTACT_THRESHOLD {
                self.rect.set_top(platform.rect.bottom());
                self.vel.y = 0.0;
                contact.hit_ceiling = true;
            }
        }
        contact
    }
}
