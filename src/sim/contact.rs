//! Player-vs-boss contact classification
//!
//! Unlike platform resolution, boss contact picks the axis of minimum
//! penetration among the four sides, then decides between a stomp and a
//! plain push-back.

use super::rect::Rect;
use crate::consts::STOMP_MARGIN;

/// Boss side the player is pushed out through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossContact {
    /// Falling onto the boss's head: damages the boss
    Stomp,
    /// Any other touch: positional correction only
    Push(Side),
}

/// Penetration depth through each boss side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Penetration {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Penetration {
    pub fn between(player: &Rect, boss: &Rect) -> Self {
        Self {
            top: player.bottom() - boss.top(),
            bottom: boss.bottom() - player.top(),
            left: player.right() - boss.left(),
            right: boss.right() - player.left(),
        }
    }

    pub fn min(&self) -> i32 {
        self.top.min(self.bottom).min(self.left).min(self.right)
    }
}

/// Classify an overlap between the player and the boss
///
/// Returns `None` when the rectangles don't overlap. Ties between push sides
/// resolve left, right, bottom, then top.
pub fn classify(player: &Rect, player_vy: f32, boss: &Rect) -> Option<BossContact> {
    if !player.overlaps(boss) {
        return None;
    }
    let pen = Penetration::between(player, boss);
    let min = pen.min();

    let falling = player_vy > 0.0;
    let stompable = falling && player.bottom() <= boss.top() + STOMP_MARGIN;
    if stompable && min == pen.top {
        return Some(BossContact::Stomp);
    }

    let side = if min == pen.left {
        Side::Left
    } else if min == pen.right {
        Side::Right
    } else if min == pen.bottom {
        Side::Bottom
    } else {
        Side::Top
    };
    Some(BossContact::Push(side))
}
