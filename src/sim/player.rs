//! The player character: movement, multi-jump with coyote time, damage and
//! respawn sequencing

use glam::{IVec2, Vec2};

use super::body::Body;
use super::event::{EventQueue, SimEvent};
use super::platform::Platform;
use super::rect::Rect;
use crate::consts::*;

pub const PLAYER_SIZE: i32 = 48;
/// Spawn point of a fresh run
pub const PLAYER_START: IVec2 = IVec2::new(160, HEIGHT - 200);
/// Horizontal bounds for the respawn anchor
const SAFE_MIN_X: i32 = 40;
const SAFE_MAX_X: i32 = WIDTH - 80;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub on_ground: bool,
    pub health: u8,
    /// Seconds of damage immunity left
    pub invincible_timer: f32,
    pub max_jumps: u32,
    pub jumps_remaining: u32,
    /// Seconds left in which a jump still counts as a ground jump
    pub coyote_timer: f32,
    /// Last grounded position, used as the respawn anchor
    pub safe_spot: IVec2,
    /// Index of the platform stood on this tick; only valid until the
    /// platform set changes
    pub grounded_on: Option<usize>,
    /// While positive, the player hangs in place with gravity suppressed
    pub respawn_float_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START.x, PLAYER_START.y)
    }
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            body: Body::new(Rect::new(x, y, PLAYER_SIZE, PLAYER_SIZE)),
            on_ground: false,
            health: MAX_HEALTH,
            invincible_timer: 0.0,
            max_jumps: MAX_JUMPS,
            jumps_remaining: MAX_JUMPS,
            coyote_timer: 0.0,
            safe_spot: IVec2::new(x, y),
            grounded_on: None,
            respawn_float_timer: 0.0,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0.0
    }

    #[inline]
    pub fn is_floating(&self) -> bool {
        self.respawn_float_timer > 0.0
    }

    /// Set horizontal speed from a move intent (-1, 0 or +1)
    pub fn control(&mut self, move_axis: i8) {
        self.body.vel.x = f32::from(move_axis.signum()) * PLAYER_SPEED;
    }

    /// Handle a jump press. Returns whether a jump happened.
    pub fn try_jump(&mut self, events: &mut EventQueue) -> bool {
        if self.is_floating() {
            return false;
        }
        if self.coyote_timer > 0.0 {
            // Grounded (or just left the ground): full first jump
            self.body.vel.y = -JUMP_POWER;
            self.on_ground = false;
            self.coyote_timer = 0.0;
            self.jumps_remaining = self.max_jumps - 1;
        } else if self.jumps_remaining > 0 {
            self.body.vel.y = -JUMP_POWER;
            self.jumps_remaining -= 1;
        } else {
            return false;
        }
        events.push(SimEvent::Jumped);
        true
    }

    /// Integrate one tick and resolve against the platform set
    pub fn update(&mut self, dt: f32, platforms: &[Platform], events: &mut EventQueue) {
        if self.is_floating() {
            self.respawn_float_timer = (self.respawn_float_timer - dt).max(0.0);
            self.body.vel = Vec2::ZERO;
            self.tick_invincibility(dt);
            return;
        }

        self.body.apply_gravity();
        self.body.step_horizontal(platforms);
        let contact = self.body.step_vertical(platforms);

        self.on_ground = contact.landed_on.is_some();
        self.grounded_on = contact.landed_on;
        match contact.landed_on {
            Some(index) => {
                // Ride along with the platform's own motion for this tick
                self.body.rect.pos.x += platforms[index].upcoming_delta().x;
                self.coyote_timer = COYOTE_TIME;
                self.jumps_remaining = self.max_jumps;
                self.safe_spot = IVec2::new(
                    self.body.rect.left().clamp(SAFE_MIN_X, SAFE_MAX_X),
                    self.body.rect.top(),
                );
            }
            None => {
                self.coyote_timer = (self.coyote_timer - dt).max(0.0);
            }
        }

        self.clamp_to_screen();

        if self.body.rect.top() > FALL_LIMIT {
            log::debug!("player fell out at x={}", self.body.rect.left());
            self.take_damage(events);
            self.respawn();
        }

        self.tick_invincibility(dt);
    }

    /// Lose one health point unless invincible. Returns whether damage landed.
    pub fn take_damage(&mut self, events: &mut EventQueue) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.health = self.health.saturating_sub(1);
        self.invincible_timer = HIT_INVINCIBILITY;
        events.push(SimEvent::Damaged);
        true
    }

    /// Reappear above the last safe spot and hang there briefly
    pub fn respawn(&mut self) {
        self.body.rect.pos = IVec2::new(self.safe_spot.x, self.safe_spot.y - RESPAWN_LIFT);
        self.body.vel = Vec2::ZERO;
        self.on_ground = false;
        self.grounded_on = None;
        self.respawn_float_timer = RESPAWN_FLOAT;
        self.invincible_timer = RESPAWN_INVINCIBILITY;
        self.jumps_remaining = self.max_jumps;
        self.coyote_timer = 0.0;
    }

    fn clamp_to_screen(&mut self) {
        let rect = &mut self.body.rect;
        let vel = &mut self.body.vel;
        if rect.left() < 0 {
            rect.set_left(0);
            if vel.x < 0.0 {
                vel.x = 0.0;
            }
        }
        if rect.right() > WIDTH {
            rect.set_right(WIDTH);
            if vel.x > 0.0 {
                vel.x = 0.0;
            }
        }
        if rect.top() < 0 {
            rect.set_top(0);
            if vel.y < 0.0 {
                vel.y = 0.0;
            }
        }
    }

    fn tick_invincibility(&mut self, dt: f32) {
        if self.invincible_timer > 0.0 {
            self.invincible_timer = (self.invincible_timer - dt).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::platform::{Axis, Oscillation};
    use crate::theme::Tint;

    fn ground() -> Vec<Platform> {
        vec![Platform::solid(Rect::new(0, GROUND_Y, WIDTH, GROUND_HEIGHT), Tint::Ground)]
    }

    /// Player resting on the ground after a landing tick
    fn grounded_player(platforms: &[Platform]) -> Player {
        let mut player = Player::new(200, GROUND_Y - PLAYER_SIZE - 10);
        let mut events = EventQueue::new();
        for _ in 0..30 {
            player.update(SIM_DT, platforms, &mut events);
            if player.on_ground {
                break;
            }
        }
        assert!(player.on_ground);
        player
    }

    #[test]
    fn test_initial_state() {
        let player = Player::default();
        assert_eq!(player.rect().pos, IVec2::new(160, HEIGHT - 200));
        assert_eq!(player.health, 3);
        assert_eq!(player.jumps_remaining, 2);
        assert!(!player.is_invincible());
    }

    #[test]
    fn test_landing_resets_jumps_and_anchor() {
        let platforms = ground();
        let player = grounded_player(&platforms);
        assert_eq!(player.rect().bottom(), GROUND_Y);
        assert_eq!(player.jumps_remaining, player.max_jumps);
        assert_eq!(player.coyote_timer, COYOTE_TIME);
        assert_eq!(player.safe_spot, IVec2::new(200, GROUND_Y - PLAYER_SIZE));
        assert_eq!(player.grounded_on, Some(0));
    }

    #[test]
    fn test_ground_jump_then_air_jump_then_exhausted() {
        let platforms = ground();
        let mut player = grounded_player(&platforms);
        let mut events = EventQueue::new();

        assert!(player.try_jump(&mut events));
        assert_eq!(player.body.vel.y, -JUMP_POWER);
        assert_eq!(player.jumps_remaining, 1);
        assert_eq!(player.coyote_timer, 0.0);

        player.update(SIM_DT, &platforms, &mut events);
        assert!(player.try_jump(&mut events));
        assert_eq!(player.body.vel.y, -JUMP_POWER);
        assert_eq!(player.jumps_remaining, 0);

        player.update(SIM_DT, &platforms, &mut events);
        let vel_before = player.body.vel;
        assert!(!player.try_jump(&mut events));
        assert_eq!(player.body.vel, vel_before);
        assert_eq!(events.count(SimEvent::Jumped), 2);
    }

    #[test]
    fn test_jump_is_not_additive() {
        let mut player = Player::new(200, 100);
        let mut events = EventQueue::new();
        player.body.vel.y = 12.0;
        assert!(player.try_jump(&mut events));
        assert_eq!(player.body.vel.y, -JUMP_POWER);
    }

    #[test]
    fn test_coyote_window_allows_ground_jump() {
        let platforms = ground();
        let mut player = grounded_player(&platforms);
        let mut events = EventQueue::new();
        // Walk off into empty space: no platforms at all
        player.update(SIM_DT, &[], &mut events);
        assert!(!player.on_ground);
        assert!(player.coyote_timer > 0.0);
        player.jumps_remaining = 0;
        assert!(player.try_jump(&mut events));
        assert_eq!(player.jumps_remaining, player.max_jumps - 1);
    }

    #[test]
    fn test_coyote_window_expires() {
        let mut player = Player::new(200, 100);
        let mut events = EventQueue::new();
        player.coyote_timer = COYOTE_TIME;
        for _ in 0..10 {
            player.update(SIM_DT, &[], &mut events);
        }
        assert_eq!(player.coyote_timer, 0.0);
    }

    #[test]
    fn test_take_damage_respects_invincibility() {
        let mut player = Player::default();
        let mut events = EventQueue::new();
        assert!(player.take_damage(&mut events));
        assert_eq!(player.health, 2);
        assert_eq!(player.invincible_timer, HIT_INVINCIBILITY);
        assert!(!player.take_damage(&mut events));
        assert_eq!(player.health, 2);
        assert_eq!(events.count(SimEvent::Damaged), 1);
    }

    #[test]
    fn test_health_saturates_at_zero() {
        let mut player = Player::default();
        let mut events = EventQueue::new();
        player.health = 0;
        player.take_damage(&mut events);
        assert_eq!(player.health, 0);
    }

    #[test]
    fn test_fall_costs_one_point_and_respawns() {
        let mut player = Player::new(300, 200);
        let mut events = EventQueue::new();
        player.safe_spot = IVec2::new(300, 200);
        player.body.rect.set_top(FALL_LIMIT);
        player.body.vel.y = 10.0;
        player.update(SIM_DT, &[], &mut events);

        assert_eq!(player.health, MAX_HEALTH - 1);
        assert_eq!(events.count(SimEvent::Damaged), 1);
        assert_eq!(player.rect().pos, IVec2::new(300, 200 - RESPAWN_LIFT));
        assert_eq!(player.body.vel, Vec2::ZERO);
        assert!(player.is_floating());
        assert!((player.invincible_timer - (RESPAWN_INVINCIBILITY - SIM_DT)).abs() < 1e-5);
        assert_eq!(player.jumps_remaining, player.max_jumps);
        assert_eq!(player.coyote_timer, 0.0);
    }

    #[test]
    fn test_fall_while_invincible_still_respawns() {
        let mut player = Player::new(300, 200);
        let mut events = EventQueue::new();
        player.invincible_timer = 1.0;
        player.body.rect.set_top(FALL_LIMIT + 5);
        player.update(SIM_DT, &[], &mut events);
        assert_eq!(player.health, MAX_HEALTH);
        assert!(player.is_floating());
    }

    #[test]
    fn test_float_freezes_motion_and_blocks_jumps() {
        let mut player = Player::new(300, 200);
        let mut events = EventQueue::new();
        player.respawn();
        let start = player.rect().pos;
        player.body.vel = Vec2::new(5.0, 3.0);

        assert!(!player.try_jump(&mut events));
        player.update(SIM_DT, &[], &mut events);
        assert_eq!(player.rect().pos, start);
        assert_eq!(player.body.vel, Vec2::ZERO);

        // Float lasts 0.9s; after it gravity applies again
        for _ in 0..60 {
            player.update(SIM_DT, &[], &mut events);
        }
        assert!(!player.is_floating());
        assert!(player.rect().top() > start.y);
    }

    #[test]
    fn test_rider_takes_platform_step() {
        let ledge = Platform::oscillating(
            Rect::new(100, 300, 200, 20),
            Tint::Accent,
            Oscillation::new(40.0, 0.08, Axis::Horizontal),
        );
        let platforms = [ledge];
        let mut player = Player::new(150, 300 - PLAYER_SIZE);
        let mut events = EventQueue::new();
        player.body.vel.y = 5.0;
        player.update(SIM_DT, &platforms, &mut events);
        assert!(player.on_ground);
        assert_eq!(player.rect().left(), 153);
    }

    #[test]
    fn test_resting_player_stays_grounded() {
        let platforms = ground();
        let mut player = grounded_player(&platforms);
        let mut events = EventQueue::new();
        for _ in 0..20 {
            player.update(SIM_DT, &platforms, &mut events);
            assert!(player.on_ground);
            assert_eq!(player.grounded_on, Some(0));
            assert_eq!(player.coyote_timer, COYOTE_TIME);
        }
    }

    #[test]
    fn test_screen_edges_clamp() {
        let mut player = Player::new(2, 100);
        let mut events = EventQueue::new();
        player.control(-1);
        player.update(SIM_DT, &[], &mut events);
        assert_eq!(player.rect().left(), 0);
        assert_eq!(player.body.vel.x, 0.0);

        let mut player = Player::new(WIDTH - PLAYER_SIZE - 2, 100);
        player.control(1);
        player.update(SIM_DT, &[], &mut events);
        assert_eq!(player.rect().right(), WIDTH);
    }

    #[test]
    fn test_control_axis() {
        let mut player = Player::default();
        player.control(1);
        assert_eq!(player.body.vel.x, PLAYER_SPEED);
        player.control(-1);
        assert_eq!(player.body.vel.x, -PLAYER_SPEED);
        player.control(0);
        assert_eq!(player.body.vel.x, 0.0);
    }
}
