//! Stage boss: patrol, dash, jumps, stuck escape and projectile fire
//!
//! Behavior is a set of independent timers rather than a single state tag:
//!
//! - `action_timer` accumulates while alive; once grounded and past
//!   `ACTION_INTERVAL` it resets and rolls dash (40%) or high jump (60%).
//! - `dash_timer` is armed by a dash and, on expiry, drops speed back to the
//!   walking pace in the current direction.
//! - `jump_cooldown` counts down; while grounded and expired, each tick has a
//!   50% chance of a hop that re-arms it in [1.0, 2.0)s.
//! - `shoot_cooldown` counts down; on expiry it is re-armed in [1.2, 2.4)s and
//!   one projectile is fired.
//! - `stuck_timer` accumulates while x moves less than `STUCK_EPSILON` per
//!   tick; past `STUCK_LIMIT` it forces an escape jump and resets.

use glam::Vec2;

use super::body::Body;
use super::platform::Platform;
use super::projectile::Projectile;
use super::rect::Rect;
use super::rng::RandomSource;
use crate::consts::{HEIGHT, WIDTH};
use crate::theme::Tint;

pub const BOSS_WIDTH: i32 = 120;
pub const BOSS_HEIGHT: i32 = 100;

const WALK_SPEED: f32 = 2.0;
const DASH_SPEED: f32 = 6.0;
const DASH_DURATION: f32 = 0.6;
const DASH_CHANCE: f32 = 0.4;
const ACTION_INTERVAL: f32 = 1.2;
const HIGH_JUMP: f32 = 16.0;
const HOP_JUMP: f32 = 12.0;
const HOP_CHANCE: f32 = 0.5;
const HOP_COOLDOWN: (f32, f32) = (1.0, 2.0);
const ESCAPE_JUMP: f32 = 14.0;
const STUCK_EPSILON: i32 = 2;
const STUCK_LIMIT: f32 = 1.0;
const EDGE_MARGIN: i32 = 12;
const SHOOT_COOLDOWN: (f32, f32) = (1.2, 2.4);
const INITIAL_SHOOT_COOLDOWN: f32 = 1.0;
const PROJECTILE_SPEED: f32 = 6.0;
const PROJECTILE_LIFT: (f32, f32) = (-3.0, -1.0);
/// Boss may not sink below this bottom edge
const FLOOR_Y: i32 = HEIGHT - 10;
/// Minimum vy given to the boss when stomped
pub const STOMP_NUDGE: f32 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    pub body: Body,
    pub max_hp: u32,
    pub hp: u32,
    pub alive: bool,
    pub on_ground: bool,
    pub jump_cooldown: f32,
    pub shoot_cooldown: f32,
    pub action_timer: f32,
    pub dash_timer: f32,
    pub stuck_timer: f32,
    last_x: i32,
}

impl Boss {
    /// Later stages get one extra hit point each
    pub fn new(x: i32, y: i32, stage_index: usize) -> Self {
        let max_hp = 3 + stage_index as u32;
        let mut body = Body::new(Rect::new(x, y, BOSS_WIDTH, BOSS_HEIGHT));
        body.vel.x = -WALK_SPEED;
        Self {
            body,
            max_hp,
            hp: max_hp,
            alive: true,
            on_ground: false,
            jump_cooldown: 0.0,
            shoot_cooldown: INITIAL_SHOOT_COOLDOWN,
            action_timer: 0.0,
            dash_timer: 0.0,
            stuck_timer: 0.0,
            last_x: x,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    /// Remaining health in [0, 1]
    pub fn hp_ratio(&self) -> f32 {
        self.hp as f32 / self.max_hp.max(1) as f32
    }

    /// -1 when heading left (or standing still), +1 when heading right
    pub fn facing(&self) -> f32 {
        if self.body.vel.x <= 0.0 { -1.0 } else { 1.0 }
    }

    pub fn update(
        &mut self,
        dt: f32,
        platforms: &[Platform],
        projectiles: &mut Vec<Projectile>,
        rng: &mut dyn RandomSource,
    ) {
        if !self.alive {
            return;
        }

        self.action_timer += dt;
        self.body.apply_gravity();

        // Patrol: bounce off walls
        if self.body.step_horizontal(platforms) {
            self.body.vel.x = -self.body.vel.x;
        }

        let contact = self.body.step_vertical(platforms);
        self.on_ground = contact.landed_on.is_some();
        if let Some(index) = contact.landed_on {
            self.turn_at_edges(&platforms[index]);
        }

        self.check_stuck(dt);
        self.decide(rng);
        self.tick_dash(dt);
        self.maybe_hop(dt, rng);
        self.maybe_shoot(dt, projectiles, rng);
        self.clamp_to_screen();
    }

    /// Take one hit. No-op once dead.
    pub fn damage(&mut self) {
        if !self.alive {
            return;
        }
        self.hp = self.hp.saturating_sub(1);
        if self.hp == 0 {
            self.alive = false;
            log::info!("boss defeated");
        } else {
            log::debug!("boss hit, {}/{} hp left", self.hp, self.max_hp);
        }
    }

    fn turn_at_edges(&mut self, platform: &Platform) {
        let center = self.body.rect.centerx();
        if center <= platform.rect.left() + EDGE_MARGIN {
            self.body.vel.x = self.body.vel.x.abs();
        } else if center >= platform.rect.right() - EDGE_MARGIN {
            self.body.vel.x = -self.body.vel.x.abs();
        }
    }

    fn check_stuck(&mut self, dt: f32) {
        let x = self.body.rect.left();
        if (x - self.last_x).abs() < STUCK_EPSILON {
            self.stuck_timer += dt;
        } else {
            self.stuck_timer = 0.0;
        }
        self.last_x = x;

        if self.stuck_timer > STUCK_LIMIT {
            log::debug!("boss stuck at x={}, escaping", x);
            self.body.vel.y = -ESCAPE_JUMP;
            self.body.vel.x = -self.body.vel.x;
            self.stuck_timer = 0.0;
        }
    }

    fn decide(&mut self, rng: &mut dyn RandomSource) {
        if !self.on_ground || self.action_timer <= ACTION_INTERVAL {
            return;
        }
        self.action_timer = 0.0;
        if rng.chance(DASH_CHANCE) {
            log::debug!("boss dash");
            self.body.vel.x = DASH_SPEED * self.heading();
            self.dash_timer = DASH_DURATION;
        } else {
            log::debug!("boss high jump");
            self.body.vel.y = -HIGH_JUMP;
        }
    }

    fn tick_dash(&mut self, dt: f32) {
        if self.dash_timer > 0.0 {
            self.dash_timer -= dt;
            if self.dash_timer <= 0.0 {
                self.dash_timer = 0.0;
                self.body.vel.x = WALK_SPEED * self.heading();
            }
        }
    }

    fn maybe_hop(&mut self, dt: f32, rng: &mut dyn RandomSource) {
        self.jump_cooldown -= dt;
        if self.on_ground && self.jump_cooldown <= 0.0 && rng.chance(HOP_CHANCE) {
            self.body.vel.y = -HOP_JUMP;
            self.jump_cooldown = rng.uniform(HOP_COOLDOWN.0, HOP_COOLDOWN.1);
        }
    }

    fn maybe_shoot(&mut self, dt: f32, projectiles: &mut Vec<Projectile>, rng: &mut dyn RandomSource) {
        self.shoot_cooldown -= dt;
        if self.shoot_cooldown > 0.0 {
            return;
        }
        self.shoot_cooldown = rng.uniform(SHOOT_COOLDOWN.0, SHOOT_COOLDOWN.1);
        let lift = rng.uniform(PROJECTILE_LIFT.0, PROJECTILE_LIFT.1);
        let muzzle = self.body.rect.inflated(-90, -60).translated(-10, 40);
        let vel = Vec2::new(PROJECTILE_SPEED * self.facing(), lift);
        projectiles.push(Projectile::new(muzzle, vel, Tint::Accent));
    }

    fn clamp_to_screen(&mut self) {
        let rect = &mut self.body.rect;
        let vel = &mut self.body.vel;
        if rect.left() < 0 {
            rect.set_left(0);
            vel.x = vel.x.abs();
        }
        if rect.right() > WIDTH {
            rect.set_right(WIDTH);
            vel.x = -vel.x.abs();
        }
        if rect.top() < 0 {
            rect.set_top(0);
            if vel.y < 0.0 {
                vel.y = 0.0;
            }
        }
        if rect.bottom() > FLOOR_Y {
            rect.set_bottom(FLOOR_Y);
            if vel.y > 0.0 {
                vel.y = 0.0;
            }
        }
    }

    /// Sign of travel used for dash and its decay (strictly left when vx < 0)
    fn heading(&self) -> f32 {
        if self.body.vel.x < 0.0 { -1.0 } else { 1.0 }
    }
}
