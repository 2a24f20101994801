//! Stage orchestration: world scroll, procedural platforms, boss arena and
//! player-vs-world contacts

use super::boss::{BOSS_HEIGHT, Boss, STOMP_NUDGE};
use super::contact::{BossContact, Side, classify};
use super::event::{EventQueue, SimEvent};
use super::platform::{Axis, Oscillation, Platform};
use super::player::Player;
use super::projectile::Projectile;
use super::rect::Rect;
use super::rng::{RandomSource, pick};
use crate::consts::*;
use crate::theme::{Theme, Tint, theme_for};

/// New platforms appear this far right of the screen (plus a random gap)
pub const SPAWN_X: i32 = WIDTH + 200;
/// Platforms whose right edge is left of this are dropped
pub const PRUNE_X: i32 = -300;
/// Spawning stops once the remaining distance is at or below this
pub const SPAWN_HALT_DISTANCE: i32 = 600;

const SPAWN_INTERVAL: (f32, f32) = (0.6, 1.0);
const SPAWN_GAP: (i32, i32) = (60, 180);
const SPAWN_WIDTHS: [i32; 3] = [120, 160, 200];
const SPAWN_HEIGHTS: [i32; 4] = [100, 140, 180, 220];
const LEDGE_THICKNESS: i32 = 20;
const OSCILLATION_RANGE: f32 = 40.0;
const OPENING_SWING_SPEED: f32 = 0.08;
const SPAWN_SWING_SPEED: f32 = 0.06;
const VERTICAL_CHANCE: f32 = 0.2;

/// What happened when a defeated boss was cleared away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAdvance {
    /// Next stage started at this index
    Next(usize),
    /// Every stage is cleared
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub stage_index: usize,
    /// Scroll distance until the boss arena
    pub distance_left: i32,
    /// World scroll per tick
    pub scroll_speed: i32,
    pub platforms: Vec<Platform>,
    pub projectiles: Vec<Projectile>,
    /// Present only in the arena phase
    pub boss: Option<Boss>,
    pub arena: bool,
    pub spawn_timer: f32,
}

impl Stage {
    /// First stage with its opening layout
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let mut stage = Self {
            stage_index: 0,
            distance_left: STAGE_LENGTH_PX,
            scroll_speed: SCROLL_SPEED_BASE,
            platforms: Vec::new(),
            projectiles: Vec::new(),
            boss: None,
            arena: false,
            spawn_timer: 0.0,
        };
        stage.build_opening(rng);
        log::info!("stage 1/{} started", TOTAL_STAGES);
        stage
    }

    pub fn theme(&self) -> &'static Theme {
        theme_for(self.stage_index)
    }

    /// Remaining distance as a fraction of the stage length
    pub fn distance_ratio(&self) -> f32 {
        (self.distance_left as f32 / STAGE_LENGTH_PX as f32).clamp(0.0, 1.0)
    }

    /// A boss exists and has been defeated
    pub fn boss_defeated(&self) -> bool {
        self.boss.as_ref().is_some_and(|boss| !boss.alive)
    }

    /// Ground run plus a few floating ledges
    fn build_opening(&mut self, rng: &mut dyn RandomSource) {
        self.platforms.clear();
        for i in 0..8 {
            self.platforms.push(Platform::solid(
                Rect::new(i * 300, GROUND_Y, 320, GROUND_HEIGHT),
                Tint::Ground,
            ));
        }
        for i in 0..4 {
            let x = 350 + i * 450;
            let y = GROUND_Y - pick(rng, &[120, 160, 200]);
            let w = pick(rng, &[120, 160]);
            let rect = Rect::new(x, y, w, LEDGE_THICKNESS);
            let platform = if rng.chance(0.3) {
                Platform::oscillating(
                    rect,
                    Tint::Accent,
                    Oscillation::new(OSCILLATION_RANGE, OPENING_SWING_SPEED, Axis::Horizontal),
                )
            } else {
                Platform::solid(rect, Tint::Accent)
            };
            self.platforms.push(platform);
        }
    }

    /// Advance one tick: scroll, platform motion, spawning, arena entry,
    /// boss and projectiles
    pub fn update(&mut self, dt: f32, rng: &mut dyn RandomSource) {
        if !self.arena {
            self.distance_left = (self.distance_left - self.scroll_speed).max(0);
        }

        for platform in &mut self.platforms {
            platform.advance();
            if !self.arena {
                platform.scroll(self.scroll_speed);
            }
        }
        self.platforms.retain(|p| p.rect.right() > PRUNE_X);

        self.spawn_platforms(dt, rng);

        if !self.arena && self.distance_left <= 0 && self.boss.is_none() {
            self.enter_arena();
        }
        if let Some(boss) = self.boss.as_mut() {
            boss.update(dt, &self.platforms, &mut self.projectiles, rng);
        }

        for projectile in &mut self.projectiles {
            projectile.update();
        }
        self.projectiles.retain(Projectile::in_play);
    }

    /// Randomized ledge generation ahead of the camera
    pub fn spawn_platforms(&mut self, dt: f32, rng: &mut dyn RandomSource) {
        if self.arena {
            return;
        }
        self.spawn_timer -= dt;
        if self.spawn_timer > 0.0 || self.distance_left <= SPAWN_HALT_DISTANCE {
            return;
        }
        self.spawn_timer = rng.uniform(SPAWN_INTERVAL.0, SPAWN_INTERVAL.1);
        let gap = rng.int_inclusive(SPAWN_GAP.0, SPAWN_GAP.1);
        let w = pick(rng, &SPAWN_WIDTHS);
        let y = GROUND_Y - pick(rng, &SPAWN_HEIGHTS);
        let moving_chance = 0.2 + 0.05 * self.stage_index as f32;
        let rect = Rect::new(SPAWN_X + gap, y, w, LEDGE_THICKNESS);

        let platform = if rng.chance(moving_chance) {
            let axis = if rng.chance(VERTICAL_CHANCE) {
                Axis::Vertical
            } else {
                Axis::Horizontal
            };
            Platform::oscillating(
                rect,
                Tint::Accent,
                Oscillation::new(OSCILLATION_RANGE, SPAWN_SWING_SPEED, axis),
            )
        } else {
            Platform::solid(rect, Tint::Accent)
        };
        log::trace!(
            "spawned ledge x={} y={} w={} moving={}",
            rect.left(),
            y,
            w,
            platform.is_moving()
        );
        self.platforms.push(platform);
    }

    /// Stop scrolling, flatten the floor and bring in the boss
    pub fn enter_arena(&mut self) {
        self.arena = true;
        self.projectiles.clear();
        self.platforms = vec![Platform::solid(
            Rect::new(0, GROUND_Y, WIDTH, GROUND_HEIGHT),
            Tint::Ground,
        )];
        let boss = Boss::new(WIDTH - 140, GROUND_Y - BOSS_HEIGHT, self.stage_index);
        log::info!(
            "stage {} boss arena entered ({} hp)",
            self.stage_index + 1,
            boss.max_hp
        );
        self.boss = Some(boss);
    }

    /// Move on after a boss defeat
    pub fn next_stage(&mut self, rng: &mut dyn RandomSource) -> StageAdvance {
        self.stage_index += 1;
        if self.stage_index >= TOTAL_STAGES {
            log::info!("all {} stages cleared", TOTAL_STAGES);
            return StageAdvance::Complete;
        }
        self.distance_left = STAGE_LENGTH_PX;
        self.scroll_speed = SCROLL_SPEED_BASE + self.stage_index as i32;
        self.projectiles.clear();
        self.boss = None;
        self.arena = false;
        self.build_opening(rng);
        log::info!(
            "stage {}/{} started, scroll speed {}",
            self.stage_index + 1,
            TOTAL_STAGES,
            self.scroll_speed
        );
        StageAdvance::Next(self.stage_index)
    }

    /// Resolve the player against projectiles and the boss
    pub fn check_player_collisions(&mut self, player: &mut Player, events: &mut EventQueue) {
        for projectile in &mut self.projectiles {
            if player.rect().overlaps(&projectile.rect) {
                player.take_damage(events);
                projectile.retire();
            }
        }

        let Some(boss) = self.boss.as_mut().filter(|boss| boss.alive) else {
            return;
        };
        let boss_rect = *boss.rect();
        let Some(contact) = classify(player.rect(), player.body.vel.y, &boss_rect) else {
            return;
        };

        let body = &mut player.body;
        match contact {
            BossContact::Stomp => {
                body.rect.set_bottom(boss_rect.top());
                body.vel.y = -JUMP_POWER * STOMP_REBOUND;
                player.jumps_remaining = player.max_jumps - 1;
                boss.body.vel.y = boss.body.vel.y.max(STOMP_NUDGE);
                boss.damage();
                events.push(SimEvent::Stomped);
            }
            BossContact::Push(Side::Left) => body.rect.set_right(boss_rect.left()),
            BossContact::Push(Side::Right) => body.rect.set_left(boss_rect.right()),
            BossContact::Push(Side::Bottom) => {
                body.rect.set_top(boss_rect.bottom());
                body.vel.y = body.vel.y.max(0.0);
            }
            BossContact::Push(Side::Top) => {
                body.rect.set_bottom(boss_rect.top());
                body.vel.y = body.vel.y.min(0.0);
            }
        }
    }
}
