//! Jump & Smile - a side-scrolling jump-and-stomp action game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, boss AI, stage flow)
//! - `input`: Held-button to per-tick intent conversion
//! - `runner`: Fixed-step frame driver
//! - `settings`: Run configuration
//! - `theme`: Stage palettes and color tags

pub mod input;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod theme;

pub use input::{ButtonState, InputLatch};
pub use runner::{FrameReport, Runner};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Motion is frame-paced: speeds are pixels per tick and gravity is added
/// once per tick. Timers are in seconds and count down by the tick's `dt`.
pub mod consts {
    /// Visible area in pixels
    pub const WIDTH: i32 = 960;
    pub const HEIGHT: i32 = 540;

    /// Simulation rate
    pub const FPS: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward acceleration added to vy every tick
    pub const GRAVITY: f32 = 0.8;
    /// Upward speed set by a jump (not additive)
    pub const JUMP_POWER: f32 = 16.0;
    /// Horizontal walking speed of the player
    pub const PLAYER_SPEED: f32 = 5.0;
    /// World scroll per tick on the first stage
    pub const SCROLL_SPEED_BASE: i32 = 4;

    pub const TOTAL_STAGES: usize = 4;
    /// Scroll distance of one stage before the boss arena
    pub const STAGE_LENGTH_PX: i32 = 3600;

    /// How deep an actor may sink into a platform and still be snapped onto
    /// (or under) it
    pub const CONTACT_THRESHOLD: i32 = 30;
    /// Player bottom must be within this of the boss top for a stomp
    pub const STOMP_MARGIN: i32 = 18;
    /// Stomp rebound relative to a normal jump
    pub const STOMP_REBOUND: f32 = 1.05;

    pub const MAX_HEALTH: u8 = 3;
    pub const MAX_JUMPS: u32 = 2;
    /// Grace window after leaving the ground (seconds)
    pub const COYOTE_TIME: f32 = 0.12;
    /// Invincibility after taking a hit (seconds)
    pub const HIT_INVINCIBILITY: f32 = 1.2;
    /// Invincibility after a respawn (seconds)
    pub const RESPAWN_INVINCIBILITY: f32 = 1.8;
    /// Suspended float before gravity resumes after a respawn (seconds)
    pub const RESPAWN_FLOAT: f32 = 0.9;
    /// Respawn height above the last safe spot
    pub const RESPAWN_LIFT: i32 = 56;
    /// Falling past this top edge costs a life point and respawns
    pub const FALL_LIMIT: i32 = HEIGHT + 200;

    /// Ground strip top
    pub const GROUND_Y: i32 = HEIGHT - 80;
    pub const GROUND_HEIGHT: i32 = 80;

    /// Holding quit this long ends the run (seconds)
    pub const QUIT_HOLD_SECS: f32 = 1.2;
}
