//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable iteration order (platform and projectile slices are never reordered)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod boss;
pub mod contact;
pub mod event;
pub mod platform;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod rng;
pub mod snapshot;
pub mod stage;
pub mod state;
pub mod tick;

pub use body::{Body, VerticalContact};
pub use boss::Boss;
pub use contact::{BossContact, Side, classify};
pub use event::{EventQueue, SimEvent};
pub use platform::{Axis, Oscillation, Platform};
pub use player::Player;
pub use projectile::Projectile;
pub use rect::Rect;
pub use rng::{RandomSource, ScriptedRng, pick};
pub use snapshot::{BossView, PlatformView, PlayerView, Snapshot};
pub use stage::{Stage, StageAdvance};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
