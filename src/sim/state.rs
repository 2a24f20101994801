//! Game state and run phases
//!
//! Everything needed to replay a run deterministically lives here: the seed,
//! the RNG stream derived from it, and the world.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::event::EventQueue;
use super::player::Player;
use super::snapshot::Snapshot;
use super::stage::Stage;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Frozen until the pause toggle is pressed again
    Paused,
    /// Health exhausted
    GameOver,
    /// Final boss defeated
    Won,
}

impl GamePhase {
    /// Run has ended; only `reset` leaves this phase
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// RNG seed the run was started with
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Player,
    pub stage: Stage,
    pub phase: GamePhase,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Events emitted by the most recent tick
    pub events: EventQueue,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stage = Stage::new(&mut rng);
        Self {
            seed,
            rng,
            player: Player::default(),
            stage,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: EventQueue::new(),
        }
    }

    /// Back to stage 0 at the start position replaying the same RNG stream
    pub fn reset(&mut self) {
        log::info!("run reset (seed {})", self.seed);
        *self = Self::new(self.seed);
    }

    /// Read-only view for presentation layers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
