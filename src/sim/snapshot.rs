//! Read-only view of the world after a tick, for renderers, audio and logs

use serde::{Deserialize, Serialize};

use super::event::SimEvent;
use super::rect::Rect;
use super::state::{GamePhase, GameState};
use crate::theme::{Rgb, Tint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub health: u8,
    pub invincible: bool,
    pub floating: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossView {
    pub rect: Rect,
    pub hp_ratio: f32,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    pub rect: Rect,
    pub tint: Tint,
    /// Tint resolved against the stage palette
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub stage_index: usize,
    /// Remaining scroll distance in [0, 1]
    pub distance_ratio: f32,
    pub arena: bool,
    pub player: PlayerView,
    /// Only while the boss is alive
    pub boss: Option<BossView>,
    pub platforms: Vec<PlatformView>,
    pub projectiles: Vec<Rect>,
    pub events: Vec<SimEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        let stage = &state.stage;
        let theme = stage.theme();
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            stage_index: stage.stage_index,
            distance_ratio: stage.distance_ratio(),
            arena: stage.arena,
            player: PlayerView {
                rect: *player.rect(),
                health: player.health,
                invincible: player.is_invincible(),
                floating: player.is_floating(),
            },
            boss: stage
                .boss
                .as_ref()
                .filter(|boss| boss.alive)
                .map(|boss| BossView {
                    rect: *boss.rect(),
                    hp_ratio: boss.hp_ratio(),
                    alive: boss.alive,
                }),
            platforms: stage
                .platforms
                .iter()
                .map(|p| PlatformView {
                    rect: p.rect,
                    tint: p.tint,
                    color: theme.color(p.tint),
                })
                .collect(),
            projectiles: stage
                .projectiles
                .iter()
                .filter(|p| p.in_play())
                .map(|p| p.rect)
                .collect(),
            events: state.events.as_slice().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::boss::Boss;

    #[test]
    fn test_capture_traversal() {
        let state = GameState::new(3);
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.distance_ratio, 1.0);
        assert!(!snap.arena);
        assert!(snap.boss.is_none());
        assert_eq!(snap.platforms.len(), state.stage.platforms.len());
        assert_eq!(snap.player.health, 3);
        let theme = state.stage.theme();
        assert_eq!(snap.platforms[0].color, theme.ground);
        assert_eq!(snap.platforms[8].color, theme.accent);
    }

    #[test]
    fn test_boss_view_hidden_when_dead() {
        let mut state = GameState::new(3);
        state.stage.enter_arena();
        let snap = state.snapshot();
        let view = snap.boss.expect("boss visible");
        assert_eq!(view.hp_ratio, 1.0);

        let mut boss = Boss::new(100, 100, 0);
        boss.hp = 1;
        boss.damage();
        state.stage.boss = Some(boss);
        assert!(state.snapshot().boss.is_none());
    }

    #[test]
    fn test_serializes_to_json() {
        let state = GameState::new(3);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["player"]["health"], 3);
        assert!(json["platforms"].as_array().is_some_and(|p| p.len() == 12));
    }
}
