//! Fixed timestep simulation tick
//!
//! Advances the run deterministically. Order within a tick matters for
//! replay: the player resolves against last tick's platform positions before
//! the stage moves anything.

use super::event::SimEvent;
use super::stage::StageAdvance;
use super::state::{GamePhase, GameState};

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// -1 left, 0 idle, +1 right
    pub move_axis: i8,
    /// Jump button went down this tick
    pub jump_pressed: bool,
    /// Pause button went down this tick
    pub pause_toggled: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.pause_toggled {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.events.push(SimEvent::Paused);
                log::debug!("paused at tick {}", state.time_ticks);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.events.push(SimEvent::Resumed);
                log::debug!("resumed at tick {}", state.time_ticks);
            }
            GamePhase::GameOver | GamePhase::Won => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    let player = &mut state.player;
    player.control(input.move_axis);
    if input.jump_pressed {
        player.try_jump(&mut state.events);
    }
    player.update(dt, &state.stage.platforms, &mut state.events);

    state.stage.update(dt, &mut state.rng);
    state
        .stage
        .check_player_collisions(&mut state.player, &mut state.events);

    if state.stage.boss_defeated() {
        let cleared = state.stage.stage_index;
        state.events.push(SimEvent::StageCleared { stage: cleared });
        log::info!("stage {} cleared", cleared + 1);
        if state.stage.next_stage(&mut state.rng) == StageAdvance::Complete {
            state.events.push(SimEvent::RunWon);
            state.phase = GamePhase::Won;
            log::info!("run won after {} ticks", state.time_ticks);
        }
    }

    // Health is checked last and wins over a same-tick victory
    if state.player.health == 0 {
        state.events.push(SimEvent::GameOver);
        state.phase = GamePhase::GameOver;
        log::info!("game over on stage {}", state.stage.stage_index + 1);
    }

    log::trace!(
        "tick {} player={:?} distance={}",
        state.time_ticks,
        state.player.rect().pos,
        state.stage.distance_left
    );
}
