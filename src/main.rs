//! Jump & Smile - headless entry point
//!
//! Drives the simulation with a simple autopilot and prints the final state.
//! Usage: `jump-smile [settings.json]`; verbosity via `RUST_LOG`.

use std::path::PathBuf;

use jump_smile::consts::TOTAL_STAGES;
use jump_smile::sim::{GameState, SimEvent};
use jump_smile::{ButtonState, Runner, Settings};

/// Player x the autopilot tries to hold during traversal
const CRUISE_X: i32 = 320;
/// Frames between jumps while cruising
const CRUISE_JUMP_EVERY: u32 = 45;
/// Horizontal distance to the boss at which the autopilot goes for a stomp
const STOMP_RANGE: i32 = 140;

/// Scripted buttons standing in for a human player
#[derive(Debug, Default)]
struct Autopilot {
    frame: u32,
    jump_held: bool,
}

impl Autopilot {
    fn buttons(&mut self, state: &GameState) -> ButtonState {
        self.frame += 1;
        let player = state.player.rect();
        let mut buttons = ButtonState::default();

        let want_jump = match state.stage.boss.as_ref().filter(|boss| boss.alive) {
            Some(boss) => {
                let dx = boss.rect().centerx() - player.centerx();
                buttons.right = dx > 0;
                buttons.left = dx < 0;
                dx.abs() < STOMP_RANGE && state.player.coyote_timer > 0.0
            }
            None => {
                buttons.right = player.left() < CRUISE_X;
                buttons.left = player.left() > CRUISE_X + 40;
                self.frame % CRUISE_JUMP_EVERY == 0
            }
        };

        // Release between presses so every jump is a fresh edge
        buttons.jump = want_jump && !self.jump_held;
        self.jump_held = buttons.jump;
        buttons
    }
}

fn main() {
    env_logger::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());
    log::info!("Jump & Smile (headless) starting, seed {}", settings.seed);

    let mut runner = Runner::new(&settings);
    let mut pilot = Autopilot::default();
    let frame_dt = settings.frame_dt();

    for frame in 0..settings.demo_frames {
        let buttons = pilot.buttons(runner.state());
        let report = runner.frame(buttons, frame_dt);
        for event in &report.events {
            match event {
                SimEvent::Jumped => log::debug!("frame {frame}: {event:?}"),
                _ => log::info!("frame {frame}: {event:?}"),
            }
        }
        if report.quit || runner.state().phase.is_terminal() {
            break;
        }
    }

    let state = runner.state();
    log::info!(
        "finished: {:?} on stage {} after {} ticks, health {}",
        state.phase,
        (state.stage.stage_index + 1).min(TOTAL_STAGES),
        state.time_ticks,
        state.player.health
    );

    if settings.print_snapshot {
        match serde_json::to_string_pretty(&runner.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("Failed to serialize snapshot: {err}"),
        }
    }
}
