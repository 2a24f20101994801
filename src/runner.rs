//! Frame driver: turns variable wall-clock frames into fixed simulation ticks
//!
//! Frame time is clamped and accumulated; each frame runs as many `SIM_DT`
//! ticks as fit, up to a substep cap to avoid a spiral of death. One-shot
//! intents (jump, pause) are delivered to the first tick of a frame only.

use crate::consts::SIM_DT;
use crate::input::{ButtonState, InputLatch};
use crate::settings::Settings;
use crate::sim::{GameState, SimEvent, Snapshot, TickInput, tick};

/// Longest frame fed to the accumulator
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            max_substeps: max_substeps.max(1),
        }
    }

    /// Add a frame's time and return how many ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < self.max_substeps {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Fires once when a button has been held continuously for `threshold` seconds
#[derive(Debug, Clone, Copy)]
pub struct HoldTimer {
    threshold: f32,
    held: f32,
}

impl HoldTimer {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, held: 0.0 }
    }

    pub fn update(&mut self, pressed: bool, dt: f32) -> bool {
        if !pressed {
            self.held = 0.0;
            return false;
        }
        let already = self.held >= self.threshold;
        self.held += dt;
        !already && self.held >= self.threshold
    }

    pub fn held(&self) -> f32 {
        self.held
    }
}

/// What happened during one driver frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Ticks simulated
    pub steps: u32,
    /// Events from every tick of the frame, in order; drained from the state
    pub events: Vec<SimEvent>,
    /// Quit was held long enough
    pub quit: bool,
}

/// Owns the simulation and feeds it from held buttons
#[derive(Debug, Clone)]
pub struct Runner {
    state: GameState,
    latch: InputLatch,
    step: FixedStep,
    quit_hold: HoldTimer,
    /// Intents waiting for the next tick; one-shots survive frames that
    /// run zero ticks
    pending: TickInput,
}

impl Runner {
    pub fn new(settings: &Settings) -> Self {
        log::info!(
            "runner started: seed {}, {} fps, max {} substeps",
            settings.seed,
            settings.frame_rate,
            settings.max_substeps
        );
        Self {
            state: GameState::new(settings.seed),
            latch: InputLatch::new(),
            step: FixedStep::new(settings.max_substeps),
            quit_hold: HoldTimer::new(settings.quit_hold_secs),
            pending: TickInput::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Run one wall-clock frame
    pub fn frame(&mut self, buttons: ButtonState, frame_dt: f32) -> FrameReport {
        let quit = self.quit_hold.update(buttons.quit, frame_dt.max(0.0));

        let sampled = self.latch.sample(buttons);
        self.pending.move_axis = sampled.move_axis;
        self.pending.jump_pressed |= sampled.jump_pressed;
        self.pending.pause_toggled |= sampled.pause_toggled;

        let steps = self.step.advance(frame_dt);
        let mut events = Vec::new();
        for _ in 0..steps {
            tick(&mut self.state, &self.pending, SIM_DT);
            events.extend(self.state.events.drain());
            self.pending.jump_pressed = false;
            self.pending.pause_toggled = false;
        }

        if quit {
            log::info!("quit held for {:.1}s", self.quit_hold.held());
        }
        FrameReport { steps, events, quit }
    }

    /// Start the run over with the same seed
    pub fn reset(&mut self) {
        self.state.reset();
        self.latch.clear();
        self.step.reset();
        self.pending = TickInput::default();
    }
}
