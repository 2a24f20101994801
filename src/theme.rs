//! Stage palettes
//!
//! The simulation only carries color *tags*; renderers resolve them against
//! the theme of the current stage.

use serde::{Deserialize, Serialize};

use crate::consts::TOTAL_STAGES;

/// RGB triple
pub type Rgb = [u8; 3];

pub const BLUE: Rgb = [120, 180, 255];
pub const ORANGE: Rgb = [255, 180, 140];
pub const PURPLE: Rgb = [170, 140, 255];
pub const MINT: Rgb = [170, 255, 220];

/// Which palette slot an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    Ground,
    Accent,
}

/// Colors for one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub bg1: Rgb,
    pub bg2: Rgb,
    pub ground: Rgb,
    pub accent: Rgb,
}

impl Theme {
    pub fn color(&self, tint: Tint) -> Rgb {
        match tint {
            Tint::Ground => self.ground,
            Tint::Accent => self.accent,
        }
    }
}

pub const STAGE_THEMES: [Theme; TOTAL_STAGES] = [
    Theme {
        bg1: [240, 248, 255],
        bg2: [220, 235, 255],
        ground: [180, 220, 180],
        accent: BLUE,
    },
    Theme {
        bg1: [255, 245, 240],
        bg2: [255, 235, 225],
        ground: [220, 200, 160],
        accent: ORANGE,
    },
    Theme {
        bg1: [245, 245, 255],
        bg2: [235, 235, 255],
        ground: [190, 210, 240],
        accent: PURPLE,
    },
    Theme {
        bg1: [245, 255, 245],
        bg2: [230, 255, 240],
        ground: [160, 220, 200],
        accent: MINT,
    },
];

/// Theme for a stage index, clamped so a finished run still has a palette
pub fn theme_for(stage_index: usize) -> &'static Theme {
    &STAGE_THEMES[stage_index.min(TOTAL_STAGES - 1)]
}
