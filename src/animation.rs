use crate::types::Rect;

/// Number of frames in the card flip
pub const CARD_FLIP_FRAMES: usize = 16;
/// Ticks each frame stays on screen
pub const TICKS_PER_FRAME: u32 = 3;
/// Ticks per frame used to decide when the sheet is swapped
pub const SWAP_TICKS_PER_FRAME: u32 = 2;

const CLIP_WIDTH: u32 = 248;
const CLIP_STEP: u32 = 31;
const CLIP_HEIGHT: u32 = 350;

const fn clip(step: u32) -> Rect {
    Rect::new(0, 0, CLIP_WIDTH - CLIP_STEP * step, CLIP_HEIGHT)
}

// The clip narrows to the card's edge, holds for two frames, then widens back
const CARD_FLIP: [Rect; CARD_FLIP_FRAMES] = [
    clip(0),
    clip(1),
    clip(2),
    clip(3),
    clip(4),
    clip(5),
    clip(6),
    clip(7),
    clip(7),
    clip(6),
    clip(5),
    clip(4),
    clip(3),
    clip(2),
    clip(1),
    clip(0),
];

/// Fixed sequence of clip regions over a single sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    clips: [Rect; CARD_FLIP_FRAMES],
}

impl Default for Animation {
    fn default() -> Self {
        Self::card_flip()
    }
}

impl Animation {
    pub fn card_flip() -> Self {
        Self { clips: CARD_FLIP }
    }

    pub fn clips(&self) -> &[Rect] {
        &self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Frame shown at `tick`
    pub fn frame_index(tick: u32) -> usize {
        (tick / TICKS_PER_FRAME) as usize
    }

    /// Clip shown at `tick`, `None` once the animation is over
    pub fn clip(&self, tick: u32) -> Option<&Rect> {
        self.clips.get(Self::frame_index(tick))
    }

    /// Ticks until the animation is over
    pub fn total_ticks(&self) -> u32 {
        self.len() as u32 * TICKS_PER_FRAME
    }

    /// Tick at which the sheet gets replaced
    pub fn swap_tick(&self) -> u32 {
        self.len() as u32 * SWAP_TICKS_PER_FRAME
    }
}
