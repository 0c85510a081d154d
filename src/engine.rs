use std::path::{Path, PathBuf};

use crate::{
    animation::Animation, color::WHITE, errors::Error, platform::Platform,
    texture::SpriteTexture, types::Rect,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Setup,
    Running,
    Teardown,
}

/// Drives the card flip: owns the sheet, the clips and the frame counter.
pub struct Engine<P: Platform> {
    // The sheet is released before the platform goes away
    sheet: SpriteTexture,
    animation: Animation,
    // Ticks since the animation started
    frame: u32,
    // Set when the window asked to close, the animation still plays to the end
    quit_requested: bool,
    phase: Phase,
    sheet_path: PathBuf,
    swap_path: PathBuf,
    platform: P,
}

impl<P: Platform> Engine<P> {
    pub fn new<A: AsRef<Path>, B: AsRef<Path>>(platform: P, sheet_path: A, swap_path: B) -> Self {
        Self {
            sheet: SpriteTexture::new(),
            animation: Animation::card_flip(),
            frame: 0,
            quit_requested: false,
            phase: Phase::Setup,
            sheet_path: sheet_path.as_ref().to_owned(),
            swap_path: swap_path.as_ref().to_owned(),
            platform,
        }
    }

    /// Load the first sheet, the engine only runs if this succeeds
    pub fn setup(&mut self) -> Result<(), Error> {
        if let Err(err) = self.sheet.load(&mut self.platform, &self.sheet_path) {
            log::error!("Failed to load card animation texture: {err}");
            return Err(err);
        }
        self.animation = Animation::card_flip();
        self.frame = 0;
        self.phase = Phase::Running;
        log::info!("Loaded {}", self.sheet_path.display());
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running && self.frame < self.animation.total_ticks()
    }

    pub fn run(&mut self) {
        while self.is_running() {
            self.tick();
        }
        log::info!("Animation finished after {} ticks", self.frame);
    }

    /// One iteration of the render loop
    pub fn tick(&mut self) {
        if self.platform.pump_events() {
            self.quit_requested = true;
        }

        self.platform.clear(WHITE);
        if let Some(clip) = self.animation.clip(self.frame) {
            let pos = Rect::centered_pos(self.platform.screen_size(), clip.size);
            self.sheet.draw(&mut self.platform, pos, Some(clip));
        }
        self.platform.present();

        self.frame += 1;
        if self.frame == self.animation.swap_tick() {
            self.swap_sheet();
        }
    }

    // Clips are kept as they are, the new sheet is cut with the old rects
    fn swap_sheet(&mut self) {
        self.sheet.release();
        match self.sheet.load(&mut self.platform, &self.swap_path) {
            Ok(()) => log::info!("Swapped sheet to {}", self.swap_path.display()),
            Err(err) => log::error!("Failed to swap sheet: {err}"),
        }
    }

    /// Release the sheet and the platform resources, safe to call more than once
    pub fn teardown(&mut self) {
        if self.phase == Phase::Teardown {
            return;
        }
        self.sheet.release();
        self.platform.cleanup();
        self.phase = Phase::Teardown;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn sheet(&self) -> &SpriteTexture {
        &self.sheet
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}

impl<P: Platform> Drop for Engine<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}
