use std::path::PathBuf;

use anyhow::{Context, Result};
use glam::UVec2;

use crate::{engine::Engine, platform::SDLPlatform};

#[derive(Debug)]
pub struct App {
    pub title: String,
    pub window: UVec2,
    pub vsync: bool,
    /// Sheet shown when the animation starts
    pub sheet: PathBuf,
    /// Sheet that replaces the first one partway through
    pub swap_sheet: PathBuf,
}

impl Default for App {
    fn default() -> Self {
        Self {
            title: "Card Flip".to_string(),
            window: UVec2::new(640, 480),
            vsync: true,
            sheet: PathBuf::from("assets/back_of_the_card.png"),
            swap_sheet: PathBuf::from("assets/test2.png"),
        }
    }
}

impl App {
    pub fn title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    pub fn window(mut self, window: UVec2) -> Self {
        self.window = window;
        self
    }

    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn sheet(mut self, sheet: PathBuf) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn swap_sheet(mut self, swap_sheet: PathBuf) -> Self {
        self.swap_sheet = swap_sheet;
        self
    }

    /// Open the window and play the animation once
    pub fn run(self) -> Result<()> {
        let App {
            title,
            window: UVec2 {
                x: width,
                y: height,
            },
            vsync,
            sheet,
            swap_sheet,
        } = self;
        let platform =
            SDLPlatform::new(&title, width, height, vsync).context("Failed to initialize")?;
        let mut engine = Engine::new(platform, sheet, swap_sheet);
        let result = engine.setup().context("Failed to load media");
        if result.is_ok() {
            engine.run();
        }
        engine.teardown();
        result
    }
}
