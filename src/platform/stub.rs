use std::path::{Path, PathBuf};

use glam::UVec2;
use hashbrown::HashMap;

use crate::{
    color::Color,
    errors::Error,
    handle::{Handle, HandleId, Handles},
    texture::BlendMode,
    types::Rect,
};

use super::Platform;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DrawCall {
    pub texture: HandleId,
    pub texture_size: UVec2,
    pub src: Option<Rect>,
    pub dst: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Modulation {
    Color { texture: HandleId, r: u8, g: u8, b: u8 },
    Blend { texture: HandleId, mode: BlendMode },
    Alpha { texture: HandleId, alpha: u8 },
}

/// Headless platform that tracks textures and records render calls
pub(crate) struct StubPlatform {
    handles: Handles,
    images: HashMap<PathBuf, UVec2>,
    textures: HashMap<HandleId, UVec2>,
    pub destroyed: usize,
    pub loads: Vec<PathBuf>,
    pub color_keys: Vec<Color>,
    pub modulations: Vec<Modulation>,
    pub draws: Vec<DrawCall>,
    pub clears: Vec<Color>,
    pub presents: usize,
    /// Emit a quit request on every pump
    pub quit_on_pump: bool,
    pub pumps: usize,
    pub cleanups: usize,
}

impl Default for StubPlatform {
    fn default() -> Self {
        Self {
            handles: Handles::default(),
            images: HashMap::new(),
            textures: HashMap::new(),
            destroyed: 0,
            loads: Vec::new(),
            color_keys: Vec::new(),
            modulations: Vec::new(),
            draws: Vec::new(),
            clears: Vec::new(),
            presents: 0,
            quit_on_pump: false,
            pumps: 0,
            cleanups: 0,
        }
    }
}

impl StubPlatform {
    /// Make `path` loadable with the given pixel size
    pub fn add_image<P: AsRef<Path>>(&mut self, path: P, size: UVec2) {
        self.images.insert(path.as_ref().to_owned(), size);
    }

    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }
}

impl Platform for StubPlatform {
    fn load_texture(&mut self, path: &Path, color_key: Color) -> Result<(Handle, UVec2), Error> {
        self.loads.push(path.to_owned());
        let Some(size) = self.images.get(path).copied() else {
            return Err(Error::CreateTexture {
                path: path.to_owned(),
                reason: "unknown image".to_string(),
            });
        };
        self.color_keys.push(color_key);
        let handle = self.handles.alloc();
        self.textures.insert(handle.id(), size);
        Ok((handle, size))
    }

    fn collect_dropped(&mut self) {
        let dropped: Vec<_> = self.handles.dropped().collect();
        for id in dropped {
            if self.textures.remove(&id).is_some() {
                self.destroyed += 1;
            }
        }
    }

    fn set_color_mod(&mut self, texture: &Handle, r: u8, g: u8, b: u8) {
        self.modulations.push(Modulation::Color {
            texture: texture.id(),
            r,
            g,
            b,
        });
    }

    fn set_blend_mode(&mut self, texture: &Handle, mode: BlendMode) {
        self.modulations.push(Modulation::Blend {
            texture: texture.id(),
            mode,
        });
    }

    fn set_alpha_mod(&mut self, texture: &Handle, alpha: u8) {
        self.modulations.push(Modulation::Alpha {
            texture: texture.id(),
            alpha,
        });
    }

    fn draw(&mut self, texture: &Handle, src: Option<Rect>, dst: Rect) {
        let texture_size = self.textures.get(&texture.id()).copied().unwrap_or_default();
        self.draws.push(DrawCall {
            texture: texture.id(),
            texture_size,
            src,
            dst,
        });
    }

    fn clear(&mut self, color: Color) {
        self.clears.push(color);
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn pump_events(&mut self) -> bool {
        self.pumps += 1;
        self.quit_on_pump
    }

    fn screen_size(&self) -> UVec2 {
        UVec2::new(640, 480)
    }

    fn cleanup(&mut self) {
        self.collect_dropped();
        self.destroyed += self.textures.len();
        self.textures.clear();
        self.cleanups += 1;
    }
}
