use std::path::Path;

use glam::{IVec2, UVec2};

use crate::{
    color::COLOR_KEY, errors::Error, handle::Handle, platform::Platform, types::Rect,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    None,
    #[default]
    Blend,
    Add,
    Mod,
}

/// A loaded sprite sheet.
///
/// Either holds a texture together with its non-zero pixel size, or is empty
/// with a size of zero. Dropping the sheet releases its texture.
#[derive(Debug, Default)]
pub struct SpriteTexture {
    texture: Option<Handle>,
    size: UVec2,
}

impl SpriteTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the image at `path`, releasing the previous texture first.
    /// On error the sheet is left empty.
    pub fn load<P: Platform, Q: AsRef<Path>>(
        &mut self,
        platform: &mut P,
        path: Q,
    ) -> Result<(), Error> {
        self.release();
        platform.collect_dropped();

        let (texture, size) = platform.load_texture(path.as_ref(), COLOR_KEY)?;
        self.texture = Some(texture);
        self.size = size;
        Ok(())
    }

    /// Release the texture, safe to call on an empty sheet
    pub fn release(&mut self) {
        // dropping the handle queues the texture for destruction
        self.texture.take();
        self.size = UVec2::ZERO;
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn set_color<P: Platform>(&self, platform: &mut P, r: u8, g: u8, b: u8) {
        if let Some(texture) = &self.texture {
            platform.set_color_mod(texture, r, g, b);
        }
    }

    pub fn set_blend_mode<P: Platform>(&self, platform: &mut P, mode: BlendMode) {
        if let Some(texture) = &self.texture {
            platform.set_blend_mode(texture, mode);
        }
    }

    pub fn set_alpha<P: Platform>(&self, platform: &mut P, alpha: u8) {
        if let Some(texture) = &self.texture {
            platform.set_alpha_mod(texture, alpha);
        }
    }

    /// Draw at `pos`, sized to `clip` if given or to the whole sheet otherwise
    pub fn draw<P: Platform>(&self, platform: &mut P, pos: IVec2, clip: Option<&Rect>) {
        let Some(texture) = &self.texture else {
            return;
        };
        let size = clip.map_or(self.size, |clip| clip.size);
        let dst = Rect { pos, size };
        platform.draw(texture, clip.copied(), dst);
    }
}
