use std::path::Path;

use glam::UVec2;

use crate::{
    color::Color,
    errors::Error,
    handle::Handle,
    texture::BlendMode,
    types::Rect,
};

mod sdl;
#[cfg(test)]
pub(crate) mod stub;

pub use sdl::SDLPlatform;

pub trait Platform {
    /// Decode the image at `path`, apply `color_key` and create a texture.
    /// Returns the texture handle and its native pixel size.
    fn load_texture(&mut self, path: &Path, color_key: Color) -> Result<(Handle, UVec2), Error>;
    /// Destroy textures whose handles were dropped
    fn collect_dropped(&mut self);
    fn set_color_mod(&mut self, texture: &Handle, r: u8, g: u8, b: u8);
    fn set_blend_mode(&mut self, texture: &Handle, mode: BlendMode);
    fn set_alpha_mod(&mut self, texture: &Handle, alpha: u8);
    /// Copy `src` (or the whole texture) into `dst` on the render target
    fn draw(&mut self, texture: &Handle, src: Option<Rect>, dst: Rect);
    fn clear(&mut self, color: Color);
    fn present(&mut self);
    /// Drain pending input events, returns true if a quit was requested
    fn pump_events(&mut self) -> bool;
    fn screen_size(&self) -> UVec2;
    fn cleanup(&mut self);
}
