use std::path::Path;

use anyhow::{anyhow, Result};
use glam::UVec2;
use hashbrown::HashMap;
use sdl2::{
    event::Event,
    pixels::PixelFormatEnum,
    render::{Canvas, Texture, TextureCreator},
    surface::Surface,
    video::{Window, WindowContext},
    EventPump, Sdl, VideoSubsystem,
};

use crate::{
    color::{Color, WHITE},
    errors::Error,
    handle::{Handle, HandleId, Handles},
    image,
    texture::BlendMode,
    types::Rect,
};

use super::Platform;

impl From<Color> for sdl2::pixels::Color {
    fn from(value: Color) -> Self {
        let Color { r, g, b, a } = value;
        Self::RGBA(r, g, b, a)
    }
}

impl From<Rect> for sdl2::rect::Rect {
    fn from(value: Rect) -> Self {
        sdl2::rect::Rect::new(value.pos.x, value.pos.y, value.size.x, value.size.y)
    }
}

impl From<BlendMode> for sdl2::render::BlendMode {
    fn from(value: BlendMode) -> Self {
        match value {
            BlendMode::None => Self::None,
            BlendMode::Blend => Self::Blend,
            BlendMode::Add => Self::Add,
            BlendMode::Mod => Self::Mod,
        }
    }
}

struct ScreenBuffer {
    pub(crate) texture_creator: TextureCreator<WindowContext>,
    pub(crate) canvas: Canvas<Window>,
}

impl ScreenBuffer {
    pub(crate) fn new(canvas: Canvas<Window>) -> Self {
        let texture_creator = canvas.texture_creator();
        Self {
            canvas,
            texture_creator,
        }
    }

    pub(crate) fn present(&mut self) {
        self.canvas.present();
    }

    pub(crate) fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }
}

/// SDL2 window with a vsynced accelerated renderer
pub struct SDLPlatform {
    handles: Handles,
    textures: HashMap<HandleId, Texture>,
    screen_buffer: ScreenBuffer,
    event_pump: EventPump,
    size: UVec2,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl SDLPlatform {
    pub fn new(title: &str, width: u32, height: u32, vsync: bool) -> Result<Self> {
        let sdl_ctx = sdl2::init().map_err(|err| anyhow!("SDL could not initialize: {err}"))?;
        let video_subsystem = sdl_ctx
            .video()
            .map_err(|err| anyhow!("SDL video could not initialize: {err}"))?;

        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "1") {
            log::warn!("Linear texture filtering not enabled");
        }

        let window = video_subsystem
            .window(title, width, height)
            .build()
            .map_err(|err| anyhow!("Window could not be created: {err}"))?;
        let screen_buffer = {
            let mut builder = window.into_canvas().accelerated();
            if vsync {
                builder = builder.present_vsync();
            }
            let mut canvas = builder
                .build()
                .map_err(|err| anyhow!("Renderer could not be created: {err}"))?;
            canvas.set_draw_color(WHITE);
            ScreenBuffer::new(canvas)
        };
        let event_pump = sdl_ctx.event_pump().map_err(|err| anyhow!(err))?;

        Ok(Self {
            handles: Handles::default(),
            textures: Default::default(),
            screen_buffer,
            event_pump,
            size: UVec2::new(width, height),
            _video: video_subsystem,
            _sdl: sdl_ctx,
        })
    }

    fn destroy_texture(&mut self, id: HandleId) {
        if let Some(texture) = self.textures.remove(&id) {
            // SAFETY: the renderer owning the texture is still alive
            unsafe { texture.destroy() };
        }
    }
}

impl Platform for SDLPlatform {
    fn load_texture(&mut self, path: &Path, color_key: Color) -> Result<(Handle, UVec2), Error> {
        let create_err = |reason: String| Error::CreateTexture {
            path: path.to_owned(),
            reason,
        };

        let mut im = image::decode(path)?;
        let (pitch, size) = (im.pitch(), im.size);
        let mut surface =
            Surface::from_data(&mut im.data, size.x, size.y, pitch, PixelFormatEnum::RGBA32)
                .map_err(create_err)?;
        surface
            .set_color_key(true, color_key.into())
            .map_err(create_err)?;
        let texture = self
            .screen_buffer
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|err| create_err(err.to_string()))?;

        let handle = self.handles.alloc();
        self.textures.insert(handle.id(), texture);
        Ok((handle, size))
    }

    fn collect_dropped(&mut self) {
        let dropped: Vec<_> = self.handles.dropped().collect();
        for id in dropped {
            self.destroy_texture(id);
        }
    }

    fn set_color_mod(&mut self, texture: &Handle, r: u8, g: u8, b: u8) {
        if let Some(texture) = self.textures.get_mut(&texture.id()) {
            texture.set_color_mod(r, g, b);
        }
    }

    fn set_blend_mode(&mut self, texture: &Handle, mode: BlendMode) {
        if let Some(texture) = self.textures.get_mut(&texture.id()) {
            texture.set_blend_mode(mode.into());
        }
    }

    fn set_alpha_mod(&mut self, texture: &Handle, alpha: u8) {
        if let Some(texture) = self.textures.get_mut(&texture.id()) {
            texture.set_alpha_mod(alpha);
        }
    }

    fn draw(&mut self, handle: &Handle, src: Option<Rect>, dst: Rect) {
        let Some(texture) = self.textures.get(&handle.id()) else {
            log::debug!("Failed to get texture {}", handle.id());
            return;
        };

        let src: Option<sdl2::rect::Rect> = src.map(Into::into);
        let dst: sdl2::rect::Rect = dst.into();
        if let Err(err) = self.screen_buffer.canvas.copy(texture, src, dst) {
            log::debug!("SDL draw {err}");
        }
    }

    fn clear(&mut self, color: Color) {
        self.screen_buffer.clear(color);
    }

    fn present(&mut self) {
        self.screen_buffer.present();
    }

    fn pump_events(&mut self) -> bool {
        let mut quit = false;
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                quit = true;
            }
        }
        quit
    }

    fn screen_size(&self) -> UVec2 {
        self.size
    }

    fn cleanup(&mut self) {
        self.collect_dropped();
        let ids: Vec<_> = self.textures.keys().copied().collect();
        for id in ids {
            self.destroy_texture(id);
        }
    }
}

impl Drop for SDLPlatform {
    fn drop(&mut self) {
        self.cleanup();
    }
}
