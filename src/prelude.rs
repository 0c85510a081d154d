pub use crate::{
    animation::Animation,
    app::App,
    color::{Color, COLOR_KEY, WHITE},
    engine::{Engine, Phase},
    errors::Error,
    platform::{Platform, SDLPlatform},
    texture::{BlendMode, SpriteTexture},
    types::Rect,
};
pub use glam::{IVec2, UVec2};
