pub mod animation;
pub mod app;
pub mod color;
pub mod engine;
pub mod errors;
pub mod handle;
pub mod image;
pub mod platform;
pub mod prelude;
pub mod texture;
pub mod types;
