use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to load image {path}: {source}")]
    LoadImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path} has no pixels")]
    EmptyImage { path: PathBuf },
    #[error("unable to create texture from {path}: {reason}")]
    CreateTexture { path: PathBuf, reason: String },
}
