use std::path::Path;

use glam::UVec2;

use crate::errors::Error;

/// Decoded RGBA8 pixels
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub size: UVec2,
}

impl DecodedImage {
    /// Bytes per row
    pub fn pitch(&self) -> u32 {
        self.size.x * 4
    }
}

/// Decode the image at `path`, the format is guessed from the extension first
pub fn decode<P: AsRef<Path>>(path: P) -> Result<DecodedImage, Error> {
    let path = path.as_ref();
    let im = image::open(path).map_err(|source| Error::LoadImage {
        path: path.to_owned(),
        source,
    })?;
    let size = UVec2::new(im.width(), im.height());
    if size.x == 0 || size.y == 0 {
        return Err(Error::EmptyImage {
            path: path.to_owned(),
        });
    }
    let data = im.into_rgba8().into_raw();
    Ok(DecodedImage { data, size })
}
