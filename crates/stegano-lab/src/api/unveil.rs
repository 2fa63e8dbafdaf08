use image::RgbImage;

use crate::media::image::{reveal, reveal_image_at, reveal_text_with};
use crate::{CodecOptions, SteganoError};

pub fn prepare<'a>() -> UnveilApi<'a> {
    UnveilApi::default()
}

/// Builder for unveiling whatever is hidden in the low bits of an image
#[derive(Default, Debug)]
pub struct UnveilApi<'a> {
    secret_image: Option<&'a RgbImage>,
    options: CodecOptions,
}

impl<'a> UnveilApi<'a> {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the image that contains the data to be unveiled
    pub fn with_secret_image(mut self, secret_image: &'a RgbImage) -> Self {
        self.secret_image = Some(secret_image);
        self
    }

    /// Unveils a hidden text message
    pub fn text(self) -> Result<String, SteganoError> {
        let secret_image = self.secret_image()?;
        reveal_text_with(secret_image, &self.options)
    }

    /// Unveils the whole low bit plane as a visible image
    pub fn image(self) -> Result<RgbImage, SteganoError> {
        Ok(reveal(self.secret_image()?))
    }

    /// Unveils a `width x height` image hidden at (`row`, `col`)
    pub fn region(
        self,
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    ) -> Result<RgbImage, SteganoError> {
        reveal_image_at(self.secret_image()?, row, col, width, height)
    }

    fn secret_image(&self) -> Result<&'a RgbImage, SteganoError> {
        self.secret_image.ok_or(SteganoError::CarrierNotSet)
    }
}
