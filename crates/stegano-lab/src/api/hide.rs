use image::RgbImage;

use crate::media::image::{hide_image_at, hide_text_with};
use crate::{CodecOptions, SteganoError};

pub fn prepare<'a>() -> HideApi<'a> {
    HideApi::default()
}

/// Builder for hiding either a text message or an image in a carrier image
#[derive(Default, Debug)]
pub struct HideApi<'a> {
    carrier: Option<&'a RgbImage>,
    message: Option<String>,
    image: Option<&'a RgbImage>,
    row: u32,
    col: u32,
    options: CodecOptions,
}

impl<'a> HideApi<'a> {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The image the secret is hidden in, it is not modified
    pub fn with_carrier(mut self, carrier: &'a RgbImage) -> Self {
        self.carrier = Some(carrier);
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image(mut self, image: &'a RgbImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Places a secret image with its top left pixel at (`row`, `col`) of the carrier.
    /// Text messages always start at the top left pixel, for them this has no effect.
    pub fn at(mut self, row: u32, col: u32) -> Self {
        self.row = row;
        self.col = col;
        self
    }

    pub fn execute(self) -> Result<RgbImage, SteganoError> {
        let Some(carrier) = self.carrier else {
            return Err(SteganoError::CarrierNotSet);
        };

        match (self.message, self.image) {
            (Some(message), None) => hide_text_with(carrier, &message, &self.options),
            (None, Some(image)) => hide_image_at(carrier, image, self.row, self.col),
            (None, None) => Err(SteganoError::MissingSecret),
            (Some(_), Some(_)) => Err(SteganoError::AmbiguousSecret),
        }
    }
}
