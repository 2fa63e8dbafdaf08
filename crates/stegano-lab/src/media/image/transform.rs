//! Whole image operations on the low bit plane.
//!
//! Every operation borrows its input and returns a new image of the same dimensions.

use image::{Pixel, Rgb, RgbImage};

use crate::media::{
    amplify_low_bits, clear_low_bits, derive_low_from_color, extract_low_bits, HidePair,
    MediaPrimitiveMut,
};

/// copies `image` and applies `f` to every pixel of the copy
pub(crate) fn map_pixels<F>(image: &RgbImage, f: F) -> RgbImage
where
    F: FnMut(&mut Rgb<u8>),
{
    let mut copy = image.clone();
    copy.pixels_mut().for_each(f);
    copy
}

/// Zeroes the low bits of every color channel.
pub fn clear_low(image: &RgbImage) -> RgbImage {
    map_pixels(image, |p| p.apply(clear_low_bits))
}

/// Stores the quantized `color` in the low bits of every pixel.
///
/// This hides a single plain color, handy to see what the low bit plane can do.
pub fn set_low(image: &RgbImage, color: Rgb<u8>) -> RgbImage {
    map_pixels(image, |p| {
        for (channel, source) in p.channels_mut().iter_mut().zip(color.channels()) {
            MediaPrimitiveMut::from(channel).hide_pair(derive_low_from_color(*source));
        }
    })
}

/// Makes the low bit plane visible by scaling it up to the full channel range.
pub fn reveal(image: &RgbImage) -> RgbImage {
    map_pixels(image, |p| p.apply(|c| amplify_low_bits(extract_low_bits(c))))
}

/// Shifts colors towards red: red is raised and green lowered by `offset`, both clamped.
pub fn creative_effect(image: &RgbImage, offset: u8) -> RgbImage {
    map_pixels(image, |p| {
        let [red, green, blue] = p.0;
        *p = Rgb([red.saturating_add(offset), green.saturating_sub(offset), blue]);
    })
}

/// number of symbols a text message can occupy in `image`, the terminator included
pub fn capacity(image: &RgbImage) -> usize {
    image.width() as usize * image.height() as usize
}
