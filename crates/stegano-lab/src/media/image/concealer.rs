//! Hiding and unveiling of secret images and text messages in the low bit plane of a carrier.
//!
//! Images are hidden channel by channel, every secret channel is quantized to two bits.
//! Text messages are hidden one symbol per pixel in row-major order, the three base-4 digits
//! of a symbol are stored as `d2 -> red`, `d1 -> green`, `d0 -> blue`.

use image::{imageops, Pixel, RgbImage};
use log::{debug, error, warn};

use super::iterators::{RegionMut, SymbolIter};
use super::transform::{capacity, reveal};
use crate::media::{bit_pairs, derive_low_from_color, CodecOptions, HidePair, MediaPrimitiveMut};
use crate::result::Result;
use crate::symbols::SymbolCodec;
use crate::SteganoError;

/// true if `secret` fits into `carrier` in both dimensions
pub fn can_hide(carrier: &RgbImage, secret: &RgbImage) -> bool {
    secret.width() <= carrier.width() && secret.height() <= carrier.height()
}

/// Hides `secret` in the top left corner of `carrier`.
pub fn hide_image(carrier: &RgbImage, secret: &RgbImage) -> Result<RgbImage> {
    hide_image_at(carrier, secret, 0, 0)
}

/// Hides `secret` with its top left pixel at (`row`, `col`) of `carrier`.
///
/// Only the covered region is modified. Fails before anything is copied if the secret is
/// bigger than the carrier or the offset moves it (partially) outside.
///
/// ```rust
/// use image::{Rgb, RgbImage};
/// use stegano_lab::media::image::hide_image_at;
///
/// let carrier = RgbImage::new(4, 4);
/// let secret = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
///
/// let hidden = hide_image_at(&carrier, &secret, 1, 1).expect("secret fits");
/// assert_eq!(hidden.get_pixel(1, 1), &Rgb([3, 3, 3]));
/// assert_eq!(hidden.get_pixel(0, 0), &Rgb([0, 0, 0]));
/// ```
pub fn hide_image_at(
    carrier: &RgbImage,
    secret: &RgbImage,
    row: u32,
    col: u32,
) -> Result<RgbImage> {
    if !can_hide(carrier, secret) {
        error!(
            "Secret image {:?} does not fit into carrier {:?}",
            secret.dimensions(),
            carrier.dimensions()
        );
        return Err(SteganoError::SizeIncompatible {
            secret_width: secret.width(),
            secret_height: secret.height(),
            carrier_width: carrier.width(),
            carrier_height: carrier.height(),
        });
    }
    let (width, height) = secret.dimensions();
    ensure_region(carrier, row, col, width, height)?;
    debug!("hiding a {width}x{height} image at row {row}, column {col}");

    let mut combined = carrier.clone();
    let region = RegionMut::from_rows_mut(combined.rows_mut(), row, col, width, height);
    for (target, source) in region.zip(secret.pixels()) {
        for (channel, color) in target.channels_mut().iter_mut().zip(source.channels()) {
            MediaPrimitiveMut::from(channel).hide_pair(derive_low_from_color(*color));
        }
    }

    Ok(combined)
}

/// Unveils a `width x height` secret image hidden in the top left corner.
pub fn reveal_image(image: &RgbImage, width: u32, height: u32) -> Result<RgbImage> {
    reveal_image_at(image, 0, 0, width, height)
}

/// Unveils a `width x height` secret image hidden at (`row`, `col`), as a stand alone image.
///
/// The channels come back quantized to the four levels `0, 64, 128, 192`.
pub fn reveal_image_at(
    image: &RgbImage,
    row: u32,
    col: u32,
    width: u32,
    height: u32,
) -> Result<RgbImage> {
    ensure_region(image, row, col, width, height)?;
    debug!("unveiling a {width}x{height} image at row {row}, column {col}");

    let region = imageops::crop_imm(image, col, row, width, height).to_image();

    Ok(reveal(&region))
}

/// Hides `text` with the default [`CodecOptions`].
pub fn hide_text(carrier: &RgbImage, text: &str) -> Result<RgbImage> {
    hide_text_with(carrier, text, &CodecOptions::default())
}

/// Hides `text` one symbol per pixel, row by row, starting at the top left pixel.
///
/// Pixels after the terminator stay untouched. A message that needs more pixels than the
/// carrier has is rejected as a whole, nothing gets truncated.
pub fn hide_text_with(carrier: &RgbImage, text: &str, opts: &CodecOptions) -> Result<RgbImage> {
    let codes = SymbolCodec::new(opts.symbol_policy).encode(text)?;
    let available = capacity(carrier);
    if codes.len() > available {
        error!(
            "Message of {} symbols does not fit into a carrier of {available} pixels",
            codes.len()
        );
        return Err(SteganoError::PayloadTooLarge {
            required: codes.len(),
            available,
        });
    }
    debug!("hiding {} symbols in {available} pixels", codes.len());

    let mut copy = carrier.clone();
    for (pixel, code) in copy.pixels_mut().zip(codes) {
        let [d0, d1, d2] = bit_pairs(code);
        let [red, green, blue] = &mut pixel.0;
        MediaPrimitiveMut::from(red).hide_pair(d2);
        MediaPrimitiveMut::from(green).hide_pair(d1);
        MediaPrimitiveMut::from(blue).hide_pair(d0);
    }

    Ok(copy)
}

/// Unveils a text message with the default [`CodecOptions`].
pub fn reveal_text(image: &RgbImage) -> Result<String> {
    reveal_text_with(image, &CodecOptions::default())
}

/// Unveils a text message, reading one symbol per pixel until the first terminator.
///
/// An image without terminator is read completely and whatever was collected gets decoded,
/// for an image that never carried a message this is garbage. With [`SymbolPolicy::Skip`]
/// that garbage is filtered down to letters and spaces, with [`SymbolPolicy::Reject`] the
/// first unknown code fails the unveil.
///
/// [`SymbolPolicy::Skip`]: crate::media::SymbolPolicy::Skip
/// [`SymbolPolicy::Reject`]: crate::media::SymbolPolicy::Reject
pub fn reveal_text_with(image: &RgbImage, opts: &CodecOptions) -> Result<String> {
    let mut symbols = SymbolIter::from_pixels(image.pixels());
    let codes: Vec<u8> = symbols.by_ref().collect();
    if !symbols.is_terminated() {
        warn!(
            "No terminator found in {} pixels, the image carries no or a corrupted message",
            codes.len()
        );
    }
    debug!("unveiled {} symbols", codes.len());

    SymbolCodec::new(opts.symbol_policy).decode(&codes)
}

fn ensure_region(image: &RgbImage, row: u32, col: u32, width: u32, height: u32) -> Result<()> {
    let fits = |offset: u32, len: u32, max: u32| {
        offset.checked_add(len).is_some_and(|end| end <= max)
    };

    if fits(col, width, image.width()) && fits(row, height, image.height()) {
        return Ok(());
    }
    error!(
        "Region {width}x{height} at row {row}, column {col} exceeds image {:?}",
        image.dimensions()
    );

    Err(SteganoError::PlacementOutOfBounds {
        row,
        col,
        width,
        height,
        carrier_width: image.width(),
        carrier_height: image.height(),
    })
}
