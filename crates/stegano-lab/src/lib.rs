//! # Stegano Lab API
//!
//! Hides secret images and short text messages in the two least significant bits of the
//! color channels of an RGB image, and unveils them again.
//!
//! - [`media`] holds the channel bit codec and all whole image operations
//! - [`symbols`] maps text to the symbol codes that are hidden per pixel
//! - [`api`] wraps it all up in builders
//!
//! Images are plain [`image::RgbImage`] buffers. Every operation borrows its input and
//! returns a fresh image, the input is never modified.
//!
//! # Usage Examples
//!
//! ## Hide a text message inside an image
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//!
//! let carrier = RgbImage::from_pixel(16, 16, Rgb([200, 120, 40]));
//!
//! let image_with_secret = stegano_lab::api::hide::prepare()
//!     .with_carrier(&carrier)
//!     .with_message("Hello World")
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegano_lab::api::unveil::prepare()
//!     .with_secret_image(&image_with_secret)
//!     .text()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "HELLO WORLD");
//! ```
//!
//! ## Hide an image inside an image and see what changed
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use stegano_lab::media::image::{find_differences, hide_image_at, show_different_area};
//!
//! let carrier = RgbImage::new(8, 8);
//! let secret = RgbImage::from_pixel(3, 2, Rgb([255, 128, 64]));
//!
//! let image_with_secret = hide_image_at(&carrier, &secret, 2, 4).expect("secret fits");
//! let differences = find_differences(&carrier, &image_with_secret);
//! let outlined = show_different_area(&carrier, &differences);
//!
//! assert_eq!(differences.len(), 6);
//! assert_eq!(outlined.get_pixel(4, 2), &Rgb([255, 0, 0]));
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod error;
pub mod media;
pub mod result;
pub mod symbols;

pub use crate::error::SteganoError;
pub use crate::media::{CodecOptions, SymbolPolicy};
pub use crate::result::Result;
