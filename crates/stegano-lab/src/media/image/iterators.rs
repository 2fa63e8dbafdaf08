use image::buffer::{Pixels, PixelsMut, RowsMut};
use image::{Pixel, Rgb};
use std::iter::{Skip, Take};

use crate::media::{from_bit_pairs, MediaPrimitive};
use crate::symbols::TERMINATOR;

/// Row-major mutable access to the pixel of a rectangular region only
pub(crate) struct RegionMut<'a, P: Pixel + 'a> {
    col: usize,
    width: usize,
    rows_mut: Take<Skip<RowsMut<'a, P>>>,
    row: Option<Take<Skip<PixelsMut<'a, P>>>>,
}

impl<'a, P: Pixel + 'a> RegionMut<'a, P> {
    /// utilises RowsMut to walk `width x height` pixel starting at (`row`, `col`).
    ///
    /// The region is expected to lie within the image, anything outside is silently cut off.
    pub fn from_rows_mut(
        rows_mut: RowsMut<'a, P>,
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            col: col as usize,
            width: width as usize,
            rows_mut: rows_mut.skip(row as usize).take(height as usize),
            row: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for RegionMut<'a, P> {
    type Item = &'a mut P;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.row.as_mut().and_then(Iterator::next) {
                return Some(p);
            }
            let row = self.rows_mut.next()?;
            self.row = Some(row.skip(self.col).take(self.width));
        }
    }
}

/// Yields one symbol code per pixel in row-major order, up to and including the first terminator
pub(crate) struct SymbolIter<'a> {
    pixel: Pixels<'a, Rgb<u8>>,
    terminated: bool,
}

impl<'a> SymbolIter<'a> {
    pub fn from_pixels(pixel: Pixels<'a, Rgb<u8>>) -> Self {
        Self {
            pixel,
            terminated: false,
        }
    }

    /// true once the terminator was read
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl Iterator for SymbolIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.terminated {
            return None;
        }
        let code = unveil_symbol(self.pixel.next()?);
        self.terminated = code == TERMINATOR;

        Some(code)
    }
}

/// recombines the low bits of red, green and blue into one symbol code
fn unveil_symbol(pixel: &Rgb<u8>) -> u8 {
    let [red, green, blue] = pixel.0.map(|c| MediaPrimitive::from(c).unveil_pair());
    from_bit_pairs([blue, green, red])
}
