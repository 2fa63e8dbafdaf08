//! Bit level codec for a single 8-bit color channel.
//!
//! A channel is split into its high 6 bits, which carry the visible color,
//! and its low 2 bits, which carry the hidden payload.

/// the two payload bits of a color channel
pub const LOW_BITS_MASK: u8 = 0b0000_0011;

/// the visible part of a color channel
pub const HIGH_BITS_MASK: u8 = !LOW_BITS_MASK;

/// zeroes the two least significant bits
pub const fn clear_low_bits(channel: u8) -> u8 {
    channel & HIGH_BITS_MASK
}

/// keeps the high 6 bits of `channel` and stores `two_bits` below them.
///
/// `two_bits` is expected to be in `0..=3`, anything above is truncated to its low two bits.
pub const fn pack_high_low(channel: u8, two_bits: u8) -> u8 {
    clear_low_bits(channel) | (two_bits & LOW_BITS_MASK)
}

pub const fn extract_low_bits(channel: u8) -> u8 {
    channel & LOW_BITS_MASK
}

/// spreads a two bit value over the full channel range: `0, 1, 2, 3` become `0, 64, 128, 192`
pub const fn amplify_low_bits(two_bits: u8) -> u8 {
    (two_bits & LOW_BITS_MASK) << 6
}

/// quantizes a full 8-bit color channel down to the two bits that fit into a carrier channel
pub const fn derive_low_from_color(source: u8) -> u8 {
    source >> 6
}

/// Splits a 6-bit value into three base-4 digits, least significant digit first.
///
/// ```rust
/// use stegano_lab::media::bit_pairs;
///
/// assert_eq!(bit_pairs(27), [3, 2, 1]);
/// ```
pub const fn bit_pairs(value: u8) -> [u8; 3] {
    [
        value & LOW_BITS_MASK,
        (value >> 2) & LOW_BITS_MASK,
        (value >> 4) & LOW_BITS_MASK,
    ]
}

/// inverse of [`bit_pairs`]
pub const fn from_bit_pairs(pairs: [u8; 3]) -> u8 {
    ((pairs[2] & LOW_BITS_MASK) << 4)
        | ((pairs[1] & LOW_BITS_MASK) << 2)
        | (pairs[0] & LOW_BITS_MASK)
}

/// wrap the low level data types that carries information
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

impl MediaPrimitive {
    pub fn unveil_pair(&self) -> u8 {
        match self {
            MediaPrimitive::ImageColorChannel(c) => extract_low_bits(*c),
        }
    }
}

/// mutable primitive for storing stegano data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
}

impl<'a> From<&'a mut u8> for MediaPrimitiveMut<'a> {
    fn from(value: &'a mut u8) -> Self {
        MediaPrimitiveMut::ImageColorChannel(value)
    }
}

pub trait HidePair {
    /// stores `two_bits` in the low bits of the primitive, the rest stays as is
    fn hide_pair(self, two_bits: u8);
}

impl HidePair for MediaPrimitiveMut<'_> {
    fn hide_pair(self, two_bits: u8) {
        match self {
            MediaPrimitiveMut::ImageColorChannel(c) => {
                *c = pack_high_low(*c, two_bits);
            }
        }
    }
}
