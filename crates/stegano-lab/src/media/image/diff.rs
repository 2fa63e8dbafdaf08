//! Pixel wise comparison of two images and visualization of the area they differ in.

use std::iter;

use image::{Rgb, RgbImage};
use log::debug;

use crate::media::{CodecOptions, DEFAULT_HIGHLIGHT_COLOR};

/// A pixel coordinate, `row` is the `y` and `col` the `x` of the `image` crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// The smallest rectangle enclosing a set of positions, all bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

impl BoundingBox {
    /// `None` if there are no positions at all
    pub fn of<'p>(positions: impl IntoIterator<Item = &'p Position>) -> Option<Self> {
        let mut positions = positions.into_iter();
        let first = Self::around(*positions.next()?);

        Some(positions.fold(first, |bbox, p| bbox.including(*p)))
    }

    fn around(p: Position) -> Self {
        Self {
            min_row: p.row,
            max_row: p.row,
            min_col: p.col,
            max_col: p.col,
        }
    }

    fn including(self, p: Position) -> Self {
        Self {
            min_row: self.min_row.min(p.row),
            max_row: self.max_row.max(p.row),
            min_col: self.min_col.min(p.col),
            max_col: self.max_col.max(p.col),
        }
    }

    /// a box can span all of `u32`, hence the wider type
    pub fn width(&self) -> u64 {
        u64::from(self.max_col - self.min_col) + 1
    }

    pub fn height(&self) -> u64 {
        u64::from(self.max_row - self.min_row) + 1
    }

    pub fn contains(&self, p: Position) -> bool {
        (self.min_row..=self.max_row).contains(&p.row)
            && (self.min_col..=self.max_col).contains(&p.col)
    }

    /// number of distinct pixels on the outline, corners are counted once
    pub fn perimeter_len(&self) -> usize {
        let (w, h) = (self.width(), self.height());
        let len = if w == 1 || h == 1 { w * h } else { 2 * (w + h) - 4 };

        len as usize
    }

    /// The part of the box that lies within a `width x height` image, `None` if nothing does.
    pub fn clipped_to(&self, width: u32, height: u32) -> Option<Self> {
        if self.min_row >= height || self.min_col >= width {
            return None;
        }

        Some(Self {
            max_row: self.max_row.min(height - 1),
            max_col: self.max_col.min(width - 1),
            ..*self
        })
    }

    /// All positions of the outline, each exactly once:
    /// top row, bottom row, then the left and right column in between.
    pub fn border(self) -> impl Iterator<Item = Position> {
        let b = self;
        let row_of =
            move |row: u32| (b.min_col..=b.max_col).map(move |col| Position::new(row, col));
        let bottom = (b.max_row > b.min_row).then_some(b.max_row);
        let right = (b.max_col > b.min_col).then_some(b.max_col);

        row_of(b.min_row)
            .chain(bottom.into_iter().flat_map(row_of))
            .chain(
                (b.min_row.saturating_add(1)..b.max_row).flat_map(move |row| {
                    iter::once(b.min_col)
                        .chain(right)
                        .map(move |col| Position::new(row, col))
                }),
            )
    }
}

/// True if both images have the same dimensions and all pixel are equal.
pub fn is_same(a: &RgbImage, b: &RgbImage) -> bool {
    a.dimensions() == b.dimensions() && a.pixels().eq(b.pixels())
}

/// All positions where the images differ in at least one channel, in row-major order.
///
/// Images of different dimensions can't be compared, that gives no differences at all.
pub fn find_differences(a: &RgbImage, b: &RgbImage) -> Vec<Position> {
    if a.dimensions() != b.dimensions() {
        debug!(
            "not comparing images of different dimensions {:?} and {:?}",
            a.dimensions(),
            b.dimensions()
        );
        return Vec::new();
    }

    a.enumerate_pixels()
        .zip(b.pixels())
        .filter(|((_, _, p), q)| p != q)
        .map(|((x, y, _), _)| Position::new(y, x))
        .collect()
}

/// The bounding box of all `positions`, `None` if `positions` is empty.
pub fn compute_bounding_box(positions: &[Position]) -> Option<BoundingBox> {
    BoundingBox::of(positions)
}

/// Outlines the bounding box of `positions` in pure red on a copy of `image`.
pub fn show_different_area(image: &RgbImage, positions: &[Position]) -> RgbImage {
    show_different_area_in(image, positions, DEFAULT_HIGHLIGHT_COLOR)
}

/// Outlines the bounding box of `positions` in the configured highlight color.
pub fn show_different_area_with(
    image: &RgbImage,
    positions: &[Position],
    opts: &CodecOptions,
) -> RgbImage {
    show_different_area_in(image, positions, opts.highlight_color)
}

/// Draws the four border lines of the bounding box of `positions` onto a copy of `image`,
/// the inside stays as it is. Lines outside of the image are cut off.
pub fn show_different_area_in(
    image: &RgbImage,
    positions: &[Position],
    color: Rgb<u8>,
) -> RgbImage {
    let mut copy = image.clone();
    let Some(bbox) = compute_bounding_box(positions) else {
        return copy;
    };
    debug!("outlining {bbox:?} for {} differences", positions.len());

    let (width, height) = copy.dimensions();
    let Some(visible) = bbox.clipped_to(width, height) else {
        return copy;
    };
    // the top row and left column are visible whenever anything is
    let bottom = (bbox.max_row == visible.max_row).then_some(bbox.max_row);
    let right = (bbox.max_col == visible.max_col).then_some(bbox.max_col);

    for col in visible.min_col..=visible.max_col {
        for row in iter::once(bbox.min_row).chain(bottom) {
            copy.put_pixel(col, row, color);
        }
    }
    for row in visible.min_row..=visible.max_row {
        for col in iter::once(bbox.min_col).chain(right) {
            copy.put_pixel(col, row, color);
        }
    }

    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::clear_low;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn should_be_same_as_a_copy() {
        let img = prepare_5x5_image();
        let copy = img.clone();

        assert!(is_same(&img, &copy));
        assert!(find_differences(&img, &copy).is_empty());
    }

    #[test]
    fn should_not_be_same_with_different_dimensions() {
        let a = RgbImage::new(3, 2);
        let b = RgbImage::new(2, 3);

        assert!(!is_same(&a, &b));
        assert!(find_differences(&a, &b).is_empty());
    }

    #[test]
    fn should_find_differences_in_row_major_order() {
        let a = RgbImage::new(4, 3);
        let mut b = a.clone();
        b.put_pixel(3, 0, Rgb([0, 0, 1]));
        b.put_pixel(1, 2, Rgb([1, 0, 0]));
        b.put_pixel(0, 1, Rgb([0, 1, 0]));

        assert!(!is_same(&a, &b));
        assert_eq!(
            find_differences(&a, &b),
            vec![
                Position::new(0, 3),
                Position::new(1, 0),
                Position::new(2, 1)
            ]
        );
    }

    #[test]
    fn should_find_the_pixel_changed_by_clear_low() {
        let img = prepare_5x5_image();
        let cleared = clear_low(&img);

        let expected: Vec<Position> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0.iter().any(|c| c & 3 != 0))
            .map(|(x, y, _)| Position::new(y, x))
            .collect();

        assert_eq!(find_differences(&img, &cleared), expected);
    }

    #[test]
    fn should_compute_no_bounding_box_for_no_positions() {
        assert_eq!(compute_bounding_box(&[]), None);
    }

    #[test]
    fn should_compute_a_bounding_box_around_all_positions() {
        let positions = [
            Position::new(4, 2),
            Position::new(1, 7),
            Position::new(3, 0),
        ];

        let bbox = compute_bounding_box(&positions).expect("there are positions");

        assert_eq!(
            bbox,
            BoundingBox {
                min_row: 1,
                max_row: 4,
                min_col: 0,
                max_col: 7,
            }
        );
        assert!(positions.iter().all(|p| bbox.contains(*p)));
        assert_eq!((bbox.width(), bbox.height()), (8, 4));
    }

    #[test]
    fn border_should_visit_each_outline_pixel_once() {
        for bbox in [
            BoundingBox::of(&[Position::new(2, 2)]),
            BoundingBox::of(&[Position::new(0, 1), Position::new(0, 5)]),
            BoundingBox::of(&[Position::new(1, 3), Position::new(4, 3)]),
            BoundingBox::of(&[Position::new(1, 1), Position::new(2, 2)]),
            BoundingBox::of(&[Position::new(0, 0), Position::new(5, 9)]),
        ]
        .into_iter()
        .flatten()
        {
            let mut border: Vec<Position> = bbox.border().collect();
            assert_eq!(border.len(), bbox.perimeter_len(), "{bbox:?}");
            border.sort();
            border.dedup();
            assert_eq!(border.len(), bbox.perimeter_len(), "{bbox:?} has duplicates");
            assert!(border.iter().all(|p| bbox.contains(*p)));
        }
    }

    #[test]
    fn should_return_an_unmodified_copy_without_differences() {
        let img = prepare_5x5_image();

        assert_eq!(show_different_area(&img, &[]), img);
    }

    #[test]
    fn should_outline_the_bounding_box_only() {
        let img = RgbImage::new(8, 6);
        let positions = [Position::new(1, 2), Position::new(4, 5), Position::new(2, 3)];

        let outlined = show_different_area(&img, &positions);

        let bbox = compute_bounding_box(&positions).expect("there are positions");
        let changed = find_differences(&img, &outlined);
        assert_eq!(changed.len(), bbox.perimeter_len());
        for p in changed {
            let on_border = p.row == 1 || p.row == 4 || p.col == 2 || p.col == 5;
            assert!(bbox.contains(p) && on_border, "{p:?} is not on the outline");
            assert_eq!(outlined.get_pixel(p.col, p.row), &DEFAULT_HIGHLIGHT_COLOR);
        }
        assert_eq!(outlined.get_pixel(3, 2), &Rgb([0, 0, 0]), "inside got painted");
    }

    #[test]
    fn should_outline_in_the_configured_color() {
        let img = RgbImage::new(3, 3);
        let opts = CodecOptions::default().with_highlight_color(Rgb([0, 255, 0]));

        let outlined = show_different_area_with(&img, &[Position::new(1, 1)], &opts);

        assert_eq!(outlined.get_pixel(1, 1), &Rgb([0, 255, 0]));
        assert_eq!(find_differences(&img, &outlined).len(), 1);
    }

    #[test]
    fn should_cut_off_lines_outside_the_image() {
        let img = RgbImage::new(4, 4);
        let positions = [Position::new(2, 2), Position::new(9, 7)];

        let outlined = show_different_area(&img, &positions);

        // only the top row from col 2 and the left column from row 2 remain
        assert_eq!(
            find_differences(&img, &outlined),
            vec![
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(3, 2)
            ]
        );
    }

    #[test]
    fn should_outline_far_away_positions_quickly() {
        let img = RgbImage::new(4, 4);

        let far_right = [Position::new(1, 1), Position::new(1, 400_000_000)];
        let outlined = show_different_area(&img, &far_right);
        assert_eq!(
            find_differences(&img, &outlined),
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 3)
            ]
        );

        let outlined = show_different_area(
            &img,
            &[Position::new(0, 0), Position::new(u32::MAX, u32::MAX)],
        );
        let changed = find_differences(&img, &outlined);
        assert_eq!(changed.len(), 7);
        assert!(changed.iter().all(|p| p.row == 0 || p.col == 0));
    }

    #[test]
    fn should_draw_nothing_for_a_box_beyond_the_image() {
        let img = prepare_5x5_image();

        let outlined = show_different_area(&img, &[Position::new(5, 0), Position::new(9, 3)]);

        assert_eq!(outlined, img);
    }

    #[test]
    fn should_clip_a_bounding_box_to_the_image() {
        let bbox = BoundingBox::of(&[Position::new(2, 1), Position::new(10, u32::MAX)])
            .expect("there are positions");

        assert_eq!(
            bbox.clipped_to(4, 6),
            Some(BoundingBox {
                min_row: 2,
                max_row: 5,
                min_col: 1,
                max_col: 3,
            })
        );
        assert_eq!(bbox.clipped_to(1, 6), None);
        assert_eq!(bbox.clipped_to(4, 2), None);
        assert_eq!(bbox.clipped_to(0, 0), None);
    }

    #[test]
    fn should_measure_a_box_spanning_all_of_u32() {
        let line = compute_bounding_box(&[Position::new(0, 0), Position::new(0, u32::MAX)])
            .expect("there are positions");
        assert_eq!((line.width(), line.height()), (1 << 32, 1));
        assert_eq!(line.perimeter_len() as u64, 1 << 32);

        let everything = [Position::new(0, 0), Position::new(u32::MAX, u32::MAX)];
        let full = compute_bounding_box(&everything).expect("there are positions");
        assert_eq!(full.perimeter_len() as u64, 4 * (1 << 32) - 4);
    }
}
