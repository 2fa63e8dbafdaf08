pub mod concealer;
pub mod diff;
mod iterators;
pub mod transform;

pub use concealer::{
    can_hide, hide_image, hide_image_at, hide_text, hide_text_with, reveal_image,
    reveal_image_at, reveal_text, reveal_text_with,
};
pub use diff::{
    compute_bounding_box, find_differences, is_same, show_different_area,
    show_different_area_in, show_different_area_with, BoundingBox, Position,
};
pub use transform::{capacity, clear_low, creative_effect, reveal, set_low};
