//! Image normalization: decode, bounded resize, re-encode.

pub mod codec;
pub mod resize;

pub use codec::{decode, encode};
pub use resize::{bounded_dimensions, shrink_to_bounds, ResizeBounds};
