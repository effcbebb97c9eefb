//! Crop box structure for defining icon rectangles
//!
//! A CropBox is the rectangle as written in the crop table, in
//! `(left, top, right, bottom)` order. Right and bottom are exclusive.
//! Coordinates are signed so boxes hanging past the top or left edge can
//! still be expressed and clipped.

use std::fmt;

use super::region::Region;

/// A rectangle in source-image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    /// Left edge (inclusive)
    pub left: i32,
    /// Top edge (inclusive)
    pub top: i32,
    /// Right edge (exclusive)
    pub right: i32,
    /// Bottom edge (exclusive)
    pub bottom: i32,
}

impl CropBox {
    /// Create a new crop box
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        CropBox { left, top, right, bottom }
    }

    /// Build a crop box from a four-element slice, as stored in the table
    pub fn from_slice(values: &[i64]) -> Result<Self, String> {
        if values.len() != 4 {
            return Err(format!("Crop box must have 4 values, found {}", values.len()));
        }

        let mut coords = [0i32; 4];
        for (slot, value) in coords.iter_mut().zip(values) {
            *slot = i32::try_from(*value)
                .map_err(|_| format!("Crop box coordinate out of range: {}", value))?;
        }

        Ok(CropBox::new(coords[0], coords[1], coords[2], coords[3]))
    }

    /// Get the width of the box (may be zero or negative when degenerate)
    pub fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    /// Get the height of the box (may be zero or negative when degenerate)
    pub fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// A box with `left >= right` or `top >= bottom` encloses no pixels
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Check whether the box lies fully inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0 && self.top >= 0
            && self.right as i64 <= width as i64
            && self.bottom as i64 <= height as i64
    }

    /// Clip the box to the bounds of an image
    ///
    /// Returns the intersection of the box with `[0,width]×[0,height]` as a
    /// pixel region, or `None` when the box is degenerate or the
    /// intersection is empty.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Region> {
        if self.is_degenerate() {
            return None;
        }

        let left = (self.left as i64).clamp(0, width as i64);
        let top = (self.top as i64).clamp(0, height as i64);
        let right = (self.right as i64).clamp(0, width as i64);
        let bottom = (self.bottom as i64).clamp(0, height as i64);

        if right <= left || bottom <= top {
            return None;
        }

        Some(Region::new(
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }
}

impl fmt::Display for CropBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.right, self.bottom)
    }
}
