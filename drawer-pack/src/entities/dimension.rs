use crate::error::{PackError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Width and height of a rectangle, in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    /// Validates a raw (width, height) pair. Both sides must be strictly positive and fit in a `u32`.
    pub fn try_new(width: i64, height: i64) -> Result<Self> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(Dimension {
                width: w,
                height: h,
            }),
            _ => Err(PackError::InvalidDimension { width, height }),
        }
    }

    /// Orientation-independent form of the dimension: the shortest side becomes the width.
    pub fn canonical(self) -> Self {
        Dimension {
            width: u32::min(self.width, self.height),
            height: u32::max(self.width, self.height),
        }
    }

    /// The same rectangle turned by 90 degrees.
    pub fn rotated(self) -> Self {
        Dimension {
            width: self.height,
            height: self.width,
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// True if both dimensions describe the same shape, regardless of orientation.
    pub fn shape_eq(&self, other: &Dimension) -> bool {
        self.canonical() == other.canonical()
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn min_side(&self) -> u32 {
        u32::min(self.width, self.height)
    }

    pub fn max_side(&self) -> u32 {
        u32::max(self.width, self.height)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
