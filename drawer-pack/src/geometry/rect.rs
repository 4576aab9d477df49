use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

///Axis-aligned rectangle on the millimetre grid of a container.
///`x_max` and `y_max` are exclusive: the rectangle covers cells `x_min..x_max` × `y_min..y_max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

impl Rect {
    /// Creates a rectangle from its origin and size. Panics if the size is zero or the far corner overflows.
    pub fn from_origin(x: u32, y: u32, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "invalid rectangle size: {width}x{height}");
        let x_max = x.checked_add(width).expect("rectangle overflows in x");
        let y_max = y.checked_add(height).expect("rectangle overflows in y");
        Rect {
            x_min: x,
            y_min: y,
            x_max,
            y_max,
        }
    }

    pub fn width(&self) -> u32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> u32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns true if the interiors of `self` and `other` share at least one point.
    /// Rectangles which only touch along an edge or a corner do not collide.
    #[inline(always)]
    pub fn collides_with(&self, other: &Rect) -> bool {
        self.x_min < other.x_max
            && other.x_min < self.x_max
            && self.y_min < other.y_max
            && other.y_min < self.y_max
    }

    /// Returns true if `other` lies entirely within `self` (boundaries included).
    pub fn contains(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = u32::max(a.x_min, b.x_min);
        let y_min = u32::max(a.y_min, b.y_min);
        let x_max = u32::min(a.x_max, b.x_max);
        let y_max = u32::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({}, {}) {}x{}]",
            self.x_min,
            self.y_min,
            self.width(),
            self.height()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rectangles_do_not_collide() {
        let a = Rect::from_origin(0, 0, 10, 10);
        let right = Rect::from_origin(10, 0, 5, 10);
        let above = Rect::from_origin(0, 10, 10, 5);
        let corner = Rect::from_origin(10, 10, 1, 1);
        assert!(!a.collides_with(&right));
        assert!(!a.collides_with(&above));
        assert!(!a.collides_with(&corner));
    }

    #[test]
    fn overlapping_rectangles_collide() {
        let a = Rect::from_origin(0, 0, 10, 10);
        let b = Rect::from_origin(9, 9, 10, 10);
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
        assert_eq!(Rect::intersection(a, b), Some(Rect::from_origin(9, 9, 1, 1)));
    }

    #[test]
    fn containment_includes_boundary() {
        let outer = Rect::from_origin(0, 0, 100, 50);
        assert!(outer.contains(&Rect::from_origin(90, 40, 10, 10)));
        assert!(!outer.contains(&Rect::from_origin(91, 40, 10, 10)));
    }
}
