//! Guillotine split of one free rectangle around a used rectangle.

use crate::geometry::Rect;

/// Cuts `free` around `used`, returning the zero to four slices of `free`
/// left uncovered.
///
/// Slices are emitted in the order top, bottom, left, right. Top and bottom
/// slices span the full width of `free`; left and right slices span its
/// full height. When `used` does not overlap `free` nothing is returned.
///
/// # Examples
///
/// ```
/// use u_rectpack::free_space::split;
/// use u_rectpack::geometry::Rect;
///
/// let slices = split(&Rect::new(0, 0, 100, 50), &Rect::new(0, 0, 50, 50));
/// assert_eq!(slices, vec![Rect::new(50, 0, 50, 50)]);
/// ```
pub fn split(free: &Rect, used: &Rect) -> Vec<Rect> {
    let mut slices = Vec::with_capacity(4);

    if !free.intersects(used) {
        return slices;
    }

    // Top
    if used.y > free.y {
        slices.push(Rect::new(free.x, free.y, free.width, used.y - free.y));
    }

    // Bottom
    if used.bottom() < free.bottom() {
        slices.push(Rect::new(
            free.x,
            used.bottom(),
            free.width,
            free.bottom() - used.bottom(),
        ));
    }

    // Left
    if used.x > free.x {
        slices.push(Rect::new(free.x, free.y, used.x - free.x, free.height));
    }

    // Right
    if used.right() < free.right() {
        slices.push(Rect::new(
            used.right(),
            free.y,
            free.right() - used.right(),
            free.height,
        ));
    }

    slices
}
