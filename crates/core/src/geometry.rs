use serde::Serialize;

/// A 2D point in surface pixels.  Polygon vertices keep their fractional
/// part; the back-box works on whole pixels through [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

/// Integer rectangle with the usual screen-space conventions: `right` and
/// `bottom` are exclusive, centres are rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn center_x(&self) -> i32 {
        self.x + self.width.div_euclid(2)
    }

    #[inline]
    pub const fn center_y(&self) -> i32 {
        self.y + self.height.div_euclid(2)
    }

    /// Hit test; points on the right/bottom edge are outside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left() as f32
            && point.x < self.right() as f32
            && point.y >= self.top() as f32
            && point.y < self.bottom() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_rounds_down() {
        let r = Rect::new(10, 20, 15, 7);
        assert_eq!(r.center_x(), 17);
        assert_eq!(r.center_y(), 23);
        assert_eq!(r.right(), 25);
        assert_eq!(r.bottom(), 27);
    }

    #[test]
    fn right_and_bottom_edges_are_exclusive() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.5, 9.5)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!Rect::default().contains(Point::new(0.0, 0.0)));
    }
}
