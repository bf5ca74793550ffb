use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Inclusive rectangle of pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A rect anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let right = i64::from(width) - 1;
        let bottom = i64::from(height) - 1;

        if right < 0 || bottom < 0 || right > i64::from(i32::MAX) || bottom > i64::from(i32::MAX) {
            return Err(PixelRectError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: right as i32,
                y: bottom as i32,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Point { x: -10, y: -20 }, Point { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
    }

    #[test]
    fn test_pixel_rect_single_pixel_is_valid() {
        let rect = PixelRect::new(Point { x: 3, y: 3 }, Point { x: 3, y: 3 }).unwrap();

        assert_eq!((rect.width(), rect.height()), (1, 1));
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        let inverted = PixelRect::new(Point { x: 2, y: 2 }, Point { x: -2, y: 5 });

        assert_eq!(
            inverted,
            Err(PixelRectError::InvalidSize { width: -3, height: 4 })
        );
    }

    #[test]
    fn test_from_size() {
        let rect = PixelRect::from_size(750, 600).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 749, y: 599 });
        assert_eq!(
            PixelRect::from_size(0, 10),
            Err(PixelRectError::InvalidSize { width: 0, height: 10 })
        );
    }

    #[test]
    fn test_contains_point() {
        let rect = PixelRect::from_size(10, 10).unwrap();

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: 9, y: 9 }));
        assert!(!rect.contains_point(Point { x: 10, y: 5 }));
        assert!(!rect.contains_point(Point { x: -1, y: 5 }));
    }
}
