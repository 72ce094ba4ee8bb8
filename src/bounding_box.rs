//! Axis aligned boxes scoping the anti-aliasing filter's work.

use crate::point::{point, Point};

/// Axis aligned box spanned by `min` and `max` (both inclusive).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Corner with the smallest coordinates
    pub min: Point,
    /// Corner with the largest coordinates
    pub max: Point,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_iter<Iter: Iterator<Item = Point>>(mut points: Iter) -> Option<BoundingBox> {
        let mut min = points.next()?;
        let mut max = min;
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(BoundingBox { min, max })
    }

    /// Smallest box containing every point of the slice.
    pub fn from_slice(points: &[Point]) -> Option<BoundingBox> {
        BoundingBox::from_iter(points.iter().copied())
    }

    /// Grow the box by `margin` in every direction.
    pub fn padded(&self, margin: f64) -> BoundingBox {
        let margin = point(margin, margin);
        BoundingBox {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Restrict the box to the pixel positions `[0, width - 1] x [0, height - 1]`.
    ///
    /// A fractional `min` inside the surface is kept as is, so positions stepped from it
    /// by whole pixels keep their sub-pixel phase.
    /// Returns `None` if nothing of the box lies on the surface.
    pub fn clamp_to(&self, width: usize, height: usize) -> Option<BoundingBox> {
        if width == 0 || height == 0 {
            return None;
        }
        let (right, bottom) = ((width - 1) as f64, (height - 1) as f64);
        let clamped = BoundingBox {
            min: point(self.min.x.max(0.0), self.min.y.max(0.0)),
            max: point(self.max.x.min(right), self.max.y.min(bottom)),
        };
        (clamped.min.x <= clamped.max.x && clamped.min.y <= clamped.max.y).then_some(clamped)
    }

    /// Whether `point` lies inside the box or on its border.
    pub fn contains(&self, point: &Point) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// Number of whole pixel steps from `min` that stay within the box, per axis.
    pub fn steps(&self) -> (usize, usize) {
        let count = |from: f64, to: f64| {
            if to < from {
                0
            } else {
                (to - from).floor() as usize + 1
            }
        };
        (count(self.min.x, self.max.x), count(self.min.y, self.max.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points() {
        let bb = BoundingBox::from_slice(&[point(3.0, 9.0), point(-1.0, 4.0), point(7.0, 5.0)])
            .unwrap();
        assert_eq!(bb.min, point(-1.0, 4.0));
        assert_eq!(bb.max, point(7.0, 9.0));
        assert!(bb.contains(&point(0.0, 4.0)));
        assert!(!bb.contains(&point(0.0, 9.5)));
        assert_eq!(BoundingBox::from_slice(&[]), None);
    }

    #[test]
    fn padding_and_clamping() {
        let bb = BoundingBox::from_slice(&[point(2.5, 3.0), point(8.0, 20.0)])
            .unwrap()
            .padded(6.0);
        assert_eq!(bb.min, point(-3.5, -3.0));
        assert_eq!(bb.max, point(14.0, 26.0));

        let clamped = bb.clamp_to(10, 30).unwrap();
        assert_eq!(clamped.min, point(0.0, 0.0));
        assert_eq!(clamped.max, point(9.0, 26.0));
        assert_eq!(clamped.steps(), (10, 27));

        let inside = BoundingBox::from_slice(&[point(1.5, 1.5), point(4.0, 4.0)]).unwrap();
        let clamped = inside.clamp_to(10, 10).unwrap();
        assert_eq!(clamped.min, point(1.5, 1.5));
        assert_eq!(clamped.steps(), (3, 3));

        let outside = BoundingBox::from_slice(&[point(20.0, 20.0), point(30.0, 30.0)]).unwrap();
        assert_eq!(outside.clamp_to(10, 10), None);
    }
}
