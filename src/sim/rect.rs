//! Axis-aligned rectangles

use serde::{Deserialize, Serialize};

use super::line::Line;
use super::point::Point;
use crate::consts::EPSILON;

/// Axis-aligned rectangle anchored at its upper-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    upper_left: Point,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Negative dimensions are clamped to zero
    pub fn new(upper_left: Point, width: f64, height: f64) -> Self {
        Self {
            upper_left,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.upper_left.x()
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.upper_left.x() + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.upper_left.y()
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.upper_left.y() + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left() + self.width / 2.0,
            self.top() + self.height / 2.0,
        )
    }

    pub fn top_edge(&self) -> Line {
        Line::from_coords(self.left(), self.top(), self.right(), self.top())
    }

    pub fn right_edge(&self) -> Line {
        Line::from_coords(self.right(), self.top(), self.right(), self.bottom())
    }

    pub fn bottom_edge(&self) -> Line {
        Line::from_coords(self.left(), self.bottom(), self.right(), self.bottom())
    }

    pub fn left_edge(&self) -> Line {
        Line::from_coords(self.left(), self.top(), self.left(), self.bottom())
    }

    /// Boundary segments in the order top, right, bottom, left
    pub fn edges(&self) -> [Line; 4] {
        [
            self.top_edge(),
            self.right_edge(),
            self.bottom_edge(),
            self.left_edge(),
        ]
    }

    /// Whether `p` lies inside or on the boundary
    pub fn contains(&self, p: Point) -> bool {
        p.x() >= self.left() - EPSILON
            && p.x() <= self.right() + EPSILON
            && p.y() >= self.top() - EPSILON
            && p.y() <= self.bottom() + EPSILON
    }

    /// Copy shifted by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            Point::new(self.left() + dx, self.top() + dy),
            self.width,
            self.height,
        )
    }

    /// Copy moved so its upper-left corner sits at `x` (same row)
    pub fn with_left(&self, x: f64) -> Self {
        Self::new(Point::new(x, self.top()), self.width, self.height)
    }

    /// Every point where `line` crosses an edge, in edge order.
    ///
    /// A line through a corner is reported once per edge meeting there, so
    /// duplicates are expected and kept.
    pub fn intersection_points(&self, line: &Line) -> Vec<Point> {
        self.edges()
            .iter()
            .filter_map(|edge| line.intersection_point(edge))
            .collect()
    }
}
