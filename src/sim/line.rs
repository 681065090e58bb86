//! Line segment geometry
//!
//! Everything the collision engine knows about intersections lives here:
//! orientation of point triples, the classic four-orientation segment test,
//! and solving for the crossing point.

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::rect::Rectangle;
use crate::consts::{EPSILON, ORIENTATION_EPSILON};

/// Turn direction of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    Counterclockwise,
}

/// Outcome of intersecting two segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// The segments cross or touch at a single point
    Point(Point),
    /// The segments share no point
    Disjoint,
    /// The segments are collinear and overlap, so there is no unique point
    Overlapping,
}

impl LineIntersection {
    pub fn point(self) -> Option<Point> {
        match self {
            LineIntersection::Point(p) => Some(p),
            LineIntersection::Disjoint | LineIntersection::Overlapping => None,
        }
    }
}

/// A segment between two points. May be degenerate (`start == end`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn middle(&self) -> Point {
        Point::from((self.start.as_dvec2() + self.end.as_dvec2()) * 0.5)
    }

    /// True when both endpoints coincide (within tolerance)
    pub fn is_degenerate(&self) -> bool {
        self.start.approx_eq(self.end)
    }

    /// Orientation of the triple `(p, q, r)` from the sign of
    /// `(p.y - q.y)(r.x - q.x) - (r.y - q.y)(p.x - q.x)`.
    pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
        let value = (p.y() - q.y()) * (r.x() - q.x()) - (r.y() - q.y()) * (p.x() - q.x());
        if value.abs() <= ORIENTATION_EPSILON {
            Orientation::Collinear
        } else if value > 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Counterclockwise
        }
    }

    /// Whether `b` lies inside the bounding box of `a` and `c`.
    ///
    /// Only meaningful when `b` is already known to be collinear with `a, c`.
    pub fn on_segment(a: Point, b: Point, c: Point) -> bool {
        b.x() <= a.x().max(c.x()) + EPSILON
            && b.x() >= a.x().min(c.x()) - EPSILON
            && b.y() <= a.y().max(c.y()) + EPSILON
            && b.y() >= a.y().min(c.y()) - EPSILON
    }

    /// Segment intersection test. Symmetric in its arguments.
    pub fn intersects(&self, other: &Line) -> bool {
        let (p1, q1) = (self.start, self.end);
        let (p2, q2) = (other.start, other.end);

        let o1 = Self::orientation(p1, q1, p2);
        let o2 = Self::orientation(p1, q1, q2);
        let o3 = Self::orientation(p2, q2, p1);
        let o4 = Self::orientation(p2, q2, q1);

        // General case: each segment straddles the other
        if o1 != o2 && o3 != o4 {
            return true;
        }

        // Collinear special cases
        (o1 == Orientation::Collinear && Self::on_segment(p1, p2, q1))
            || (o2 == Orientation::Collinear && Self::on_segment(p1, q2, q1))
            || (o3 == Orientation::Collinear && Self::on_segment(p2, p1, q2))
            || (o4 == Orientation::Collinear && Self::on_segment(p2, q1, q2))
    }

    /// True when this segment intersects both `a` and `b`
    pub fn intersects_both(&self, a: &Line, b: &Line) -> bool {
        self.intersects(a) && self.intersects(b)
    }

    /// Intersect with `other`, distinguishing a miss from a collinear overlap.
    ///
    /// Solves `a*x + b*y = c` for both lines where `a = dy`, `b = -dx`.
    pub fn intersect(&self, other: &Line) -> LineIntersection {
        if !self.intersects(other) {
            return LineIntersection::Disjoint;
        }

        // A point-like segment that passed the test lies on the other one
        if self.is_degenerate() {
            return LineIntersection::Point(self.start);
        }
        if other.is_degenerate() {
            return LineIntersection::Point(other.start);
        }

        let (a1, b1, c1) = self.implicit_form();
        let (a2, b2, c2) = other.implicit_form();

        let determinant = a1 * b2 - a2 * b1;
        if determinant.abs() <= ORIENTATION_EPSILON {
            return LineIntersection::Overlapping;
        }

        let x = (b2 * c1 - b1 * c2) / determinant;
        let y = (a1 * c2 - a2 * c1) / determinant;
        LineIntersection::Point(Point::new(x, y))
    }

    /// Crossing point with `other`, or `None` if they miss or overlap
    pub fn intersection_point(&self, other: &Line) -> Option<Point> {
        self.intersect(other).point()
    }

    /// Point at fraction `t` along the segment. `t` is not clamped.
    ///
    /// Exact at both ends: `t = 0` yields `start`, `t = 1` yields `end`.
    pub fn point_at_fraction(&self, t: f64) -> Point {
        Point::from(self.start.as_dvec2() * (1.0 - t) + self.end.as_dvec2() * t)
    }

    /// Intersection with `rect` nearest to `start`. Ties keep the edge
    /// reported first (top, right, bottom, left).
    pub fn closest_intersection_to_start(&self, rect: &Rectangle) -> Option<Point> {
        let mut closest: Option<(Point, f64)> = None;
        for point in rect.intersection_points(self) {
            let distance = self.start.distance(point);
            match closest {
                Some((_, best)) if distance >= best => {}
                _ => closest = Some((point, distance)),
            }
        }
        closest.map(|(point, _)| point)
    }

    /// Same segment regardless of direction
    pub fn same_segment(&self, other: &Line) -> bool {
        (self.start.approx_eq(other.start) && self.end.approx_eq(other.end))
            || (self.start.approx_eq(other.end) && self.end.approx_eq(other.start))
    }

    fn implicit_form(&self) -> (f64, f64, f64) {
        let a = self.end.y() - self.start.y();
        let b = self.start.x() - self.end.x();
        let c = a * self.start.x() + b * self.start.y();
        (a, b, c)
    }
}
