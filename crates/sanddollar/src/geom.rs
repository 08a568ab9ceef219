//! Geometry primitives for the relaxation engine.
//!
//! Coordinates are `f64` in an anonymous cartesian space; callers decide what a unit means.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

/// The axis-aligned rectangular domain discs must stay within, `[min.x, max.x] x [min.y, max.y]`.
pub type Area = euclid::Box2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

pub fn area(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Area {
    Area::new(point(min_x, min_y), point(max_x, max_y))
}

/// A circular region to be kept non-overlapping and in-bounds.
///
/// The center is reassigned freely by the relaxation process; the radius is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Point,
    radius: f64,
}

impl Disc {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self::from_center(point(x, y), radius)
    }

    pub fn from_center(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Translates the center by `v * c` in place.
    pub fn translate(&mut self, v: Vector, c: f64) {
        self.center += v * c;
    }

    /// Distance of the center from the origin.
    pub fn distance_from_origin(&self) -> f64 {
        self.center.to_vector().length()
    }

    /// Whether this disc and `other` occupy common area. Exact tangency does not count.
    pub fn overlaps(&self, other: &Disc) -> bool {
        let between = other.center - self.center;
        self.radius + other.radius > between.length()
    }

    /// Whether the disc's full extent sits inside `area` on both axes.
    pub fn inside(&self, area: &Area) -> bool {
        self.center.x - self.radius >= area.min.x
            && self.center.x + self.radius <= area.max.x
            && self.center.y - self.radius >= area.min.y
            && self.center.y + self.radius <= area.max.y
    }
}
