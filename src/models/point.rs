use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Drops the fractional part of both coordinates, the way pixels are addressed.
    pub fn trunc(self) -> Point {
        Point::new(self.x.trunc(), self.y.trunc())
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

pub trait HasPoint {
    fn point(&self) -> Point;

    fn x(&self) -> f64 {
        self.point().x
    }

    fn y(&self) -> f64 {
        self.point().y
    }
}

impl HasPoint for Point {
    fn point(&self) -> Point {
        *self
    }
}

impl Point {
    pub fn dist<Other: HasPoint>(self, other: Other) -> f64 {
        (self - other).length()
    }
}

impl<Other: HasPoint> Add<Other> for Point {
    type Output = Point;
    fn add(self, other: Other) -> Point {
        Point::new(self.x + other.x(), self.y + other.y())
    }
}

impl<Other: HasPoint> Sub<Other> for Point {
    type Output = Point;
    fn sub(self, other: Other) -> Point {
        Point::new(self.x - other.x(), self.y - other.y())
    }
}
