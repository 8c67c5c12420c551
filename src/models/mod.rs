pub use self::body::Body;
pub use self::color::Rgb;
pub use self::direction::Direction;
pub use self::food::Food;
pub use self::player::Player;
pub use self::point::{HasPoint, Point};
pub use self::virus::Virus;

use crate::canvas::Canvas;

pub type Mass = u32;

pub const MIN_RADIUS: f64 = 5.0;
pub const RADIUS_FACTOR: f64 = 2.0;
pub const SPEED_FACTOR: f64 = 20.0;

pub trait Circle: HasPoint {
    fn r(&self) -> f64;
}

pub trait Blob: Circle {
    fn m(&self) -> Mass;
    fn color(&self) -> Rgb;

    fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill_circle(self.point().trunc(), self.r(), self.color());
    }
}

// Every kind wraps a `Body` in a field named `body`.
macro_rules! impl_blob {
    ($type:ty) => {
        impl HasPoint for $type {
            fn point(&self) -> Point {
                self.body.point()
            }
        }

        impl Circle for $type {
            fn r(&self) -> f64 {
                self.body.r()
            }
        }

        impl Blob for $type {
            fn m(&self) -> Mass {
                self.body.m()
            }

            fn color(&self) -> Rgb {
                self.body.color()
            }
        }
    };
}

mod body;
mod color;
mod direction;
mod food;
mod player;
mod point;
mod virus;

/// Circles overlap: center distance strictly below the sum of radii.
pub fn check_collision<A: Circle, B: Circle>(a: &A, b: &B) -> bool {
    a.point().dist(b.point()) < a.r() + b.r()
}

pub fn mass_to_radius(m: Mass) -> f64 {
    ((m as f64).sqrt() * RADIUS_FACTOR).floor().max(MIN_RADIUS)
}

pub fn radius_to_speed(r: f64) -> f64 {
    SPEED_FACTOR / r
}
