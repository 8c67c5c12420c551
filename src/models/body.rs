use crate::config::Config;
use crate::models::*;

/// The movable circle shared by every kind of blob.
///
/// Radius and speed are derived from mass and only change through `set_m`.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    point_: Point,
    m_: Mass,
    r_: f64,
    speed_: f64,
    color_: Rgb,
}

impl HasPoint for Body {
    fn point(&self) -> Point {
        self.point_
    }
}

impl Circle for Body {
    fn r(&self) -> f64 {
        self.r_
    }
}

impl Blob for Body {
    fn m(&self) -> Mass {
        self.m_
    }

    fn color(&self) -> Rgb {
        self.color_
    }
}

impl Body {
    pub fn new(point: Point, m: Mass, color: Rgb) -> Body {
        let r = mass_to_radius(m);
        Body {
            point_: point,
            m_: m,
            r_: r,
            speed_: radius_to_speed(r),
            color_: color,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed_
    }

    pub fn set_m(&mut self, m: Mass) {
        self.m_ = m;
        self.r_ = mass_to_radius(m);
        self.speed_ = radius_to_speed(self.r_);
    }

    pub fn set_point(&mut self, point: Point) {
        self.point_ = point;
    }

    /// Steps by `direction * speed`, then keeps the whole circle on the map.
    pub fn move_by(&mut self, direction: Direction, config: &Config) {
        let step = Point::new(direction.dx as f64, direction.dy as f64) * self.speed();
        let moved = self.point() + step;
        let x = moved.x.max(self.r()).min(config.width() - self.r());
        let y = moved.y.max(self.r()).min(config.height() - self.r());
        self.set_point(Point::new(x, y));
    }
}
