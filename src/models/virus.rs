use crate::config::Config;
use crate::models::*;

/// A player heavier than this multiple of the virus mass passes unharmed.
pub const HURT_MASS_FACTOR: f64 = 1.25;

#[derive(Debug, Clone, PartialEq)]
pub struct Virus {
    pub body: Body,
}

impl_blob!(Virus);

impl Virus {
    pub fn new(point: Point, config: &Config) -> Virus {
        Virus {
            body: Body::new(point, config.virus_mass, config.virus_color),
        }
    }

    pub fn can_hurt(&self, other: &Player) -> bool {
        if !((other.m() as f64) < self.m() as f64 * HURT_MASS_FACTOR) {
            return false;
        }
        check_collision(self, other)
    }
}
