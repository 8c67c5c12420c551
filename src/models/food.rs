use crate::config::Config;
use crate::models::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub body: Body,
}

impl_blob!(Food);

impl Food {
    pub fn new(point: Point, config: &Config) -> Food {
        Food {
            body: Body::new(point, config.food_mass, config.food_color),
        }
    }
}
