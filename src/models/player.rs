use crate::config::Config;
use crate::models::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    score_: u32,
}

impl_blob!(Player);

impl Player {
    pub fn new(point: Point, config: &Config) -> Player {
        Player {
            body: Body::new(point, config.player_start_mass, config.player_color),
            score_: 0,
        }
    }

    /// Starts at the map center, integer-divided like the map size.
    pub fn at_center(config: &Config) -> Player {
        let point = Point::new(
            (config.map_width / 2) as f64,
            (config.map_height / 2) as f64,
        );
        Player::new(point, config)
    }

    pub fn score(&self) -> u32 {
        self.score_
    }

    pub fn speed(&self) -> f64 {
        self.body.speed()
    }

    pub fn move_by(&mut self, direction: Direction, config: &Config) {
        self.body.move_by(direction, config);
    }

    pub fn can_eat(&self, food: &Food) -> bool {
        check_collision(self, food)
    }

    /// Score counts foods, not mass. Both saturate instead of wrapping.
    pub fn eat(&mut self, food: &Food) {
        let m = self.m().saturating_add(food.m());
        self.body.set_m(m);
        self.score_ = self.score_.saturating_add(1);
    }

    pub fn shrink(&mut self) {
        let m = (self.m() / 2).max(1);
        self.body.set_m(m);
    }
}
