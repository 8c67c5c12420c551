use std::mem;

use rand::Rng;

use crate::canvas::Canvas;
use crate::config::Config;
use crate::models::*;

pub type Tick = u64;

const HUD_POSITION: Point = Point { x: 10.0, y: 10.0 };

/// What happened to the player during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub eaten: u32,
    pub hurt: u32,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.eaten == 0 && self.hurt == 0
    }
}

/// The whole world: one player, a constant-size food supply and fixed viruses.
#[derive(Debug)]
pub struct Game<R: Rng> {
    config: Config,
    rng: R,
    tick: Tick,
    player: Player,
    food: Vec<Food>,
    viruses: Vec<Virus>,
}

impl<R: Rng> Game<R> {
    pub fn new(config: Config, mut rng: R) -> Game<R> {
        let player = Player::at_center(&config);
        let food = (0..config.food_count)
            .map(|_| Food::new(random_point(&mut rng, &config), &config))
            .collect();
        let viruses = (0..config.virus_count)
            .map(|_| Virus::new(random_point(&mut rng, &config), &config))
            .collect();
        let game = Game::with_entities(config, rng, player, food, viruses);
        info!(
            "new game on a {}x{} map: {} food, {} viruses",
            game.config.map_width,
            game.config.map_height,
            game.food.len(),
            game.viruses.len()
        );
        game
    }

    /// Builds a game around a prepared world; `rng` is only used for respawns.
    pub fn with_entities(
        config: Config,
        rng: R,
        player: Player,
        food: Vec<Food>,
        viruses: Vec<Virus>,
    ) -> Game<R> {
        Game {
            config,
            rng,
            tick: 0,
            player,
            food,
            viruses,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn food(&self) -> &[Food] {
        &self.food
    }

    pub fn viruses(&self) -> &[Virus] {
        &self.viruses
    }

    /// Moves the player, then runs the collision rules.
    pub fn step(&mut self, direction: Direction) -> TickReport {
        self.player.move_by(direction, &self.config);
        self.update()
    }

    /// Both passes test against the player as it was when the tick began.
    pub fn update(&mut self) -> TickReport {
        let before = self.player.clone();
        let report = TickReport {
            eaten: self.eat_food(&before),
            hurt: self.hurt_by_viruses(&before),
        };
        self.tick += 1;
        if !report.is_empty() {
            debug!(
                "tick {}: ate {}, hurt {}, mass {}, score {}",
                self.tick,
                report.eaten,
                report.hurt,
                self.player.m(),
                self.player.score()
            );
        }
        report
    }

    fn eat_food(&mut self, before: &Player) -> u32 {
        let (eaten, kept): (Vec<Food>, Vec<Food>) = mem::replace(&mut self.food, vec![])
            .into_iter()
            .partition(|food| before.can_eat(food));
        self.food = kept;
        for food in eaten.iter() {
            self.player.eat(food);
            let point = random_point(&mut self.rng, &self.config);
            self.food.push(Food::new(point, &self.config));
        }
        eaten.len() as u32
    }

    // Each hurting virus halves again.
    fn hurt_by_viruses(&mut self, before: &Player) -> u32 {
        let mut hurt = 0;
        for virus in self.viruses.iter() {
            if virus.can_hurt(before) {
                self.player.shrink();
                hurt += 1;
            }
        }
        hurt
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill(self.config.background_color);
        self.player.draw(canvas);
        for food in self.food.iter() {
            food.draw(canvas);
        }
        for virus in self.viruses.iter() {
            virus.draw(canvas);
        }
        canvas.draw_text(
            &format!("Score: {}", self.player.score()),
            HUD_POSITION,
            self.config.hud_font_size,
            self.config.hud_color,
        );
    }
}

/// Uniform integer coordinates, map edges included.
fn random_point<R: Rng>(rng: &mut R, config: &Config) -> Point {
    Point::new(
        rng.gen_range(0..=config.map_width) as f64,
        rng.gen_range(0..=config.map_height) as f64,
    )
}
