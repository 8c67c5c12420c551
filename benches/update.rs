#[macro_use]
extern crate criterion;

extern crate agario;
extern crate rand;

use criterion::Criterion;
use rand::rngs::StdRng;
use rand::SeedableRng;

use agario::config::Config;
use agario::game::Game;
use agario::models::*;

fn bench(c: &mut Criterion) {
    c.bench_function("Game::step", |b| {
        let mut game = Game::new(Config::default(), StdRng::seed_from_u64(42));
        b.iter(|| game.step(Direction::new(1, 1)))
    });
    c.bench_function("Game::update crowded", |b| {
        let mut config = Config::default();
        config.food_count = 10_000;
        config.virus_count = 500;
        let mut game = Game::new(config, StdRng::seed_from_u64(42));
        b.iter(|| game.update())
    });
    c.bench_function("check_collision", |b| {
        let config = Config::default();
        let player = Player::at_center(&config);
        let virus = Virus::new(Point::new(610.0, 405.0), &config);
        b.iter(|| check_collision(&player, &virus))
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
