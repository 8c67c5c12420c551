use macroquad::prelude::{next_frame, prevent_quit};
use rand::Rng;

use crate::backend::{Keyboard, Screen};
use crate::canvas::Canvas;
use crate::config::Config;
use crate::game::{Game, TickReport};
use crate::input::Input;
use crate::limiter::FrameLimiter;
use crate::models::Blob;

/// One loop iteration: input, move, update, draw. `None` once the player quits.
pub fn frame<R, I, C>(game: &mut Game<R>, input: &I, canvas: &mut C) -> Option<TickReport>
where
    R: Rng,
    I: Input,
    C: Canvas,
{
    if input.quit_requested() {
        return None;
    }
    let report = game.step(input.direction());
    game.draw(canvas);
    Some(report)
}

pub async fn run<R: Rng + 'static>(config: Config, rng: R) {
    let mut game = Game::new(config, rng);
    let mut limiter = FrameLimiter::new(game.config().ticks_per_second);
    let keyboard = Keyboard;
    let mut screen = Screen;
    prevent_quit();
    while frame(&mut game, &keyboard, &mut screen).is_some() {
        next_frame().await;
        limiter.wait();
    }
    info!(
        "quit after {} ticks: score {}, mass {}, {} slow frames",
        game.tick(),
        game.player().score(),
        game.player().m(),
        limiter.slow_frames()
    );
}
