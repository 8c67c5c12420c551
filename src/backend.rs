//! Window, keyboard and drawing on top of macroquad.

use macroquad::prelude as mq;

use crate::canvas::Canvas;
use crate::input::Input;
use crate::models::{Direction, Point, Rgb};

// macroquad places text by its baseline; the game places it by the top edge.
const TEXT_BASELINE: f64 = 0.75;

fn to_color(color: Rgb) -> mq::Color {
    mq::Color::from_rgba(color.0, color.1, color.2, 255)
}

/// The window's back buffer.
#[derive(Debug, Default)]
pub struct Screen;

impl Canvas for Screen {
    fn fill(&mut self, color: Rgb) {
        mq::clear_background(to_color(color));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        mq::draw_circle(center.x as f32, center.y as f32, radius as f32, to_color(color));
    }

    fn draw_text(&mut self, text: &str, at: Point, size: f64, color: Rgb) {
        mq::draw_text(
            text,
            at.x as f32,
            (at.y + size * TEXT_BASELINE) as f32,
            size as f32,
            to_color(color),
        );
    }
}

/// Arrow keys or WASD; Escape or closing the window quits.
#[derive(Debug, Default)]
pub struct Keyboard;

fn held(keys: &[mq::KeyCode]) -> bool {
    keys.iter().any(|&key| mq::is_key_down(key))
}

impl Input for Keyboard {
    fn direction(&self) -> Direction {
        Direction::from_keys(
            held(&[mq::KeyCode::Left, mq::KeyCode::A]),
            held(&[mq::KeyCode::Right, mq::KeyCode::D]),
            held(&[mq::KeyCode::Up, mq::KeyCode::W]),
            held(&[mq::KeyCode::Down, mq::KeyCode::S]),
        )
    }

    fn quit_requested(&self) -> bool {
        mq::is_quit_requested() || mq::is_key_pressed(mq::KeyCode::Escape)
    }
}
