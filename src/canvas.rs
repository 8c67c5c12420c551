use crate::models::{Point, Rgb};

/// A surface the game paints itself onto.
pub trait Canvas {
    fn fill(&mut self, color: Rgb);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb);
    /// `at` is the top-left corner of the text box.
    fn draw_text(&mut self, text: &str, at: Point, size: f64, color: Rgb);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Rgb),
    Circle {
        center: Point,
        radius: f64,
        color: Rgb,
    },
    Text {
        text: String,
        at: Point,
        size: f64,
        color: Rgb,
    },
}

/// Headless canvas that keeps every call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> RecordingCanvas {
        Default::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64, Rgb)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Text { ref text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, at: Point, size: f64, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            size,
            color,
        });
    }
}
