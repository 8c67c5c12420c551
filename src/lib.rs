#[macro_use]
extern crate log;
extern crate macroquad;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;
extern crate thiserror;

pub mod backend;
pub mod canvas;
pub mod config;
pub mod game;
pub mod input;
pub mod interactor;
pub mod limiter;
pub mod models;
