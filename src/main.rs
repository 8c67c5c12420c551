extern crate agario;
extern crate chrono;
extern crate fern;
#[macro_use]
extern crate log;
extern crate macroquad;
extern crate rand;

use std::process;

use macroquad::prelude::Conf;
use rand::rngs::StdRng;
use rand::SeedableRng;

use agario::config::{self, Config, ConfigError};
use agario::interactor;

fn main() {
    init_logging();
    let (config, rng) = match setup() {
        Ok(setup) => setup,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    macroquad::Window::from_config(window_conf(&config), interactor::run(config, rng));
}

fn setup() -> Result<(Config, StdRng), ConfigError> {
    let config = Config::load()?;
    let rng = match config::seed_from_env()? {
        Some(seed) => {
            info!("seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    Ok((config, rng))
}

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.map_width as i32,
        window_height: config.map_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_logging() {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} {} {}",
                chrono::Local::now().format("%H:%M:%S%.6f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr());
    #[cfg(feature = "debug")]
    let dispatch = dispatch.level(log::LevelFilter::Debug).chain(
        fern::log_file("/tmp/agario.log").expect("opening log file failed"),
    );
    dispatch.apply().expect("logging initialization failed");
    info!("agario {}", env!("CARGO_PKG_VERSION"));
}
