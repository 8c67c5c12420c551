use std::env;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Mass, Rgb};

pub const CONFIG_VAR: &str = "AGARIO_CONFIG";
pub const SEED_VAR: &str = "AGARIO_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config must be a JSON object")]
    NotAnObject,
    #[error("bad value for {key}: {source}")]
    BadValue {
        key: String,
        source: serde_json::Error,
    },
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
    #[error("AGARIO_SEED is not an unsigned integer: {0:?}")]
    BadSeed(String),
}

macro_rules! impl_config {
    ($($name:ident: $type:ty = $value:expr),* $(,)*) => {
        /// Game settings, read once at startup and never changed afterwards.
        #[derive(Debug, Clone, PartialEq)]
        pub struct Config {
            $(
                pub $name: $type
            ),*
        }

        impl Config {
            /// Builds a config from a JSON object with upper-case keys.
            /// Missing keys keep their defaults.
            pub fn from_json(json: &serde_json::Value) -> Result<Config, ConfigError> {
                if !json.is_object() {
                    return Err(ConfigError::NotAnObject);
                }
                let config = Config {
                    $(
                        $name: get_or_default(json, &stringify!($name).to_uppercase(), $value)?
                    ),*
                };
                config.validate()?;
                Ok(config)
            }
        }

        impl Default for Config {
            fn default() -> Config {
                Config {
                    $(
                        $name: $value
                    ),*
                }
            }
        }
    };
}

fn get_or_default<T: DeserializeOwned>(
    json: &serde_json::Value,
    key: &str,
    default_value: T,
) -> Result<T, ConfigError> {
    match json.get(key) {
        Some(value) => serde_json::from_value(value.clone()).map_err(|source| {
            ConfigError::BadValue {
                key: key.to_string(),
                source,
            }
        }),
        None => Ok(default_value),
    }
}

impl_config! {
    map_width: u32 = 1200,
    map_height: u32 = 800,
    player_start_mass: Mass = 10,
    player_color: Rgb = Rgb(0, 128, 255),
    food_count: usize = 100,
    food_mass: Mass = 1,
    food_color: Rgb = Rgb(0, 255, 0),
    virus_count: usize = 5,
    virus_mass: Mass = 50,
    virus_color: Rgb = Rgb(128, 0, 128),
    background_color: Rgb = Rgb(240, 240, 240),
    hud_color: Rgb = Rgb(0, 0, 0),
    hud_font_size: f64 = 36.0,
    ticks_per_second: u32 = 60,
    window_title: String = String::from("Agar.io Clone"),
}

impl Config {
    pub fn parse(s: &str) -> Result<Config, ConfigError> {
        Config::from_json(&serde_json::from_str(s)?)
    }

    /// Reads overrides from `AGARIO_CONFIG`, falling back to defaults when unset.
    pub fn load() -> Result<Config, ConfigError> {
        match env::var(CONFIG_VAR) {
            Ok(s) => Config::parse(&s),
            Err(env::VarError::NotPresent) => Ok(Config::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(CONFIG_VAR)),
        }
    }

    pub fn width(&self) -> f64 {
        self.map_width as f64
    }

    pub fn height(&self) -> f64 {
        self.map_height as f64
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("MAP_WIDTH", self.map_width > 0),
            ("MAP_HEIGHT", self.map_height > 0),
            ("PLAYER_START_MASS", self.player_start_mass > 0),
            ("FOOD_MASS", self.food_mass > 0),
            ("VIRUS_MASS", self.virus_mass > 0),
            ("HUD_FONT_SIZE", self.hud_font_size > 0.0),
            ("TICKS_PER_SECOND", self.ticks_per_second > 0),
        ];
        match positive.iter().find(|&&(_, ok)| !ok) {
            Some(&(key, _)) => Err(ConfigError::NotPositive(key)),
            None => Ok(()),
        }
    }
}

/// Optional RNG seed from `AGARIO_SEED`.
pub fn seed_from_env() -> Result<Option<u64>, ConfigError> {
    match env::var(SEED_VAR) {
        Ok(s) => s.trim().parse().map(Some).map_err(|_| ConfigError::BadSeed(s)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(SEED_VAR)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!((config.map_width, config.map_height), (1200, 800));
        assert_eq!(config.player_start_mass, 10);
        assert_eq!(config.player_color, Rgb(0, 128, 255));
        assert_eq!((config.food_count, config.food_mass), (100, 1));
        assert_eq!((config.virus_count, config.virus_mass), (5, 50));
        assert_eq!(config.background_color, Rgb(240, 240, 240));
        assert_eq!(config.ticks_per_second, 60);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::from_json(&json!({})).unwrap(), Config::default());
    }

    #[test]
    fn overrides_by_upper_case_key() {
        let config = Config::from_json(&json!({
            "MAP_WIDTH": 640,
            "FOOD_COLOR": [1, 2, 3],
            "WINDOW_TITLE": "blobs",
            "map_height": 1,
        })).unwrap();
        assert_eq!(config.map_width, 640);
        assert_eq!(config.food_color, Rgb(1, 2, 3));
        assert_eq!(config.window_title, "blobs");
        assert_eq!(config.map_height, 800);
    }

    #[test]
    fn rejects_wrong_types() {
        match Config::from_json(&json!({ "VIRUS_MASS": "heavy" })) {
            Err(ConfigError::BadValue { ref key, .. }) => assert_eq!(key, "VIRUS_MASS"),
            other => panic!("unexpected {:?}", other),
        }
        match Config::from_json(&json!({ "PLAYER_COLOR": [1, 2] })) {
            Err(ConfigError::BadValue { ref key, .. }) => assert_eq!(key, "PLAYER_COLOR"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_non_positive() {
        match Config::from_json(&json!({ "MAP_WIDTH": 0 })) {
            Err(ConfigError::NotPositive(key)) => assert_eq!(key, "MAP_WIDTH"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(Config::from_json(&json!({ "TICKS_PER_SECOND": 0 })).is_err());
        assert!(Config::from_json(&json!({ "FOOD_MASS": -1 })).is_err());
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(match Config::parse("[1, 2]") {
            Err(ConfigError::NotAnObject) => true,
            _ => false,
        });
        assert!(match Config::parse("{") {
            Err(ConfigError::Json(_)) => true,
            _ => false,
        });
    }
}
