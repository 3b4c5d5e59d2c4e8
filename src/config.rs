/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub car: CarConfig,
    pub demo: DemoConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CarConfig {
    pub n_floors: i32,
    pub verbose: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub step_delay_ms: u64,
    pub requests: Vec<i32>,
}

impl Default for CarConfig {
    fn default() -> Self {
        CarConfig {
            n_floors: 2,
            verbose: false,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            step_delay_ms: 0,
            requests: Vec::new(),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
