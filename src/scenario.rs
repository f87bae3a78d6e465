use crate::aircraft::{Aircraft, PlaneId};
use crate::airport::error::AirportError;
use crate::airport::DEFAULT_CAPACITY;
use crate::tower::TowerError;
use crate::weather::{
    FixedWeather, Forecast, InvalidStormChance, RandomWeather, Weather, DEFAULT_STORM_CHANCE,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("cannot read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Airport(#[from] AirportError),

    #[error(transparent)]
    StormChance(#[from] InvalidStormChance),

    #[error("aircraft {0} is listed more than once")]
    DuplicateAircraft(PlaneId),

    #[error(transparent)]
    Tower(#[from] TowerError),
}

fn default_storm_chance() -> f64 {
    DEFAULT_STORM_CHANCE
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WeatherConfig {
    Random {
        #[serde(default = "default_storm_chance")]
        storm_chance: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
    Clear,
    Stormy,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        WeatherConfig::Random {
            storm_chance: DEFAULT_STORM_CHANCE,
            seed: None,
        }
    }
}

impl WeatherConfig {
    pub fn build(&self) -> Result<Box<dyn Weather>, InvalidStormChance> {
        let weather: Box<dyn Weather> = match self {
            WeatherConfig::Random {
                storm_chance,
                seed: Some(seed),
            } => Box::new(RandomWeather::seeded(*storm_chance, *seed)?),
            WeatherConfig::Random {
                storm_chance,
                seed: None,
            } => Box::new(RandomWeather::from_entropy(*storm_chance)?),
            WeatherConfig::Clear => Box::new(FixedWeather::new(Forecast::Clear)),
            WeatherConfig::Stormy => Box::new(FixedWeather::new(Forecast::Stormy)),
        };
        Ok(weather)
    }

    /// Chance used when random weather is restored at runtime.
    pub fn storm_chance(&self) -> f64 {
        match self {
            WeatherConfig::Random { storm_chance, .. } => *storm_chance,
            _ => DEFAULT_STORM_CHANCE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub capacity: Option<usize>,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub fleet: Vec<Aircraft>,
}

impl Scenario {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(data)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }

    /// Replaces the weather seed, turning fixed weather into seeded random weather.
    pub fn reseed(&mut self, seed: u64) {
        let storm_chance = self.weather.storm_chance();
        self.weather = WeatherConfig::Random {
            storm_chance,
            seed: Some(seed),
        };
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.capacity == Some(0) {
            return Err(AirportError::InvalidCapacity.into());
        }
        if let WeatherConfig::Random { storm_chance, .. } = self.weather {
            if !(0.0..=1.0).contains(&storm_chance) {
                return Err(InvalidStormChance(storm_chance).into());
            }
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.fleet.iter().find(|a| !seen.insert(a.id.clone())) {
            return Err(ScenarioError::DuplicateAircraft(dup.id.clone()));
        }
        Ok(())
    }
}
