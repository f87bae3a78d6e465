use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_STORM_CHANCE: f64 = 0.2;

/// Source of the "is it stormy right now?" answer.
///
/// Queried on every landing and take-off, so implementations may change
/// their answer between calls.
pub trait Weather {
    fn is_stormy(&mut self) -> bool;
}

impl<W: Weather + ?Sized> Weather for Box<W> {
    fn is_stormy(&mut self) -> bool {
        (**self).is_stormy()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Forecast {
    #[default]
    Clear,
    Stormy,
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Forecast::Clear => write!(f, "clear"),
            Forecast::Stormy => write!(f, "stormy"),
        }
    }
}

/// Weather that only changes when told to.
#[derive(Debug, Clone, Default)]
pub struct FixedWeather {
    forecast: Forecast,
}

impl FixedWeather {
    pub fn new(forecast: Forecast) -> Self {
        FixedWeather { forecast }
    }

    pub fn clear() -> Self {
        Self::new(Forecast::Clear)
    }

    pub fn stormy() -> Self {
        Self::new(Forecast::Stormy)
    }

    pub fn set(&mut self, forecast: Forecast) {
        self.forecast = forecast;
    }

    pub fn forecast(&self) -> Forecast {
        self.forecast
    }
}

impl Weather for FixedWeather {
    fn is_stormy(&mut self) -> bool {
        self.forecast == Forecast::Stormy
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("storm chance must be within 0.0..=1.0, got {0}")]
pub struct InvalidStormChance(pub f64);

pub struct RandomWeather {
    rng: ChaChaRng,
    storm_chance: f64,
}

impl RandomWeather {
    pub fn new(storm_chance: f64, rng: ChaChaRng) -> Result<Self, InvalidStormChance> {
        if !(0.0..=1.0).contains(&storm_chance) {
            return Err(InvalidStormChance(storm_chance));
        }
        Ok(RandomWeather { rng, storm_chance })
    }

    pub fn seeded(storm_chance: f64, seed: u64) -> Result<Self, InvalidStormChance> {
        Self::new(storm_chance, ChaChaRng::seed_from_u64(seed))
    }

    pub fn from_entropy(storm_chance: f64) -> Result<Self, InvalidStormChance> {
        Self::new(storm_chance, ChaChaRng::from_rng(&mut rand::rng()))
    }

    pub fn storm_chance(&self) -> f64 {
        self.storm_chance
    }
}

impl Weather for RandomWeather {
    fn is_stormy(&mut self) -> bool {
        self.rng.random_bool(self.storm_chance)
    }
}
