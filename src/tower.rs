use crate::aircraft::{Aircraft, PlaneId};
use crate::airport::error::AirportError;
use crate::airport::Airport;
use crate::scenario::{Scenario, ScenarioError, WeatherConfig};
use crate::weather::{FixedWeather, Forecast, InvalidStormChance, RandomWeather, Weather};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TowerError {
    #[error("No aircraft {0} in the fleet")]
    UnknownPlane(String),

    #[error(transparent)]
    Airport(#[from] AirportError),

    #[error(transparent)]
    Weather(#[from] InvalidStormChance),

    #[error("aircraft {0} is listed more than once")]
    DuplicateAircraft(PlaneId),
}

/// The airport together with the fleet it serves, addressed by plane id.
pub struct Tower {
    airport: Airport<Box<dyn Weather>>,
    fleet: Vec<Aircraft>,
    fleet_index: HashMap<PlaneId, usize>,
    storm_chance: f64,
    seed: Option<u64>,
    forecast: Option<Forecast>,
}

impl Tower {
    /// `storm_chance` and `seed` describe the random weather restored by
    /// `set_forecast(None)`; with a seed the restored sequence restarts from it.
    pub fn new(
        airport: Airport<Box<dyn Weather>>,
        fleet: Vec<Aircraft>,
        storm_chance: f64,
        seed: Option<u64>,
    ) -> Result<Tower, TowerError> {
        if !(0.0..=1.0).contains(&storm_chance) {
            return Err(InvalidStormChance(storm_chance).into());
        }
        let mut fleet_index = HashMap::with_capacity(fleet.len());
        for (i, aircraft) in fleet.iter().enumerate() {
            if fleet_index.insert(aircraft.id.clone(), i).is_some() {
                return Err(TowerError::DuplicateAircraft(aircraft.id.clone()));
            }
        }
        Ok(Tower {
            airport,
            fleet,
            fleet_index,
            storm_chance,
            seed,
            forecast: None,
        })
    }

    pub fn from_scenario(scenario: Scenario) -> Result<Tower, ScenarioError> {
        scenario.validate()?;
        let weather = scenario.weather.build()?;
        let airport = Airport::with_capacity(weather, scenario.capacity())?;
        tracing::debug!(
            capacity = airport.capacity(),
            fleet = scenario.fleet.len(),
            "tower ready"
        );
        let (forecast, seed) = match scenario.weather {
            WeatherConfig::Clear => (Some(Forecast::Clear), None),
            WeatherConfig::Stormy => (Some(Forecast::Stormy), None),
            WeatherConfig::Random { seed, .. } => (None, seed),
        };
        let storm_chance = scenario.weather.storm_chance();
        let mut tower = Tower::new(airport, scenario.fleet, storm_chance, seed)?;
        tower.forecast = forecast;
        Ok(tower)
    }

    fn index_of(&self, plane_id: &str) -> Result<usize, TowerError> {
        self.fleet_index
            .get(plane_id)
            .copied()
            .ok_or_else(|| TowerError::UnknownPlane(plane_id.to_string()))
    }

    pub fn land(&mut self, plane_id: &str) -> Result<&[PlaneId], TowerError> {
        let idx = self.index_of(plane_id)?;
        Ok(self.airport.land(&mut self.fleet[idx])?)
    }

    pub fn take_off(&mut self, plane_id: &str) -> Result<&'static str, TowerError> {
        let idx = self.index_of(plane_id)?;
        Ok(self.airport.take_off(&mut self.fleet[idx])?)
    }

    pub fn is_grounded(&self, plane_id: &str) -> Result<bool, TowerError> {
        let idx = self.index_of(plane_id)?;
        Ok(self.airport.plane_in_airport(&self.fleet[idx]))
    }

    pub fn aircraft(&self, plane_id: &str) -> Option<&Aircraft> {
        self.index_of(plane_id).ok().map(|idx| &self.fleet[idx])
    }

    pub fn fleet(&self) -> &[Aircraft] {
        &self.fleet
    }

    pub fn airport(&self) -> &Airport<Box<dyn Weather>> {
        &self.airport
    }

    /// `None` means random weather.
    pub fn forecast(&self) -> Option<Forecast> {
        self.forecast
    }

    /// Pins the weather to `forecast`, or hands it back to chance with `None`.
    pub fn set_forecast(&mut self, forecast: Option<Forecast>) -> Result<(), TowerError> {
        let weather: Box<dyn Weather> = match forecast {
            Some(f) => Box::new(FixedWeather::new(f)),
            None => match self.seed {
                Some(seed) => Box::new(RandomWeather::seeded(self.storm_chance, seed)?),
                None => Box::new(RandomWeather::from_entropy(self.storm_chance)?),
            },
        };
        *self.airport.weather_mut() = weather;
        self.forecast = forecast;
        tracing::info!(
            weather = %forecast.map(|f| f.to_string()).unwrap_or_else(|| "random".to_string()),
            "weather changed"
        );
        Ok(())
    }
}
