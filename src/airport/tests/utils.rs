use crate::aircraft::{Plane, PlaneId};
use crate::airport::Airport;
use crate::weather::{FixedWeather, Forecast, Weather};
use proptest::prelude::Strategy;
use std::sync::Arc;

pub fn id(s: &str) -> PlaneId {
    Arc::from(s)
}

/// Plane that only counts how often its hooks ran.
#[derive(Debug, Clone)]
pub struct MockPlane {
    pub id: PlaneId,
    pub grounded: usize,
    pub launched: usize,
}

impl MockPlane {
    pub fn new(plane_id: &str) -> Self {
        MockPlane {
            id: id(plane_id),
            grounded: 0,
            launched: 0,
        }
    }
}

impl Plane for MockPlane {
    fn id(&self) -> &PlaneId {
        &self.id
    }

    fn ground(&mut self) {
        self.grounded += 1;
    }

    fn take_flight(&mut self) {
        self.launched += 1;
    }
}

/// Weather that records how many times it was asked.
#[derive(Debug, Default)]
pub struct CountingWeather {
    pub stormy: bool,
    pub queries: usize,
}

impl Weather for CountingWeather {
    fn is_stormy(&mut self) -> bool {
        self.queries += 1;
        self.stormy
    }
}

pub fn clear_airport(capacity: usize) -> Airport<FixedWeather> {
    Airport::with_capacity(FixedWeather::clear(), capacity).unwrap()
}

pub fn storm(airport: &mut Airport<FixedWeather>) {
    airport.weather_mut().set(Forecast::Stormy);
}

pub fn clear(airport: &mut Airport<FixedWeather>) {
    airport.weather_mut().set(Forecast::Clear);
}

/// Lands `count` distinct planes named `PLANE_0..`, returning them.
pub fn fill(airport: &mut Airport<FixedWeather>, count: usize) -> Vec<MockPlane> {
    (0..count)
        .map(|i| {
            let mut plane = MockPlane::new(&format!("PLANE_{}", i));
            airport.land(&mut plane).unwrap();
            plane
        })
        .collect()
}

pub fn arb_plane_id() -> impl Strategy<Value = String> {
    "[A-Z]{2}-[A-Z]{3}"
}
