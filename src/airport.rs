pub mod error;
#[cfg(test)]
mod tests;

use crate::aircraft::{Plane, PlaneId};
use crate::airport::error::{AirportError, Movement, Result};
use crate::weather::Weather;

pub const DEFAULT_CAPACITY: usize = 100;
pub const DEPARTURE_CONFIRMATION: &str = "This plane has left the airport";

/// Grounded planes plus the rules for letting them in and out.
///
/// The airport only records plane ids; the planes themselves stay with the
/// caller and are borrowed just long enough to run their `ground` or
/// `take_flight` hook. Weather is consulted before anything else on every
/// movement, and a rejected movement leaves both the airport and the plane
/// untouched.
pub struct Airport<W: Weather> {
    capacity: usize,
    planes: Vec<PlaneId>,
    weather: W,
}

impl<W: Weather> Airport<W> {
    pub fn new(weather: W) -> Self {
        Airport {
            capacity: DEFAULT_CAPACITY,
            planes: Vec::new(),
            weather,
        }
    }

    pub fn with_capacity(weather: W, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AirportError::InvalidCapacity);
        }
        Ok(Airport {
            capacity,
            planes: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            weather,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grounded plane ids in landing order.
    pub fn planes(&self) -> &[PlaneId] {
        &self.planes
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.planes.len() >= self.capacity
    }

    pub fn weather(&self) -> &W {
        &self.weather
    }

    pub fn weather_mut(&mut self) -> &mut W {
        &mut self.weather
    }

    pub fn contains(&self, plane_id: &PlaneId) -> bool {
        self.planes.iter().any(|id| id == plane_id)
    }

    pub fn plane_in_airport<P: Plane + ?Sized>(&self, plane: &P) -> bool {
        self.contains(plane.id())
    }

    pub fn land<P: Plane + ?Sized>(&mut self, plane: &mut P) -> Result<&[PlaneId]> {
        if self.weather.is_stormy() {
            tracing::debug!(plane = %plane.id(), "landing refused: stormy");
            return Err(AirportError::StormyWeather(Movement::Landing));
        }
        if self.contains(plane.id()) {
            tracing::debug!(plane = %plane.id(), "landing refused: already grounded");
            return Err(AirportError::AlreadyLanded);
        }
        if self.is_full() {
            tracing::debug!(plane = %plane.id(), capacity = self.capacity, "landing refused: full");
            return Err(AirportError::AtCapacity);
        }

        plane.ground();
        self.planes.push(plane.id().clone());
        tracing::info!(plane = %plane.id(), grounded = self.planes.len(), "landed");
        Ok(&self.planes)
    }

    pub fn take_off<P: Plane + ?Sized>(&mut self, plane: &mut P) -> Result<&'static str> {
        if self.weather.is_stormy() {
            tracing::debug!(plane = %plane.id(), "take off refused: stormy");
            return Err(AirportError::StormyWeather(Movement::TakeOff));
        }
        let Some(idx) = self.planes.iter().position(|id| id == plane.id()) else {
            tracing::debug!(plane = %plane.id(), "take off refused: not grounded here");
            return Err(AirportError::AlreadyInFlight);
        };

        plane.take_flight();
        self.planes.remove(idx);
        tracing::info!(plane = %plane.id(), grounded = self.planes.len(), "departed");
        Ok(DEPARTURE_CONFIRMATION)
    }
}
