//! Airport simulation: planes land and take off subject to capacity and weather.
//!
//! [`airport::Airport`] is the core. Weather and planes plug in through the
//! [`weather::Weather`] and [`aircraft::Plane`] traits; [`tower::Tower`]
//! wires an airport to a fleet loaded from a [`scenario::Scenario`].

pub mod aircraft;
pub mod airport;
pub mod logger;
pub mod scenario;
pub mod tower;
pub mod weather;
