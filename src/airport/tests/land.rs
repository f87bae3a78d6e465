use crate::airport::error::{AirportError, ErrorKind, Movement};
use crate::airport::tests::utils::{clear_airport, fill, id, storm, CountingWeather, MockPlane};
use crate::airport::{Airport, DEFAULT_CAPACITY};
use crate::weather::FixedWeather;

#[test]
fn test_new_airport_starts_empty() {
    let airport = Airport::new(FixedWeather::clear());
    assert!(airport.planes().is_empty());
    assert!(airport.is_empty());

    let airport = clear_airport(50);
    assert!(airport.planes().is_empty());
}

#[test]
fn test_default_capacity() {
    assert_eq!(DEFAULT_CAPACITY, 100);
    assert_eq!(100, Airport::new(FixedWeather::clear()).capacity());
}

#[test]
fn test_custom_capacity() {
    assert_eq!(50, clear_airport(50).capacity());
}

#[test]
fn test_zero_capacity_rejected() {
    let result = Airport::with_capacity(FixedWeather::clear(), 0);
    assert_eq!(Some(AirportError::InvalidCapacity), result.err());
}

#[test]
fn test_land_returns_grounded_planes() {
    let mut airport = clear_airport(10);
    let mut plane = MockPlane::new("PLANE_1");

    let planes = airport.land(&mut plane).unwrap();

    assert_eq!(&[id("PLANE_1")], planes);
    assert_eq!(1, plane.grounded);
    assert_eq!(0, plane.launched);
}

#[test]
fn test_land_keeps_landing_order() {
    let mut airport = clear_airport(10);
    fill(&mut airport, 2);
    let mut third = MockPlane::new("PLANE_X");

    let planes = airport.land(&mut third).unwrap();

    assert_eq!(&[id("PLANE_0"), id("PLANE_1"), id("PLANE_X")], planes);
}

#[test]
fn test_land_twice_is_rejected() {
    let mut airport = clear_airport(10);
    let mut plane = MockPlane::new("PLANE_1");
    airport.land(&mut plane).unwrap();

    let err = airport.land(&mut plane).unwrap_err();

    assert_eq!(AirportError::AlreadyLanded, err);
    assert_eq!("This plane has already landed", err.to_string());
    assert_eq!(1, airport.len());
    assert_eq!(1, plane.grounded);
}

#[test]
fn test_same_id_counts_as_same_plane() {
    let mut airport = clear_airport(10);
    airport.land(&mut MockPlane::new("PLANE_1")).unwrap();

    let mut twin = MockPlane::new("PLANE_1");
    assert_eq!(Err(AirportError::AlreadyLanded), airport.land(&mut twin).map(|_| ()));
    assert_eq!(0, twin.grounded);
}

#[test]
fn test_land_when_full_is_rejected() {
    let mut airport = clear_airport(3);
    fill(&mut airport, 3);
    assert!(airport.is_full());
    let mut late = MockPlane::new("LATE");

    let err = airport.land(&mut late).unwrap_err();

    assert_eq!(AirportError::AtCapacity, err);
    assert_eq!(ErrorKind::Capacity, err.kind());
    assert_eq!("This airport is at maximum capacity", err.to_string());
    assert_eq!(3, airport.len());
    assert_eq!(0, late.grounded);
}

#[test]
fn test_duplicate_reported_before_capacity() {
    let mut airport = clear_airport(2);
    let mut planes = fill(&mut airport, 2);

    let err = airport.land(&mut planes[0]).unwrap_err();

    assert_eq!(AirportError::AlreadyLanded, err);
}

#[test]
fn test_land_in_storm_is_rejected() {
    let mut airport = clear_airport(10);
    storm(&mut airport);
    let mut plane = MockPlane::new("PLANE_1");

    let err = airport.land(&mut plane).unwrap_err();

    assert_eq!(AirportError::StormyWeather(Movement::Landing), err);
    assert_eq!("The weather does not permit landing", err.to_string());
    assert!(airport.is_empty());
    assert_eq!(0, plane.grounded);
}

#[test]
fn test_storm_preempts_duplicate_and_capacity() {
    let mut airport = clear_airport(1);
    let mut planes = fill(&mut airport, 1);
    storm(&mut airport);

    let duplicate = airport.land(&mut planes[0]).unwrap_err();
    let overflow = airport.land(&mut MockPlane::new("PLANE_9")).unwrap_err();

    assert_eq!(ErrorKind::Weather, duplicate.kind());
    assert_eq!(ErrorKind::Weather, overflow.kind());
    assert_eq!(1, airport.len());
}

#[test]
fn test_weather_queried_on_every_landing() {
    let mut airport = Airport::with_capacity(CountingWeather::default(), 5).unwrap();
    airport.land(&mut MockPlane::new("A")).unwrap();
    airport.land(&mut MockPlane::new("B")).unwrap();
    airport.weather_mut().stormy = true;
    assert!(airport.land(&mut MockPlane::new("C")).is_err());

    assert_eq!(3, airport.weather().queries);
}
