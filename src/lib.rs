//! Flightcam - a flight-sim style first-person camera controller

pub mod core;
