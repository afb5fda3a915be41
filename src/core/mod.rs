//! Core flight-camera types and utilities

pub mod types;
pub mod error;
pub mod logging;
pub mod time;
pub mod config;
pub mod camera;
pub mod input;
pub mod flight;

pub use types::*;
pub use error::Error;
