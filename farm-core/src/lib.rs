pub mod area;
pub mod calendar;
pub mod climate;
pub mod contracts;
pub mod date_range;
pub mod error;
pub mod irrigation;
pub mod repository;
pub mod schedule;
pub mod settings;
pub mod user;
pub mod weather;

pub use error::{FarmError, Result};
