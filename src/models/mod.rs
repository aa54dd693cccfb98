//! Persisted entities
//!
//! Row structs mapping one-to-one to the SQLite schema.

pub mod fuel_price;
pub mod refuel;
pub mod vehicle;

pub use fuel_price::FuelPrice;
pub use refuel::{RefuelEvent, RefuelWithVehicle};
pub use vehicle::Vehicle;
