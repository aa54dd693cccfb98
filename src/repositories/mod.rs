//! Data access layer
//!
//! One repository per persisted entity. Mutations of the price-history
//! table do not live here: they cascade into the vehicles table and are
//! owned by `services::price_sync` so the repoint pass shares the
//! mutation's transaction.

pub mod fuel_price_repository;
pub mod refuel_repository;
pub mod vehicle_repository;

pub use fuel_price_repository::FuelPriceRepository;
pub use refuel_repository::RefuelRepository;
pub use vehicle_repository::VehicleRepository;
