//! Domain services
//!
//! `price_sync` owns every mutation of the price-history table and the
//! vehicle repointing that must travel with it; `price_events` is the
//! notification contract collaborators subscribe to.

pub mod price_events;
pub mod price_sync;

pub use price_events::{PriceEvent, PriceEventBus};
pub use price_sync::PriceSyncCoordinator;
