pub mod fuel_price_routes;
pub mod refuel_routes;
pub mod vehicle_routes;
