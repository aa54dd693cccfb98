//! Request/response DTOs for the HTTP API

pub mod common;
pub mod fuel_price_dto;
pub mod refuel_dto;
pub mod vehicle_dto;
