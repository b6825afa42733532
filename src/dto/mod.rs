//! DTOs de la API
//!
//! Requests y responses serializados en camelCase.

pub mod driver_dto;
pub mod route_dto;
pub mod schedule_dto;
