//! Servicios de negocio
//!
//! Lógica pura, sin acceso a persistencia.

pub mod scheduling;
