//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean a las tablas
//! `drivers`, `routes` y `assignments`.

pub mod assignment;
pub mod driver;
pub mod route;

pub use assignment::{AssignedRoute, Assignment};
pub use driver::{Driver, NewDriver};
pub use route::{NewRoute, Route, RouteWithDriver};
