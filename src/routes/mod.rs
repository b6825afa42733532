pub mod driver_routes;
pub mod health_routes;
pub mod route_routes;
pub mod schedule_routes;

use axum::{extract::rejection::JsonRejection, Json};

use crate::utils::errors::AppResult;

/// Body JSON de una request de creación. Sin `Content-Type: application/json`
/// el body se lee como un objeto vacío; el resto de rechazos son 400.
pub(crate) fn json_or_empty<T: Default>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}
