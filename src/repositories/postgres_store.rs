use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{PageWindow, Store};
use crate::models::{AssignedRoute, Driver, NewDriver, NewRoute, Route, RouteWithDriver};
use crate::utils::errors::AppResult;

const DRIVER_COLUMNS: &str = "id, name, license_type, availability";

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_driver(&self, driver: NewDriver) -> AppResult<Driver> {
        let driver = sqlx::query_as::<_, Driver>(&format!(
            r#"
            INSERT INTO drivers (name, license_type, availability)
            VALUES ($1, $2, $3)
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(driver.name)
        .bind(driver.license_type)
        .bind(driver.availability)
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    async fn list_drivers(&self) -> AppResult<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    async fn find_driver(&self, id: i32) -> AppResult<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(driver)
    }

    async fn list_available_drivers(&self) -> AppResult<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers WHERE availability ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    async fn insert_route_with_assignment(
        &self,
        route: NewRoute,
    ) -> AppResult<(Route, Option<Driver>)> {
        let mut tx = self.pool.begin().await?;

        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (start_location, end_location, distance, estimated_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id, start_location, end_location, distance, estimated_time
            "#,
        )
        .bind(route.start_location)
        .bind(route.end_location)
        .bind(route.distance)
        .bind(route.estimated_time)
        .fetch_one(&mut *tx)
        .await?;

        let driver = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers WHERE availability ORDER BY id LIMIT 1"
        ))
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(driver) = &driver {
            sqlx::query("INSERT INTO assignments (driver_id, route_id) VALUES ($1, $2)")
                .bind(driver.id)
                .bind(route.id)
                .execute(&mut *tx)
                .await?;
            debug!("🔗 Ruta {} asignada al conductor {}", route.id, driver.id);
        }

        tx.commit().await?;

        Ok((route, driver))
    }

    async fn list_routes(&self, window: Option<PageWindow>) -> AppResult<Vec<RouteWithDriver>> {
        // LIMIT NULL equivale a sin límite en PostgreSQL
        let (limit, offset) = match window {
            Some(w) => (Some(w.limit), w.offset),
            None => (None, 0),
        };

        let routes = sqlx::query_as::<_, RouteWithDriver>(
            r#"
            SELECT r.id, r.start_location, r.end_location, r.distance, r.estimated_time,
                   d.name AS driver_name
            FROM routes r
            LEFT JOIN LATERAL (
                SELECT a.driver_id
                FROM assignments a
                WHERE a.route_id = r.id
                ORDER BY a.id
                LIMIT 1
            ) first_assignment ON TRUE
            LEFT JOIN drivers d ON d.id = first_assignment.driver_id
            ORDER BY r.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    async fn count_routes(&self) -> AppResult<i64> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM routes")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn list_driver_assignments(&self, driver_id: i32) -> AppResult<Vec<AssignedRoute>> {
        let assignments = sqlx::query_as::<_, AssignedRoute>(
            r#"
            SELECT a.assigned_at,
                   r.id, r.start_location, r.end_location, r.distance, r.estimated_time
            FROM assignments a
            JOIN routes r ON r.id = a.route_id
            WHERE a.driver_id = $1
            ORDER BY a.id
            "#,
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }
}
