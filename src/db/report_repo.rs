// src/db/report_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::reports::{ActiveStayLocation, ClosedStayRate, OccupancySummary},
};

#[derive(Clone, Default)]
pub struct ReportRepository;

impl ReportRepository {
    pub fn new() -> Self {
        Self
    }

    /// Makes every later statement of the current transaction read the same snapshot.
    /// Must run before any other statement of that transaction.
    pub async fn use_snapshot<'e, E>(&self, executor: E) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(executor)
            .await?;

        Ok(())
    }

    /// One row per room type, types without rooms included.
    pub async fn occupancy_by_type<'e, E>(&self, executor: E) -> Result<Vec<OccupancySummary>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, OccupancySummary>(
            r#"
            SELECT rt.name AS room_type,
                   COUNT(r.id) FILTER (WHERE r.is_occupied = FALSE) AS available,
                   COUNT(r.id) AS total
            FROM room_types rt
            LEFT JOIN rooms r ON r.type_id = rt.id
            GROUP BY rt.id, rt.name
            ORDER BY rt.name
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    /// Closed stays joined with the current rate of their room's type.
    pub async fn closed_stays_with_rates<'e, E>(&self, executor: E) -> Result<Vec<ClosedStayRate>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, ClosedStayRate>(
            r#"
            SELECT s.check_in_date, s.check_out_date, rt.nightly_rate
            FROM guest_stays s
            JOIN rooms r ON r.id = s.room_id
            JOIN room_types rt ON rt.id = r.type_id
            WHERE s.check_out_date IS NOT NULL
            ORDER BY s.id
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    pub async fn active_stay_location<'e, E>(
        &self,
        executor: E,
        stay_id: i32,
    ) -> Result<Option<ActiveStayLocation>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let location = sqlx::query_as::<_, ActiveStayLocation>(
            r#"
            SELECT s.first_name, s.last_name, r.room_number, r.floor
            FROM guest_stays s
            JOIN rooms r ON r.id = s.room_id
            WHERE s.id = $1 AND s.check_out_date IS NULL
            "#,
        )
        .bind(stay_id)
        .fetch_optional(executor)
        .await?;

        Ok(location)
    }

    pub async fn distinct_cities<'e, E>(&self, executor: E) -> Result<Vec<String>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cities = sqlx::query_scalar::<_, String>("SELECT DISTINCT city FROM guest_stays ORDER BY city")
            .fetch_all(executor)
            .await?;

        Ok(cities)
    }
}
