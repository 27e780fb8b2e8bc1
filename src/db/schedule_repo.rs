// src/db/schedule_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::{db_utils::map_constraint_error, error::AppError},
    models::{
        schedule::{DayOfWeek, ScheduleEntry, ScheduleListing},
        staff::Employee,
    },
};

#[derive(Clone, Default)]
pub struct ScheduleRepository;

impl ScheduleRepository {
    pub fn new() -> Self {
        Self
    }

    /// Ordered by weekday (enum declaration order), floor, then employee.
    pub async fn list_schedule<'e, E>(&self, executor: E) -> Result<Vec<ScheduleListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let schedule = sqlx::query_as::<_, ScheduleListing>(
            r#"
            SELECT cs.id, cs.employee_id, cs.floor, cs.day_of_week,
                   e.first_name, e.last_name
            FROM cleaning_schedule cs
            JOIN employees e ON e.id = cs.employee_id
            ORDER BY cs.day_of_week, cs.floor, e.last_name
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(schedule)
    }

    pub async fn list_for_employee<'e, E>(
        &self,
        executor: E,
        employee_id: i32,
    ) -> Result<Vec<ScheduleEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let entries = sqlx::query_as::<_, ScheduleEntry>(
            r#"
            SELECT id, employee_id, floor, day_of_week
            FROM cleaning_schedule
            WHERE employee_id = $1
            ORDER BY day_of_week, floor
            "#,
        )
        .bind(employee_id)
        .fetch_all(executor)
        .await?;

        Ok(entries)
    }

    pub async fn entry_exists<'e, E>(
        &self,
        executor: E,
        employee_id: i32,
        floor: i32,
        day_of_week: DayOfWeek,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM cleaning_schedule
                WHERE employee_id = $1 AND floor = $2 AND day_of_week = $3
            )
            "#,
        )
        .bind(employee_id)
        .bind(floor)
        .bind(day_of_week)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    pub async fn insert_entry<'e, E>(
        &self,
        executor: E,
        employee_id: i32,
        floor: i32,
        day_of_week: DayOfWeek,
    ) -> Result<ScheduleEntry, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, ScheduleEntry>(
            r#"
            INSERT INTO cleaning_schedule (employee_id, floor, day_of_week)
            VALUES ($1, $2, $3)
            RETURNING id, employee_id, floor, day_of_week
            "#,
        )
        .bind(employee_id)
        .bind(floor)
        .bind(day_of_week)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            map_constraint_error(
                e,
                || AppError::DuplicateScheduleEntry,
                || AppError::EmployeeNotFound(employee_id),
            )
        })
    }

    pub async fn delete_entry<'e, E>(&self, executor: E, entry_id: i32) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM cleaning_schedule WHERE id = $1")
            .bind(entry_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Employees cleaning `floor` on `day_of_week`.
    pub async fn cleaners_for<'e, E>(
        &self,
        executor: E,
        floor: i32,
        day_of_week: DayOfWeek,
    ) -> Result<Vec<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cleaners = sqlx::query_as::<_, Employee>(
            r#"
            SELECT e.id, e.last_name, e.first_name, e.middle_name
            FROM cleaning_schedule cs
            JOIN employees e ON e.id = cs.employee_id
            WHERE cs.floor = $1 AND cs.day_of_week = $2
            ORDER BY e.last_name, e.first_name
            "#,
        )
        .bind(floor)
        .bind(day_of_week)
        .fetch_all(executor)
        .await?;

        Ok(cleaners)
    }
}
