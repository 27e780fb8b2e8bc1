// src/services/schedule_service.rs

use sqlx::{Acquire, Executor, Postgres};
use validator::Validate;

use crate::{
    common::error::AppError,
    db::ScheduleRepository,
    models::schedule::{AddScheduleEntryPayload, ScheduleEntry, ScheduleListing},
};

#[derive(Clone)]
pub struct ScheduleService {
    repo: ScheduleRepository,
}

impl ScheduleService {
    pub fn new(repo: ScheduleRepository) -> Self {
        Self { repo }
    }

    pub async fn list_schedule<'e, E>(&self, executor: E) -> Result<Vec<ScheduleListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_schedule(executor).await
    }

    pub async fn entries_for_employee<'e, E>(&self, executor: E, employee_id: i32) -> Result<Vec<ScheduleEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_for_employee(executor, employee_id).await
    }

    /// Rejects an exact duplicate of an existing (employee, floor, day) triple.
    pub async fn add_entry<'e, E>(&self, executor: E, payload: AddScheduleEntryPayload) -> Result<ScheduleEntry, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        payload.validate()?;
        let (Some(employee_id), Some(floor), Some(day)) = (payload.employee_id, payload.floor, payload.day_of_week)
        else {
            return Err(AppError::InvalidInput("employee, floor and day are required".to_string()));
        };

        let mut tx = executor.begin().await?;

        if self.repo.entry_exists(&mut *tx, employee_id, floor, day).await? {
            tracing::warn!(employee_id, floor, ?day, "schedule entry rejected: duplicate");
            return Err(AppError::DuplicateScheduleEntry);
        }

        // The unique constraint still catches a concurrent duplicate.
        let entry = self.repo.insert_entry(&mut *tx, employee_id, floor, day).await?;
        tx.commit().await?;

        tracing::info!(entry_id = entry.id, employee_id, floor, ?day, "schedule entry added");
        Ok(entry)
    }

    pub async fn remove_entry<'e, E>(&self, executor: E, entry_id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if !self.repo.delete_entry(executor, entry_id).await? {
            return Err(AppError::ScheduleEntryNotFound(entry_id));
        }

        tracing::info!(entry_id, "schedule entry removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::error::AppError,
        models::schedule::{AddScheduleEntryPayload, DayOfWeek},
        test_support::{hire_payload, services},
    };
    use sqlx::PgPool;

    fn entry(employee_id: i32, floor: i32, day: DayOfWeek) -> AddScheduleEntryPayload {
        AddScheduleEntryPayload {
            employee_id: Some(employee_id),
            floor: Some(floor),
            day_of_week: Some(day),
        }
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL server in DATABASE_URL"]
    async fn duplicate_entry_is_rejected_and_stored_once(pool: PgPool) {
        let s = services();
        let employee = s.staff.hire(&pool, hire_payload("Silva", "Ana")).await.unwrap();

        s.schedule.add_entry(&pool, entry(employee.id, 2, DayOfWeek::Monday)).await.unwrap();
        let err = s
            .schedule
            .add_entry(&pool, entry(employee.id, 2, DayOfWeek::Monday))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateScheduleEntry));
        assert_eq!(s.schedule.entries_for_employee(&pool, employee.id).await.unwrap().len(), 1);
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL server in DATABASE_URL"]
    async fn dismissal_removes_only_that_employees_entries(pool: PgPool) {
        let s = services();
        let leaving = s.staff.hire(&pool, hire_payload("Silva", "Ana")).await.unwrap();
        let staying = s.staff.hire(&pool, hire_payload("Costa", "Rui")).await.unwrap();

        s.schedule.add_entry(&pool, entry(leaving.id, 1, DayOfWeek::Monday)).await.unwrap();
        s.schedule.add_entry(&pool, entry(leaving.id, 2, DayOfWeek::Friday)).await.unwrap();
        s.schedule.add_entry(&pool, entry(staying.id, 1, DayOfWeek::Monday)).await.unwrap();

        s.staff.dismiss(&pool, leaving.id).await.unwrap();

        let remaining = s.schedule.list_schedule(&pool).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].entry.employee_id, staying.id);
        assert!(matches!(
            s.staff.dismiss(&pool, leaving.id).await.unwrap_err(),
            AppError::EmployeeNotFound(_)
        ));
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL server in DATABASE_URL"]
    async fn entries_need_an_existing_employee(pool: PgPool) {
        let err = services()
            .schedule
            .add_entry(&pool, entry(5, 2, DayOfWeek::Monday))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmployeeNotFound(5)));
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL server in DATABASE_URL"]
    async fn removing_a_missing_entry_is_not_found(pool: PgPool) {
        let err = services().schedule.remove_entry(&pool, 31).await.unwrap_err();
        assert!(matches!(err, AppError::ScheduleEntryNotFound(31)));
    }
}
