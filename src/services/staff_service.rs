// src/services/staff_service.rs

use sqlx::{Executor, Postgres};
use validator::Validate;

use crate::{
    common::error::AppError,
    db::StaffRepository,
    models::{
        staff::{Employee, HireEmployeePayload},
        validation::normalize_optional,
    },
};

#[derive(Clone)]
pub struct StaffService {
    repo: StaffRepository,
}

impl StaffService {
    pub fn new(repo: StaffRepository) -> Self {
        Self { repo }
    }

    pub async fn list_employees<'e, E>(&self, executor: E) -> Result<Vec<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_employees(executor).await
    }

    pub async fn get_employee<'e, E>(&self, executor: E, employee_id: i32) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .find_employee(executor, employee_id)
            .await?
            .ok_or(AppError::EmployeeNotFound(employee_id))
    }

    pub async fn hire<'e, E>(&self, executor: E, payload: HireEmployeePayload) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        payload.validate()?;

        let middle_name = normalize_optional(payload.middle_name);
        let employee = self
            .repo
            .insert_employee(
                executor,
                payload.last_name.trim(),
                payload.first_name.trim(),
                middle_name.as_deref(),
            )
            .await?;

        tracing::info!(employee_id = employee.id, "employee {} {} hired", employee.first_name, employee.last_name);
        Ok(employee)
    }

    /// Removes the employee together with all of their schedule entries.
    pub async fn dismiss<'e, E>(&self, executor: E, employee_id: i32) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = self
            .repo
            .delete_employee(executor, employee_id)
            .await?
            .ok_or(AppError::EmployeeNotFound(employee_id))?;

        tracing::info!(employee_id, "employee {} {} dismissed", employee.first_name, employee.last_name);
        Ok(employee)
    }
}
