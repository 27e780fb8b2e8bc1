// src/db/staff_repo.rs

use sqlx::{Executor, Postgres};

use crate::{common::error::AppError, models::staff::Employee};

#[derive(Clone, Default)]
pub struct StaffRepository;

impl StaffRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_employees<'e, E>(&self, executor: E) -> Result<Vec<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, last_name, first_name, middle_name FROM employees ORDER BY last_name, first_name",
        )
        .fetch_all(executor)
        .await?;

        Ok(employees)
    }

    pub async fn find_employee<'e, E>(&self, executor: E, employee_id: i32) -> Result<Option<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, last_name, first_name, middle_name FROM employees WHERE id = $1",
        )
        .bind(employee_id)
        .fetch_optional(executor)
        .await?;

        Ok(employee)
    }

    pub async fn insert_employee<'e, E>(
        &self,
        executor: E,
        last_name: &str,
        first_name: &str,
        middle_name: Option<&str>,
    ) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (last_name, first_name, middle_name)
            VALUES ($1, $2, $3)
            RETURNING id, last_name, first_name, middle_name
            "#,
        )
        .bind(last_name)
        .bind(first_name)
        .bind(middle_name)
        .fetch_one(executor)
        .await?;

        Ok(employee)
    }

    /// Schedule entries go with the employee through `ON DELETE CASCADE`.
    pub async fn delete_employee<'e, E>(&self, executor: E, employee_id: i32) -> Result<Option<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as::<_, Employee>(
            "DELETE FROM employees WHERE id = $1 RETURNING id, last_name, first_name, middle_name",
        )
        .bind(employee_id)
        .fetch_optional(executor)
        .await?;

        Ok(employee)
    }
}
