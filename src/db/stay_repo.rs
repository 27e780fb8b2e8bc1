// src/db/stay_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, Postgres};

use crate::{
    common::{db_utils::map_constraint_error, error::AppError},
    models::stays::{GuestStay, NewStay, StayListing},
};

const STAY_COLUMNS: &str = "id, passport_number, last_name, first_name, middle_name, city, \
                            check_in_date, check_out_date, room_id";

const LISTING_SELECT: &str = r#"
    SELECT s.id, s.passport_number, s.last_name, s.first_name, s.middle_name, s.city,
           s.check_in_date, s.check_out_date, s.room_id, r.room_number
    FROM guest_stays s
    LEFT JOIN rooms r ON r.id = s.room_id
"#;

#[derive(Clone, Default)]
pub struct StayRepository;

impl StayRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn find_open_by_passport<'e, E>(
        &self,
        executor: E,
        passport_number: &str,
    ) -> Result<Option<GuestStay>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!(
            "SELECT {STAY_COLUMNS} FROM guest_stays WHERE passport_number = $1 AND check_out_date IS NULL"
        );
        let stay = sqlx::query_as::<_, GuestStay>(&query)
            .bind(passport_number)
            .fetch_optional(executor)
            .await?;

        Ok(stay)
    }

    pub async fn insert_open_stay<'e, E>(
        &self,
        executor: E,
        new_stay: &NewStay,
    ) -> Result<GuestStay, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!(
            r#"
            INSERT INTO guest_stays (
                passport_number, last_name, first_name, middle_name, city, check_in_date, room_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {STAY_COLUMNS}
            "#
        );

        sqlx::query_as::<_, GuestStay>(&query)
            .bind(&new_stay.passport_number)
            .bind(&new_stay.last_name)
            .bind(&new_stay.first_name)
            .bind(new_stay.middle_name.as_deref())
            .bind(&new_stay.city)
            .bind(new_stay.check_in_date)
            .bind(new_stay.room_id)
            .fetch_one(executor)
            .await
            .map_err(|e| {
                // The partial unique index only covers open stays.
                map_constraint_error(
                    e,
                    || AppError::GuestAlreadyCheckedIn(new_stay.passport_number.clone()),
                    || AppError::RoomNotAvailable(new_stay.room_id),
                )
            })
    }

    /// Reads a stay and holds its row lock until the surrounding transaction ends.
    pub async fn lock_stay<'e, E>(&self, executor: E, stay_id: i32) -> Result<Option<GuestStay>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!("SELECT {STAY_COLUMNS} FROM guest_stays WHERE id = $1 FOR UPDATE");
        let stay = sqlx::query_as::<_, GuestStay>(&query)
            .bind(stay_id)
            .fetch_optional(executor)
            .await?;

        Ok(stay)
    }

    pub async fn close_stay<'e, E>(
        &self,
        executor: E,
        stay_id: i32,
        check_out_date: NaiveDate,
    ) -> Result<GuestStay, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!(
            "UPDATE guest_stays SET check_out_date = $1 WHERE id = $2 RETURNING {STAY_COLUMNS}"
        );
        let stay = sqlx::query_as::<_, GuestStay>(&query)
            .bind(check_out_date)
            .bind(stay_id)
            .fetch_one(executor)
            .await?;

        Ok(stay)
    }

    pub async fn find_stay<'e, E>(&self, executor: E, stay_id: i32) -> Result<Option<StayListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!("{LISTING_SELECT} WHERE s.id = $1");
        let stay = sqlx::query_as::<_, StayListing>(&query)
            .bind(stay_id)
            .fetch_optional(executor)
            .await?;

        Ok(stay)
    }

    /// Guests currently in the hotel.
    pub async fn list_open_stays<'e, E>(&self, executor: E) -> Result<Vec<StayListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!(
            "{LISTING_SELECT} WHERE s.check_out_date IS NULL ORDER BY s.last_name, s.first_name"
        );
        let stays = sqlx::query_as::<_, StayListing>(&query)
            .fetch_all(executor)
            .await?;

        Ok(stays)
    }

    pub async fn list_all_stays<'e, E>(&self, executor: E) -> Result<Vec<StayListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!("{LISTING_SELECT} ORDER BY s.check_in_date DESC, s.last_name");
        let stays = sqlx::query_as::<_, StayListing>(&query)
            .fetch_all(executor)
            .await?;

        Ok(stays)
    }

    pub async fn list_open_stays_in_room<'e, E>(
        &self,
        executor: E,
        room_id: i32,
    ) -> Result<Vec<StayListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!(
            "{LISTING_SELECT} WHERE s.room_id = $1 AND s.check_out_date IS NULL ORDER BY s.last_name, s.first_name"
        );
        let stays = sqlx::query_as::<_, StayListing>(&query)
            .bind(room_id)
            .fetch_all(executor)
            .await?;

        Ok(stays)
    }

    pub async fn list_open_stays_from_city<'e, E>(
        &self,
        executor: E,
        city: &str,
    ) -> Result<Vec<StayListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!(
            "{LISTING_SELECT} WHERE s.city = $1 AND s.check_out_date IS NULL ORDER BY s.last_name, s.first_name"
        );
        let stays = sqlx::query_as::<_, StayListing>(&query)
            .bind(city)
            .fetch_all(executor)
            .await?;

        Ok(stays)
    }
}
