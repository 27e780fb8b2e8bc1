// src/db/room_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};

use crate::{
    common::{db_utils::map_constraint_error, error::AppError},
    models::rooms::{Room, RoomRef, RoomType},
};

const ROOM_SELECT: &str = r#"
    SELECT r.id, r.room_number, r.floor, r.type_id,
           rt.name AS type_name, rt.nightly_rate, r.is_occupied
    FROM rooms r
    JOIN room_types rt ON rt.id = r.type_id
"#;

#[derive(Clone, Default)]
pub struct RoomRepository;

impl RoomRepository {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    //  ROOM TYPES
    // =========================================================================

    pub async fn create_room_type<'e, E>(
        &self,
        executor: E,
        name: &str,
        nightly_rate: Decimal,
    ) -> Result<RoomType, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, RoomType>(
            "INSERT INTO room_types (name, nightly_rate) VALUES ($1, $2) RETURNING id, name, nightly_rate",
        )
        .bind(name)
        .bind(nightly_rate)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            map_constraint_error(
                e,
                || AppError::RoomTypeAlreadyExists(name.to_string()),
                || AppError::InvalidInput("invalid room type".to_string()),
            )
        })
    }

    pub async fn list_room_types<'e, E>(&self, executor: E) -> Result<Vec<RoomType>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let types = sqlx::query_as::<_, RoomType>(
            "SELECT id, name, nightly_rate FROM room_types ORDER BY name",
        )
        .fetch_all(executor)
        .await?;

        Ok(types)
    }

    /// Changes the rate of a type. Affects every invoice computed afterwards.
    pub async fn update_room_type_rate<'e, E>(
        &self,
        executor: E,
        type_id: i32,
        nightly_rate: Decimal,
    ) -> Result<Option<RoomType>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let updated = sqlx::query_as::<_, RoomType>(
            "UPDATE room_types SET nightly_rate = $1 WHERE id = $2 RETURNING id, name, nightly_rate",
        )
        .bind(nightly_rate)
        .bind(type_id)
        .fetch_optional(executor)
        .await?;

        Ok(updated)
    }

    // =========================================================================
    //  ROOMS
    // =========================================================================

    pub async fn create_room<'e, E>(
        &self,
        executor: E,
        room_number: &str,
        floor: i32,
        type_id: i32,
    ) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Room>(
            r#"
            WITH inserted AS (
                INSERT INTO rooms (room_number, floor, type_id)
                VALUES ($1, $2, $3)
                RETURNING id, room_number, floor, type_id, is_occupied
            )
            SELECT i.id, i.room_number, i.floor, i.type_id,
                   rt.name AS type_name, rt.nightly_rate, i.is_occupied
            FROM inserted i
            JOIN room_types rt ON rt.id = i.type_id
            "#,
        )
        .bind(room_number)
        .bind(floor)
        .bind(type_id)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            map_constraint_error(
                e,
                || AppError::RoomNumberTaken(room_number.to_string()),
                || AppError::RoomTypeNotFound(type_id),
            )
        })
    }

    pub async fn list_rooms<'e, E>(&self, executor: E) -> Result<Vec<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!("{ROOM_SELECT} ORDER BY r.floor, r.room_number");
        let rooms = sqlx::query_as::<_, Room>(&query).fetch_all(executor).await?;

        Ok(rooms)
    }

    pub async fn list_available_rooms<'e, E>(&self, executor: E) -> Result<Vec<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!("{ROOM_SELECT} WHERE r.is_occupied = FALSE ORDER BY r.room_number");
        let rooms = sqlx::query_as::<_, Room>(&query).fetch_all(executor).await?;

        Ok(rooms)
    }

    pub async fn list_room_refs<'e, E>(&self, executor: E) -> Result<Vec<RoomRef>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rooms = sqlx::query_as::<_, RoomRef>(
            "SELECT id, room_number FROM rooms ORDER BY room_number",
        )
        .fetch_all(executor)
        .await?;

        Ok(rooms)
    }

    pub async fn list_floors<'e, E>(&self, executor: E) -> Result<Vec<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let floors = sqlx::query_scalar::<_, i32>("SELECT DISTINCT floor FROM rooms ORDER BY floor")
            .fetch_all(executor)
            .await?;

        Ok(floors)
    }

    pub async fn find_room<'e, E>(&self, executor: E, room_id: i32) -> Result<Option<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!("{ROOM_SELECT} WHERE r.id = $1");
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(room_id)
            .fetch_optional(executor)
            .await?;

        Ok(room)
    }

    /// Reads a room and holds its row lock until the surrounding transaction ends.
    pub async fn lock_room<'e, E>(&self, executor: E, room_id: i32) -> Result<Option<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!("{ROOM_SELECT} WHERE r.id = $1 FOR UPDATE OF r");
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(room_id)
            .fetch_optional(executor)
            .await?;

        Ok(room)
    }

    /// Flips the occupancy flag only if the room is still vacant.
    /// Returns `false` when another transaction got there first.
    pub async fn occupy_if_vacant<'e, E>(&self, executor: E, room_id: i32) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE rooms SET is_occupied = TRUE WHERE id = $1 AND is_occupied = FALSE")
            .bind(room_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn vacate<'e, E>(&self, executor: E, room_id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("UPDATE rooms SET is_occupied = FALSE WHERE id = $1")
            .bind(room_id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Deletes a vacant room that no stay has ever referenced.
    pub async fn delete_unused_room<'e, E>(&self, executor: E, room_id: i32) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM rooms
            WHERE id = $1
              AND is_occupied = FALSE
              AND NOT EXISTS (SELECT 1 FROM guest_stays WHERE room_id = $1)
            "#,
        )
        .bind(room_id)
        .execute(executor)
        .await
        .map_err(|e| map_constraint_error(e, || AppError::RoomInUse(room_id), || AppError::RoomInUse(room_id)))?;

        Ok(result.rows_affected() == 1)
    }
}
