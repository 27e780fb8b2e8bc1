// src/services/room_service.rs

use sqlx::{Acquire, Executor, Postgres};
use validator::Validate;

use crate::{
    common::error::AppError,
    db::RoomRepository,
    models::rooms::{CreateRoomPayload, CreateRoomTypePayload, Room, RoomType, UpdateRatePayload},
};

#[derive(Clone)]
pub struct RoomService {
    repo: RoomRepository,
}

impl RoomService {
    pub fn new(repo: RoomRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  ROOM TYPES
    // =========================================================================

    pub async fn create_room_type<'e, E>(&self, executor: E, payload: CreateRoomTypePayload) -> Result<RoomType, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        payload.validate()?;

        let room_type = self
            .repo
            .create_room_type(executor, payload.name.trim(), payload.nightly_rate.round_dp(2))
            .await?;

        tracing::info!(type_id = room_type.id, "room type '{}' created", room_type.name);
        Ok(room_type)
    }

    pub async fn list_room_types<'e, E>(&self, executor: E) -> Result<Vec<RoomType>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_room_types(executor).await
    }

    /// New rate applies to every invoice computed from now on, including closed stays.
    pub async fn update_rate<'e, E>(
        &self,
        executor: E,
        type_id: i32,
        payload: UpdateRatePayload,
    ) -> Result<RoomType, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        payload.validate()?;

        let room_type = self
            .repo
            .update_room_type_rate(executor, type_id, payload.nightly_rate.round_dp(2))
            .await?
            .ok_or(AppError::RoomTypeNotFound(type_id))?;

        tracing::info!(type_id, rate = %room_type.nightly_rate, "nightly rate updated");
        Ok(room_type)
    }

    // =========================================================================
    //  ROOMS
    // =========================================================================

    pub async fn create_room<'e, E>(&self, executor: E, payload: CreateRoomPayload) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        payload.validate()?;

        let room = self
            .repo
            .create_room(executor, payload.room_number.trim(), payload.floor, payload.type_id)
            .await?;

        tracing::info!(room_id = room.id, "room {} created on floor {}", room.room_number, room.floor);
        Ok(room)
    }

    pub async fn list_rooms<'e, E>(&self, executor: E) -> Result<Vec<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_rooms(executor).await
    }

    pub async fn list_available_rooms<'e, E>(&self, executor: E) -> Result<Vec<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_available_rooms(executor).await
    }

    pub async fn list_floors<'e, E>(&self, executor: E) -> Result<Vec<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_floors(executor).await
    }

    pub async fn get_room<'e, E>(&self, executor: E, room_id: i32) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .find_room(executor, room_id)
            .await?
            .ok_or(AppError::RoomNotFound(room_id))
    }

    /// Only vacant rooms without stay history can go; past invoices depend on them.
    pub async fn delete_room<'e, E>(&self, executor: E, room_id: i32) -> Result<Room, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let room = self
            .repo
            .lock_room(&mut *tx, room_id)
            .await?
            .ok_or(AppError::RoomNotFound(room_id))?;

        if !self.repo.delete_unused_room(&mut *tx, room_id).await? {
            tracing::warn!(room_id, "room deletion rejected: room in use");
            return Err(AppError::RoomInUse(room_id));
        }

        tx.commit().await?;

        tracing::info!(room_id, "room {} deleted", room.room_number);
        Ok(room)
    }
}
