// src/services/booking_service.rs

use chrono::NaiveDate;
use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::{RoomRepository, StayRepository},
    models::{
        rooms::Room,
        stays::{CheckInPayload, GuestStay, Invoice, NewStay, StayListing},
    },
    services::billing::compute_charge,
};

/// Check-in, check-out and invoicing. Every write path keeps the room's occupancy
/// flag and the stay's open/closed state in step inside one transaction.
#[derive(Clone)]
pub struct BookingService {
    stay_repo: StayRepository,
    room_repo: RoomRepository,
}

impl BookingService {
    pub fn new(stay_repo: StayRepository, room_repo: RoomRepository) -> Self {
        Self { stay_repo, room_repo }
    }

    // --- CHECK-IN ---

    pub async fn check_in<'e, E>(&self, executor: E, payload: CheckInPayload) -> Result<GuestStay, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        // Rejected input never reaches the store.
        let new_stay = NewStay::try_from(payload)?;

        let mut tx = executor.begin().await?;

        if self
            .stay_repo
            .find_open_by_passport(&mut *tx, &new_stay.passport_number)
            .await?
            .is_some()
        {
            tracing::warn!(passport = %new_stay.passport_number, "check-in rejected: guest already checked in");
            return Err(AppError::GuestAlreadyCheckedIn(new_stay.passport_number));
        }

        // Re-read the room under a row lock; concurrent check-ins for it wait here.
        let room = self.room_repo.lock_room(&mut *tx, new_stay.room_id).await?;
        match room {
            Some(room) if !room.is_occupied => {}
            _ => {
                tracing::warn!(room_id = new_stay.room_id, "check-in rejected: room not available");
                return Err(AppError::RoomNotAvailable(new_stay.room_id));
            }
        }

        let stay = self.stay_repo.insert_open_stay(&mut *tx, &new_stay).await?;

        if !self.room_repo.occupy_if_vacant(&mut *tx, new_stay.room_id).await? {
            return Err(AppError::RoomNotAvailable(new_stay.room_id));
        }

        tx.commit().await?;

        tracing::info!(stay_id = stay.id, room_id = new_stay.room_id, "guest {} checked in", stay.full_name());
        Ok(stay)
    }

    // --- CHECK-OUT ---

    pub async fn check_out<'e, E>(&self, executor: E, stay_id: i32, today: NaiveDate) -> Result<Invoice, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let stay = self
            .stay_repo
            .lock_stay(&mut *tx, stay_id)
            .await?
            .ok_or(AppError::StayNotFound(stay_id))?;

        if !stay.is_open() {
            tracing::warn!(stay_id, "check-out rejected: stay already closed");
            return Err(AppError::StayAlreadyClosed(stay_id));
        }
        let room_id = stay.room_id.ok_or(AppError::StayWithoutRoom(stay_id))?;

        let closed = self.stay_repo.close_stay(&mut *tx, stay_id, today).await?;
        self.room_repo.vacate(&mut *tx, room_id).await?;

        let room = self
            .room_repo
            .find_room(&mut *tx, room_id)
            .await?
            .ok_or(AppError::RoomNotFound(room_id))?;

        tx.commit().await?;

        tracing::info!(stay_id, room_id, "guest {} checked out", closed.full_name());
        Ok(build_invoice(&closed, &room, today, today))
    }

    // --- INVOICE ---

    /// Invoice for any stay. An open stay is billed up to `today` and marked provisional.
    pub async fn invoice<'e, E>(&self, executor: E, stay_id: i32, today: NaiveDate) -> Result<Invoice, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let listing = self
            .stay_repo
            .find_stay(&mut *conn, stay_id)
            .await?
            .ok_or(AppError::StayNotFound(stay_id))?;
        let room_id = listing.stay.room_id.ok_or(AppError::StayWithoutRoom(stay_id))?;

        let room = self
            .room_repo
            .find_room(&mut *conn, room_id)
            .await?
            .ok_or(AppError::RoomNotFound(room_id))?;

        let check_out = listing.stay.check_out_date.unwrap_or(today);
        Ok(build_invoice(&listing.stay, &room, check_out, today))
    }

    // --- LEDGER READS ---

    pub async fn list_current_guests<'e, E>(&self, executor: E) -> Result<Vec<StayListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.stay_repo.list_open_stays(executor).await
    }

    pub async fn list_all_stays<'e, E>(&self, executor: E) -> Result<Vec<StayListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.stay_repo.list_all_stays(executor).await
    }

    pub async fn get_stay<'e, E>(&self, executor: E, stay_id: i32) -> Result<StayListing, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.stay_repo
            .find_stay(executor, stay_id)
            .await?
            .ok_or(AppError::StayNotFound(stay_id))
    }
}

fn build_invoice(stay: &GuestStay, room: &Room, check_out: NaiveDate, issued_on: NaiveDate) -> Invoice {
    Invoice {
        stay_id: stay.id,
        guest_name: stay.full_name(),
        passport_number: stay.passport_number.clone(),
        room_number: room.room_number.clone(),
        room_type: room.type_name.clone(),
        check_in_date: stay.check_in_date,
        check_out_date: check_out,
        charge: compute_charge(stay.check_in_date, check_out, room.nightly_rate),
        provisional: stay.is_open(),
        issued_on,
    }
}
