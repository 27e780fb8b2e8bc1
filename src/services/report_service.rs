// src/services/report_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::{ReportRepository, RoomRepository, ScheduleRepository, StayRepository},
    models::{
        reports::{CleanerLookup, HotelReport, OccupancySummary, ReportOptions, RoomOccupants},
        schedule::DayOfWeek,
        stays::StayListing,
    },
    services::billing::total_income,
};

/// Read-only views across rooms, stays and the schedule. Nothing here writes.
#[derive(Clone)]
pub struct ReportService {
    repo: ReportRepository,
    room_repo: RoomRepository,
    stay_repo: StayRepository,
    schedule_repo: ScheduleRepository,
}

impl ReportService {
    pub fn new(
        repo: ReportRepository,
        room_repo: RoomRepository,
        stay_repo: StayRepository,
        schedule_repo: ScheduleRepository,
    ) -> Self {
        Self {
            repo,
            room_repo,
            stay_repo,
            schedule_repo,
        }
    }

    pub async fn occupancy_summary<'e, E>(&self, executor: E) -> Result<Vec<OccupancySummary>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.occupancy_by_type(executor).await
    }

    pub async fn occupants_by_room<'e, E>(&self, executor: E, room_id: i32) -> Result<RoomOccupants, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let room = self
            .room_repo
            .find_room(&mut *conn, room_id)
            .await?
            .ok_or(AppError::RoomNotFound(room_id))?;
        let occupants = self.stay_repo.list_open_stays_in_room(&mut *conn, room_id).await?;

        Ok(RoomOccupants {
            room_id,
            room_number: room.room_number,
            occupants,
        })
    }

    pub async fn guests_by_city<'e, E>(&self, executor: E, city: &str) -> Result<Vec<StayListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::InvalidInput("city is required".to_string()));
        }

        self.stay_repo.list_open_stays_from_city(executor, city).await
    }

    /// Who cleans the floor of an open stay's room on the given day.
    pub async fn cleaners_for_stay<'e, E>(
        &self,
        executor: E,
        stay_id: i32,
        day_of_week: DayOfWeek,
    ) -> Result<CleanerLookup, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let location = self
            .repo
            .active_stay_location(&mut *conn, stay_id)
            .await?
            .ok_or(AppError::NoActiveStay(stay_id))?;

        let cleaners = self
            .schedule_repo
            .cleaners_for(&mut *conn, location.floor, day_of_week)
            .await?;

        Ok(CleanerLookup {
            stay_id,
            guest_name: format!("{} {}", location.first_name, location.last_name),
            room_number: location.room_number,
            floor: location.floor,
            day_of_week,
            cleaners,
        })
    }

    /// Current status of every room plus income from all closed stays at today's rates.
    pub async fn hotel_report<'e, E>(&self, executor: E) -> Result<HotelReport, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;
        self.repo.use_snapshot(&mut *tx).await?;

        let rooms = self.room_repo.list_rooms(&mut *tx).await?;
        let closed = self.repo.closed_stays_with_rates(&mut *tx).await?;

        tx.commit().await?;

        Ok(HotelReport {
            rooms,
            closed_stays: closed.len(),
            total_income: total_income(&closed),
        })
    }

    /// Everything a caller needs to build the report queries above.
    pub async fn report_options<'e, E>(&self, executor: E) -> Result<ReportOptions, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let rooms = self.room_repo.list_room_refs(&mut *conn).await?;
        let current_guests = self.stay_repo.list_open_stays(&mut *conn).await?;
        let cities = self.repo.distinct_cities(&mut *conn).await?;

        Ok(ReportOptions {
            rooms,
            current_guests,
            days: DayOfWeek::ALL.to_vec(),
            cities,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::error::AppError,
        db::ReportRepository,
        models::{reports::OccupancySummary, rooms::CreateRoomTypePayload, schedule::{AddScheduleEntryPayload, DayOfWeek}},
        test_support::{check_in_payload, date, hire_payload, room_payload, seed_room, services},
    };
    use rust_decimal::Decimal;
    use sqlx::PgPool;

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL server in DATABASE_URL"]
    async fn occupancy_counts_every_type(pool: PgPool) {
        let s = services();
        let single = seed_room(&pool, "Single", "100", 1, "101").await;
        s.rooms.create_room(&pool, room_payload("102", 1, single.type_id)).await.unwrap();
        s.rooms
            .create_room_type(&pool, CreateRoomTypePayload { name: "Suite".into(), nightly_rate: Decimal::from(300) })
            .await
            .unwrap();

        s.booking.check_in(&pool, check_in_payload("P1", single.id, date(2024, 1, 1))).await.unwrap();

        let summary = s.reports.occupancy_summary(&pool).await.unwrap();
        assert_eq!(
            summary,
            vec![
                OccupancySummary { room_type: "Single".into(), available: 1, total: 2 },
                OccupancySummary { room_type: "Suite".into(), available: 0, total: 0 },
            ]
        );
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL server in DATABASE_URL"]
    async fn hotel_report_sums_closed_stays_only(pool: PgPool) {
        let s = services();
        let room = seed_room(&pool, "Single", "100", 1, "101").await;
        let other = s.rooms.create_room(&pool, room_payload("102", 1, room.type_id)).await.unwrap();

        let closed = s.booking.check_in(&pool, check_in_payload("P1", room.id, date(2024, 1, 1))).await.unwrap();
        s.booking.check_out(&pool, closed.id, date(2024, 1, 4)).await.unwrap();
        s.booking.check_in(&pool, check_in_payload("P2", other.id, date(2024, 1, 1))).await.unwrap();

        let report = s.reports.hotel_report(&pool).await.unwrap();
        assert_eq!(report.closed_stays, 1);
        assert_eq!(report.total_income, Decimal::from(300));
        assert_eq!(report.rooms.iter().filter(|r| r.is_occupied).count(), 1);
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL server in DATABASE_URL"]
    async fn report_transaction_reads_one_snapshot(pool: PgPool) {
        let mut tx = pool.begin().await.unwrap();
        ReportRepository::new().use_snapshot(&mut *tx).await.unwrap();

        let isolation = sqlx::query_scalar::<_, String>("SHOW transaction_isolation")
            .fetch_one(&mut *tx)
            .await
            .unwrap();
        assert_eq!(isolation, "repeatable read");

        // Rows committed after the snapshot was taken stay invisible.
        let before = ReportRepository::new().closed_stays_with_rates(&mut *tx).await.unwrap().len();
        let room = seed_room(&pool, "Single", "100", 1, "101").await;
        let stay = services()
            .booking
            .check_in(&pool, check_in_payload("P1", room.id, date(2024, 1, 1)))
            .await
            .unwrap();
        services().booking.check_out(&pool, stay.id, date(2024, 1, 3)).await.unwrap();

        let after = ReportRepository::new().closed_stays_with_rates(&mut *tx).await.unwrap().len();
        assert_eq!(before, after);
        tx.commit().await.unwrap();
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL server in DATABASE_URL"]
    async fn finds_cleaners_on_the_guests_floor(pool: PgPool) {
        let s = services();
        let room = seed_room(&pool, "Single", "100", 2, "201").await;
        let stay = s.booking.check_in(&pool, check_in_payload("P1", room.id, date(2024, 1, 1))).await.unwrap();

        let cleaner = s.staff.hire(&pool, hire_payload("Silva", "Ana")).await.unwrap();
        let elsewhere = s.staff.hire(&pool, hire_payload("Costa", "Rui")).await.unwrap();
        for (employee_id, floor, day) in [
            (cleaner.id, 2, DayOfWeek::Monday),
            (elsewhere.id, 3, DayOfWeek::Monday),
            (elsewhere.id, 2, DayOfWeek::Tuesday),
        ] {
            s.schedule
                .add_entry(
                    &pool,
                    AddScheduleEntryPayload { employee_id: Some(employee_id), floor: Some(floor), day_of_week: Some(day) },
                )
                .await
                .unwrap();
        }

        let lookup = s.reports.cleaners_for_stay(&pool, stay.id, DayOfWeek::Monday).await.unwrap();
        assert_eq!(lookup.floor, 2);
        assert_eq!(lookup.cleaners, vec![cleaner]);

        s.booking.check_out(&pool, stay.id, date(2024, 1, 2)).await.unwrap();
        let err = s.reports.cleaners_for_stay(&pool, stay.id, DayOfWeek::Monday).await.unwrap_err();
        assert!(matches!(err, AppError::NoActiveStay(_)));
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL server in DATABASE_URL"]
    async fn lookups_by_room_and_city_only_show_current_guests(pool: PgPool) {
        let s = services();
        let room = seed_room(&pool, "Single", "100", 1, "101").await;

        let gone = s.booking.check_in(&pool, check_in_payload("P1", room.id, date(2024, 1, 1))).await.unwrap();
        s.booking.check_out(&pool, gone.id, date(2024, 1, 2)).await.unwrap();
        let here = s.booking.check_in(&pool, check_in_payload("P2", room.id, date(2024, 1, 2))).await.unwrap();

        let occupants = s.reports.occupants_by_room(&pool, room.id).await.unwrap();
        assert_eq!(occupants.occupants.len(), 1);
        assert_eq!(occupants.occupants[0].stay.id, here.id);

        let from_porto = s.reports.guests_by_city(&pool, " Porto ").await.unwrap();
        assert_eq!(from_porto.len(), 1);

        let options = s.reports.report_options(&pool).await.unwrap();
        assert_eq!(options.cities, vec!["Porto".to_string()]);
        assert_eq!(options.days.len(), 7);

        assert!(matches!(
            s.reports.occupants_by_room(&pool, 999).await.unwrap_err(),
            AppError::RoomNotFound(999)
        ));
    }
}
