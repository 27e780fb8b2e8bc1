// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "Front Desk API", description = "Rooms, guest stays, staff, cleaning schedule and reports"),
    paths(
        // --- Rooms ---
        handlers::rooms::create_room_type,
        handlers::rooms::list_room_types,
        handlers::rooms::update_room_type_rate,
        handlers::rooms::create_room,
        handlers::rooms::list_rooms,
        handlers::rooms::list_available_rooms,
        handlers::rooms::list_floors,
        handlers::rooms::get_room,
        handlers::rooms::delete_room,

        // --- Stays ---
        handlers::stays::check_in,
        handlers::stays::check_out,
        handlers::stays::get_invoice,
        handlers::stays::list_current_guests,
        handlers::stays::list_all_stays,
        handlers::stays::get_stay,

        // --- Staff ---
        handlers::staff::hire_employee,
        handlers::staff::list_employees,
        handlers::staff::get_employee,
        handlers::staff::dismiss_employee,
        handlers::staff::employee_schedule,

        // --- Schedule ---
        handlers::schedule::list_schedule,
        handlers::schedule::add_schedule_entry,
        handlers::schedule::delete_schedule_entry,

        // --- Reports ---
        handlers::reports::occupancy_summary,
        handlers::reports::report_options,
        handlers::reports::occupants_by_room,
        handlers::reports::guests_by_city,
        handlers::reports::cleaners_for_stay,
        handlers::reports::hotel_report,
    ),
    components(
        schemas(
            // --- Rooms ---
            models::rooms::RoomType,
            models::rooms::Room,
            models::rooms::RoomRef,
            models::rooms::CreateRoomTypePayload,
            models::rooms::UpdateRatePayload,
            models::rooms::CreateRoomPayload,

            // --- Stays ---
            models::stays::GuestStay,
            models::stays::StayListing,
            models::stays::CheckInPayload,
            models::stays::StayCharge,
            models::stays::Invoice,

            // --- Staff & Schedule ---
            models::staff::Employee,
            models::staff::HireEmployeePayload,
            models::schedule::DayOfWeek,
            models::schedule::ScheduleEntry,
            models::schedule::ScheduleListing,
            models::schedule::AddScheduleEntryPayload,

            // --- Reports ---
            models::reports::OccupancySummary,
            models::reports::RoomOccupants,
            models::reports::CleanerLookup,
            models::reports::HotelReport,
            models::reports::ReportOptions,
        )
    ),
    tags(
        (name = "Rooms", description = "Room types and rooms"),
        (name = "Stays", description = "Check-in, check-out and invoices"),
        (name = "Staff", description = "Employee roster"),
        (name = "Schedule", description = "Cleaning schedule"),
        (name = "Reports", description = "Read-only occupancy and income reports")
    )
)]
pub struct ApiDoc;
