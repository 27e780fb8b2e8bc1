pub mod billing;
pub mod booking_service;
pub mod report_service;
pub mod room_service;
pub mod schedule_service;
pub mod staff_service;
