pub mod report_repo;
pub use report_repo::ReportRepository;
pub mod room_repo;
pub use room_repo::RoomRepository;
pub mod schedule_repo;
pub use schedule_repo::ScheduleRepository;
pub mod staff_repo;
pub use staff_repo::StaffRepository;
pub mod stay_repo;
pub use stay_repo::StayRepository;
