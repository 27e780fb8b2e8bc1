pub mod reports;
pub mod rooms;
pub mod schedule;
pub mod staff;
pub mod stays;
pub mod validation;
