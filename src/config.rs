// src/config.rs

use anyhow::{anyhow, Context};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::{env, net::SocketAddr, str::FromStr, time::Duration};

use crate::{
    db::{ReportRepository, RoomRepository, ScheduleRepository, StaffRepository, StayRepository},
    services::{
        booking_service::BookingService, report_service::ReportService, room_service::RoomService,
        schedule_service::ScheduleService, staff_service::StaffService,
    },
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;

/// Where the store lives: a full URL or its separate parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSettings {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        match self {
            DatabaseSettings::Url(url) => {
                PgConnectOptions::from_str(url).context("DATABASE_URL is not a valid PostgreSQL URL")
            }
            DatabaseSettings::Parts {
                host,
                port,
                user,
                password,
                database,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(database)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub database: DatabaseSettings,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from any key/value source. `DATABASE_URL` wins over the
    /// `DB_*` parts when both are present.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| anyhow!("{key} must be set"));

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseSettings::Url(url),
            None => DatabaseSettings::Parts {
                host: require("DB_HOST")?,
                port: parse_or(get("DB_PORT"), DEFAULT_DB_PORT, "DB_PORT")?,
                user: require("DB_USER")?,
                password: get("DB_PASSWORD").unwrap_or_default(),
                database: require("DB_NAME")?,
            },
        };

        let bind_addr: SocketAddr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:3000")?;

        Ok(Self {
            bind_addr,
            database,
            max_connections: parse_or(get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS, "DB_MAX_CONNECTIONS")?,
            acquire_timeout: Duration::from_secs(parse_or(
                get("DB_ACQUIRE_TIMEOUT_SECS"),
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
                "DB_ACQUIRE_TIMEOUT_SECS",
            )?),
        })
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T, key: &str) -> anyhow::Result<T> {
    match value {
        Some(v) => v.trim().parse().map_err(|_| anyhow!("{key} has an invalid value: {v}")),
        None => Ok(default),
    }
}

// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub room_service: RoomService,
    pub booking_service: BookingService,
    pub staff_service: StaffService,
    pub schedule_service: ScheduleService,
    pub report_service: ReportService,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_with(settings.database.connect_options()?)
            .await
            .context("could not connect to the database")?;

        tracing::info!("database connection established");

        Ok(Self::with_pool(db_pool))
    }

    /// Wires the repositories and services around an existing pool.
    pub fn with_pool(db_pool: PgPool) -> Self {
        let room_repo = RoomRepository::new();
        let stay_repo = StayRepository::new();
        let schedule_repo = ScheduleRepository::new();

        Self {
            room_service: RoomService::new(room_repo.clone()),
            booking_service: BookingService::new(stay_repo.clone(), room_repo.clone()),
            staff_service: StaffService::new(StaffRepository::new()),
            schedule_service: ScheduleService::new(schedule_repo.clone()),
            report_service: ReportService::new(ReportRepository::new(), room_repo, stay_repo, schedule_repo),
            db_pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn url_takes_precedence_over_parts() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://a:b@db/hotel"),
            ("DB_HOST", "elsewhere"),
        ])
        .unwrap();

        assert_eq!(s.database, DatabaseSettings::Url("postgres://a:b@db/hotel".into()));
        assert_eq!(s.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(s.max_connections, 5);
        assert_eq!(s.acquire_timeout, Duration::from_secs(3));
    }

    #[test]
    fn parts_are_assembled_with_defaults() {
        let s = settings(&[
            ("DB_HOST", "localhost"),
            ("DB_USER", "desk"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "hotel"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "10"),
        ])
        .unwrap();

        assert_eq!(
            s.database,
            DatabaseSettings::Parts {
                host: "localhost".into(),
                port: 5432,
                user: "desk".into(),
                password: "secret".into(),
                database: "hotel".into(),
            }
        );
        assert_eq!(s.bind_addr.port(), 8080);
        assert_eq!(s.max_connections, 10);
        assert!(s.database.connect_options().is_ok());
    }

    #[test]
    fn missing_database_settings_are_reported() {
        let err = settings(&[("DB_HOST", "localhost")]).unwrap_err();
        assert!(err.to_string().contains("DB_USER"));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = settings(&[("DATABASE_URL", "postgres://db/hotel"), ("DB_MAX_CONNECTIONS", "many")])
            .unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    }

    #[test]
    fn invalid_url_fails_on_connect_options() {
        let s = settings(&[("DATABASE_URL", "not a url")]).unwrap();
        assert!(s.database.connect_options().is_err());
    }
}
