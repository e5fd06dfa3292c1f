use std::net::SocketAddr;

use error_stack::{Report, ResultExt};
use kernel::prelude::entity::TurnoverPolicy;
use kernel::KernelError;

const SERVER_ADDR: &str = "SERVER_ADDR";
const UTC_OFFSET_HOURS: &str = "HOTEL_UTC_OFFSET_HOURS";
const SAME_DAY_TURNOVER: &str = "HOTEL_SAME_DAY_TURNOVER";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_addr: SocketAddr,
    pub utc_offset_hours: i8,
    pub turnover_policy: TurnoverPolicy,
}

impl AppConfig {
    /// Reads the process environment, honouring a `.env` file.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Ok(Self {
            server_addr: parse_addr(var(SERVER_ADDR)?.as_deref())?,
            utc_offset_hours: parse_offset(var(UTC_OFFSET_HOURS)?.as_deref())?,
            turnover_policy: parse_policy(var(SAME_DAY_TURNOVER)?.as_deref())?,
        })
    }
}

fn var(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(error)
            .change_context(KernelError::Internal)
            .attach_printable_lazy(|| format!("failed to read {key}")),
    }
}

fn parse_addr(value: Option<&str>) -> error_stack::Result<SocketAddr, KernelError> {
    let value = value.unwrap_or(DEFAULT_ADDR);
    value
        .trim()
        .parse::<SocketAddr>()
        .change_context(KernelError::Internal)
        .attach_printable_lazy(|| format!("{SERVER_ADDR} is not a socket address: {value}"))
}

fn parse_offset(value: Option<&str>) -> error_stack::Result<i8, KernelError> {
    let Some(value) = value else {
        return Ok(0);
    };
    let hours = value
        .trim()
        .parse::<i8>()
        .change_context(KernelError::Internal)
        .attach_printable_lazy(|| format!("{UTC_OFFSET_HOURS} is not a number: {value}"))?;
    if !(-23..=23).contains(&hours) {
        return Err(Report::new(KernelError::Internal)
            .attach_printable(format!("{UTC_OFFSET_HOURS} out of range: {hours}")));
    }
    Ok(hours)
}

fn parse_policy(value: Option<&str>) -> error_stack::Result<TurnoverPolicy, KernelError> {
    match value.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        None | Some("false" | "0" | "no") => Ok(TurnoverPolicy::Inclusive),
        Some("true" | "1" | "yes") => Ok(TurnoverPolicy::SameDay),
        Some(other) => Err(Report::new(KernelError::Internal)
            .attach_printable(format!("{SAME_DAY_TURNOVER} is not a boolean: {other}"))),
    }
}
