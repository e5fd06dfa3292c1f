use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Reserved,
    CheckedIn,
    CheckedOut,
}

impl BookingStatus {
    /// A booking is active until its stay has concluded.
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::CheckedOut)
    }

    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Reserved => "reserved",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "reserved" => Some(BookingStatus::Reserved),
            "checked_in" => Some(BookingStatus::CheckedIn),
            "checked_out" => Some(BookingStatus::CheckedOut),
            _ => None,
        }
    }
}
