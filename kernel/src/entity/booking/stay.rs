use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::entity::TurnoverPolicy;
use crate::KernelError;

/// Check-in and check-out dates of a reservation. Check-out is strictly after check-in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Stay {
    check_in: Date,
    check_out: Date,
}

impl Stay {
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, Report<KernelError>> {
        if check_in >= check_out {
            return Err(Report::new(KernelError::InvalidDateRange)
                .attach_printable(format!("check_in: {check_in}, check_out: {check_out}")));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> &Date {
        &self.check_in
    }

    pub fn check_out(&self) -> &Date {
        &self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }

    pub fn overlaps(&self, other: &Stay, policy: TurnoverPolicy) -> bool {
        match policy {
            TurnoverPolicy::Inclusive => {
                self.check_in <= other.check_out && other.check_in <= self.check_out
            }
            TurnoverPolicy::SameDay => {
                self.check_in < other.check_out && other.check_in < self.check_out
            }
        }
    }

    /// Whether the guest sleeps in the room on the night starting `date`.
    pub fn covers(&self, date: Date) -> bool {
        self.check_in <= date && date < self.check_out
    }
}
