use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

const MINIMUM_AGE: i32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DateOfBirth(Date);

impl DateOfBirth {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Completed years on `today`.
    pub fn age_on(&self, today: Date) -> i32 {
        let birthday_pending =
            (u8::from(today.month()), today.day()) < (u8::from(self.0.month()), self.0.day());
        today.year() - self.0.year() - i32::from(birthday_pending)
    }

    /// Difference of calendar years, ignoring whether the birthday has passed.
    pub fn year_difference(&self, today: Date) -> i32 {
        today.year() - self.0.year()
    }

    pub(crate) fn validate(&self, today: Date) -> Result<(), Report<KernelError>> {
        if self.0 > today {
            return Err(Report::new(KernelError::InvalidGuest)
                .attach_printable("Date of birth cannot be in the future."));
        }
        if self.age_on(today) < MINIMUM_AGE {
            return Err(Report::new(KernelError::InvalidGuest).attach_printable(format!(
                "Guest must be at least {MINIMUM_AGE} years old."
            )));
        }
        Ok(())
    }
}
