use error_stack::ResultExt;
use time::{Date, OffsetDateTime, UtcOffset};

use kernel::interface::clock::Clock;
use kernel::KernelError;

/// Wall clock of the hotel, read at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub fn from_hours(hours: i8) -> error_stack::Result<Self, KernelError> {
        let offset = UtcOffset::from_hms(hours, 0, 0)
            .change_context(KernelError::Internal)
            .attach_printable_lazy(|| format!("invalid utc offset: {hours}h"))?;
        Ok(Self::new(offset))
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.offset).date()
    }
}
