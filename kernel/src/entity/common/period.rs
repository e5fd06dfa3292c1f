use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::KernelError;

/// Inclusive reporting window.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Period {
    start: Date,
    end: Date,
}

impl Period {
    pub fn new(start: Date, end: Date) -> Result<Self, Report<KernelError>> {
        if start > end {
            return Err(Report::new(KernelError::InvalidPeriod)
                .attach_printable(format!("start: {start}, end: {end}")));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &Date {
        &self.start
    }

    pub fn end(&self) -> &Date {
        &self.end
    }
}
