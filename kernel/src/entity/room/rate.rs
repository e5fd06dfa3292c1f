use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::Money;
use crate::KernelError;

const RATE_PRECISION: u32 = 8;
const RATE_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct NightlyRate(Money);

impl NightlyRate {
    pub fn new(rate: impl Into<Money>) -> Self {
        Self(rate.into())
    }

    pub fn parse(rate: impl Into<Money>) -> Result<Self, Report<KernelError>> {
        let rate = rate.into();
        if rate.is_negative() {
            return Err(Report::new(KernelError::InvalidRoom)
                .attach_printable(format!("nightly rate must not be negative: {rate:?}")));
        }
        if !rate.fits(RATE_PRECISION, RATE_SCALE) {
            return Err(Report::new(KernelError::InvalidRoom).attach_printable(format!(
                "nightly rate exceeds NUMERIC({RATE_PRECISION}, {RATE_SCALE}): {rate:?}"
            )));
        }
        Ok(Self(rate))
    }

    /// Price of `nights` consecutive nights at this rate.
    pub fn price_for(&self, nights: i64) -> Money {
        self.0.times(nights)
    }
}
