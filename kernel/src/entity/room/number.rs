use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

const MAX_NUMBER_LEN: usize = 5;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RoomNumber(String);

impl RoomNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn parse(number: impl Into<String>) -> Result<Self, Report<KernelError>> {
        let number = number.into().trim().to_string();
        if number.is_empty() || number.chars().count() > MAX_NUMBER_LEN {
            return Err(Report::new(KernelError::InvalidRoom).attach_printable(format!(
                "room number must be 1 to {MAX_NUMBER_LEN} characters: {number:?}"
            )));
        }
        Ok(Self(number))
    }
}
