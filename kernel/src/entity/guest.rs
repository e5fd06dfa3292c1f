mod birth;
mod contact;
mod id;
mod name;

pub use self::{birth::*, contact::*, id::*, name::*};
use destructure::{Destructure, Mutation};
use error_stack::Report;
use time::Date;
use vodca::References;

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Guest {
    id: GuestId,
    first_name: FirstName,
    last_name: LastName,
    email: GuestEmail,
    phone_number: PhoneNumber,
    address: Address,
    date_of_birth: Option<DateOfBirth>,
}

impl Guest {
    pub fn new(
        id: GuestId,
        first_name: FirstName,
        last_name: LastName,
        email: GuestEmail,
        phone_number: PhoneNumber,
        address: Address,
        date_of_birth: Option<DateOfBirth>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            address,
            date_of_birth,
        }
    }

    /// Checks every field against the registry rules as of `today`.
    pub fn validate(&self, today: Date) -> Result<(), Report<KernelError>> {
        self.first_name.validate()?;
        self.last_name.validate()?;
        self.email.validate()?;
        self.phone_number.validate()?;
        if let Some(date_of_birth) = &self.date_of_birth {
            date_of_birth.validate(today)?;
        }
        Ok(())
    }
}
