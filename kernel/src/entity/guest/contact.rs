use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

const MAX_PHONE_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct GuestEmail(String);

impl GuestEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub(crate) fn validate(&self) -> Result<(), Report<KernelError>> {
        if !self.0.contains('@') {
            return Err(Report::new(KernelError::InvalidGuest)
                .attach_printable(format!("invalid email address: {}", self.0)));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub(crate) fn validate(&self) -> Result<(), Report<KernelError>> {
        if self.0.chars().count() > MAX_PHONE_LEN {
            return Err(Report::new(KernelError::InvalidGuest).attach_printable(format!(
                "phone number exceeds {MAX_PHONE_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Free-text postal address; the last comma-separated segment is read as the country.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn country(&self) -> Option<&str> {
        if self.0.trim().is_empty() {
            return None;
        }
        self.0
            .rsplit(',')
            .next()
            .map(str::trim)
            .filter(|country| !country.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::Address;

    #[test]
    fn country_is_last_segment() {
        assert_eq!(Address::new("1 Main St, Springfield, USA ").country(), Some("USA"));
        assert_eq!(Address::new("Japan").country(), Some("Japan"));
        assert_eq!(Address::new("  ").country(), None);
        assert_eq!(Address::new("somewhere,").country(), None);
    }
}
