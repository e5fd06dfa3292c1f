use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

const MAX_NAME_LEN: usize = 50;

fn validate_name(field: &str, value: &str) -> Result<(), Report<KernelError>> {
    if value.trim().is_empty() || value.chars().count() > MAX_NAME_LEN {
        return Err(Report::new(KernelError::InvalidGuest).attach_printable(format!(
            "{field} must be 1 to {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub(crate) fn validate(&self) -> Result<(), Report<KernelError>> {
        validate_name("first name", &self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct LastName(String);

impl LastName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub(crate) fn validate(&self) -> Result<(), Report<KernelError>> {
        validate_name("last name", &self.0)
    }
}
