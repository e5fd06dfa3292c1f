use error_stack::ResultExt;
use kernel::KernelError;

use crate::error::ConvertError;

pub mod clock;
pub mod database;
pub mod error;
pub mod payment;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .convert_error()
        .attach_printable_lazy(|| format!("environment variable {key} is not set"))
}

/// Like [`env`], but a missing variable is not an error.
pub(crate) fn optional_env(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(error).convert_error(),
    }
}
