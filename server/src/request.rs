use error_stack::{Report, ResultExt};
use kernel::KernelError;
use time::macros::format_description;
use time::Date;

pub use self::{booking::*, guest::*, invoice::*, report::*, room::*};

mod booking;
mod guest;
mod invoice;
mod report;
mod room;

/// Parses a required `YYYY-MM-DD` field.
pub(crate) fn parse_date(
    field: &str,
    value: Option<&str>,
) -> error_stack::Result<Date, KernelError> {
    let value = value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            Report::new(KernelError::MissingDate).attach_printable(format!("{field} is required"))
        })?;
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .change_context(KernelError::MalformedDate)
        .attach_printable_lazy(|| format!("{field}: {value}"))
}

/// Like [`parse_date`], but an absent or blank field yields `None`.
pub(crate) fn parse_optional_date(
    field: &str,
    value: Option<&str>,
) -> error_stack::Result<Option<Date>, KernelError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(field, Some(value)).map(Some),
    }
}
