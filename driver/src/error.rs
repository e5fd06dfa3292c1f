use error_stack::Report;
use kernel::KernelError;
use sqlx::migrate::MigrateError;
use sqlx::Error;

pub trait ConvertError: Sized {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

/// Unique constraints whose violation carries a meaning of its own.
const UNIQUE_CONSTRAINTS: [(&str, KernelError); 3] = [
    ("invoices_booking_id_key", KernelError::InvoiceAlreadyExists),
    ("guests_email_key", KernelError::EmailTaken),
    ("rooms_number_key", KernelError::RoomNumberTaken),
];

// serialization_failure, deadlock_detected
const RETRYABLE_CODES: [&str; 2] = ["40001", "40P01"];

fn classify(error: &Error) -> KernelError {
    match error {
        Error::PoolTimedOut => KernelError::Timeout,
        Error::Database(database) if database.is_unique_violation() => database
            .constraint()
            .and_then(|constraint| {
                UNIQUE_CONSTRAINTS
                    .iter()
                    .find(|(name, _)| *name == constraint)
                    .map(|(_, kind)| *kind)
            })
            .unwrap_or(KernelError::Concurrency),
        Error::Database(database)
            if database
                .code()
                .is_some_and(|code| RETRYABLE_CODES.contains(&code.as_ref())) =>
        {
            KernelError::Concurrency
        }
        _ => KernelError::Internal,
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let kind = classify(&error);
            Report::from(error).change_context(kind)
        })
    }
}

impl<T> ConvertError for Result<T, MigrateError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::from(error).change_context(KernelError::Internal))
    }
}

impl<T> ConvertError for Result<T, dotenvy::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::from(error).change_context(KernelError::Internal))
    }
}

impl<T> ConvertError for Result<T, reqwest::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let kind = if error.is_timeout() {
                KernelError::Timeout
            } else {
                KernelError::PaymentFailed
            };
            Report::from(error).change_context(kind)
        })
    }
}
