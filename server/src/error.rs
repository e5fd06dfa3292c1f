use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub(crate) fn status_of(error: &KernelError) -> StatusCode {
    match error {
        KernelError::InvalidDateRange
        | KernelError::PastCheckIn
        | KernelError::MissingPaymentMethod
        | KernelError::UnknownPaymentMethod
        | KernelError::RoomUnavailable
        | KernelError::PriceOutOfRange
        | KernelError::BookingNotActive
        | KernelError::WrongCheckInDate
        | KernelError::NotCheckedIn
        | KernelError::AlreadyCheckedOut
        | KernelError::MissingDate
        | KernelError::MalformedDate
        | KernelError::MalformedRequest
        | KernelError::InvalidPeriod
        | KernelError::InvalidGuest
        | KernelError::InvalidRoom => StatusCode::BAD_REQUEST,
        KernelError::Unauthorized => StatusCode::UNAUTHORIZED,
        KernelError::Forbidden => StatusCode::FORBIDDEN,
        KernelError::RoomNotFound
        | KernelError::GuestNotFound
        | KernelError::BookingNotFound
        | KernelError::InvoiceNotFound => StatusCode::NOT_FOUND,
        KernelError::InvoiceAlreadyExists
        | KernelError::EmailTaken
        | KernelError::RoomNumberTaken
        | KernelError::Concurrency => StatusCode::CONFLICT,
        KernelError::PaymentFailed => StatusCode::BAD_GATEWAY,
        KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
        KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let error = self.0.current_context();
        let status = status_of(error);
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        let body = ErrorBody {
            error: error.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
