use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    InvalidDateRange,
    PastCheckIn,
    MissingPaymentMethod,
    UnknownPaymentMethod,
    RoomUnavailable,
    PriceOutOfRange,
    BookingNotActive,
    WrongCheckInDate,
    NotCheckedIn,
    AlreadyCheckedOut,
    InvoiceAlreadyExists,
    RoomNotFound,
    GuestNotFound,
    BookingNotFound,
    InvoiceNotFound,
    MissingDate,
    MalformedDate,
    MalformedRequest,
    InvalidPeriod,
    InvalidGuest,
    EmailTaken,
    InvalidRoom,
    RoomNumberTaken,
    Unauthorized,
    Forbidden,
    PaymentFailed,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidDateRange => {
                write!(f, "Check-out date must be after check-in date.")
            }
            KernelError::PastCheckIn => write!(f, "Check-in date cannot be in the past."),
            KernelError::MissingPaymentMethod => write!(f, "Payment method is required."),
            KernelError::UnknownPaymentMethod => {
                write!(f, "Payment method must be one of: credit_card, cash.")
            }
            KernelError::RoomUnavailable => write!(f, "Room is already booked for this period."),
            KernelError::PriceOutOfRange => {
                write!(f, "Booking total exceeds the maximum amount.")
            }
            KernelError::BookingNotActive => write!(f, "Booking is not active."),
            KernelError::WrongCheckInDate => write!(f, "Cannot check in on a different date."),
            KernelError::NotCheckedIn => write!(f, "Booking has not been checked in."),
            KernelError::AlreadyCheckedOut => write!(f, "Booking has already been checked out."),
            KernelError::InvoiceAlreadyExists => {
                write!(f, "An invoice has already been issued for this booking.")
            }
            KernelError::RoomNotFound => write!(f, "Room not found."),
            KernelError::GuestNotFound => write!(f, "Guest not found."),
            KernelError::BookingNotFound => write!(f, "Booking not found."),
            KernelError::InvoiceNotFound => write!(f, "Invoice not found."),
            KernelError::MissingDate => write!(f, "Please provide the required dates."),
            KernelError::MalformedDate => {
                write!(f, "Invalid date format. Please use YYYY-MM-DD format.")
            }
            KernelError::MalformedRequest => write!(f, "The request could not be parsed."),
            KernelError::InvalidPeriod => write!(f, "Start date must not be after end date."),
            KernelError::InvalidGuest => write!(f, "Guest record is invalid."),
            KernelError::EmailTaken => write!(f, "A guest with this email already exists."),
            KernelError::InvalidRoom => write!(f, "Room record is invalid."),
            KernelError::RoomNumberTaken => write!(f, "A room with this number already exists."),
            KernelError::Unauthorized => write!(f, "Authentication credentials were not provided."),
            KernelError::Forbidden => {
                write!(f, "You do not have permission to perform this action.")
            }
            KernelError::PaymentFailed => write!(f, "Payment processing failed."),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
