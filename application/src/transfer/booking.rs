use kernel::prelude::entity::{Actor, Booking, BookingStatus, DestructBooking, PaymentMethod};
use rust_decimal::Decimal;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDto {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub room_id: Uuid,
    pub check_in: Date,
    pub check_out: Date,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub is_active: bool,
    pub payment_method: PaymentMethod,
}

impl From<Booking> for BookingDto {
    fn from(value: Booking) -> Self {
        let DestructBooking {
            id,
            guest_id,
            room_id,
            stay,
            total_price,
            status,
            payment_method,
        } = value.into_destruct();
        Self {
            id: id.into(),
            guest_id: guest_id.into(),
            room_id: room_id.into(),
            check_in: *stay.check_in(),
            check_out: *stay.check_out(),
            total_price: total_price.into(),
            status,
            is_active: status.is_active(),
            payment_method,
        }
    }
}

pub struct GetBookingDto {
    pub actor: Actor,
    pub id: Uuid,
}

pub struct GetAllBookingDto {
    pub actor: Actor,
}

/// `guest_id` falls back to the caller's own guest record.
#[derive(Debug)]
pub struct CreateBookingDto {
    pub actor: Actor,
    pub guest_id: Option<Uuid>,
    pub room_id: Uuid,
    pub check_in: Date,
    pub check_out: Date,
    pub payment_method: Option<String>,
}

pub struct CheckInDto {
    pub actor: Actor,
    pub id: Uuid,
}

pub struct CheckOutDto {
    pub actor: Actor,
    pub id: Uuid,
}

pub struct DeleteBookingDto {
    pub actor: Actor,
    pub id: Uuid,
}
