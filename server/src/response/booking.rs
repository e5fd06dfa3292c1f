use application::transfer::{BookingDto, InvoiceDto};
use axum::http::StatusCode;
use axum::Json;
use kernel::prelude::entity::{BookingStatus, PaymentMethod};
use rust_decimal::Decimal;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

use crate::controller::Exhaust;
use crate::response::InvoiceResponse;

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    id: Uuid,
    guest_id: Uuid,
    room_id: Uuid,
    check_in_date: Date,
    check_out_date: Date,
    total_price: Decimal,
    status: BookingStatus,
    is_active: bool,
    payment_method: PaymentMethod,
}

impl From<BookingDto> for BookingResponse {
    fn from(value: BookingDto) -> Self {
        Self {
            id: value.id,
            guest_id: value.guest_id,
            room_id: value.room_id,
            check_in_date: value.check_in,
            check_out_date: value.check_out,
            total_price: value.total_price,
            status: value.status,
            is_active: value.is_active,
            payment_method: value.payment_method,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckedInResponse {
    message: &'static str,
    booking: BookingResponse,
}

#[derive(Debug, Serialize)]
pub struct CheckedOutResponse {
    message: &'static str,
    invoice: InvoiceResponse,
}

pub struct BookingPresenter;

impl Exhaust<()> for BookingPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<BookingDto> for BookingPresenter {
    type To = Json<BookingResponse>;
    fn emit(&self, input: BookingDto) -> Self::To {
        Json(BookingResponse::from(input))
    }
}

impl Exhaust<Vec<BookingDto>> for BookingPresenter {
    type To = Json<Vec<BookingResponse>>;
    fn emit(&self, input: Vec<BookingDto>) -> Self::To {
        Json(input.into_iter().map(BookingResponse::from).collect())
    }
}

/// Front-desk actions answer with a confirmation next to the affected record.
pub struct FrontDeskPresenter;

impl Exhaust<BookingDto> for FrontDeskPresenter {
    type To = Json<CheckedInResponse>;
    fn emit(&self, input: BookingDto) -> Self::To {
        Json(CheckedInResponse {
            message: "Checked in successfully.",
            booking: BookingResponse::from(input),
        })
    }
}

impl Exhaust<InvoiceDto> for FrontDeskPresenter {
    type To = Json<CheckedOutResponse>;
    fn emit(&self, input: InvoiceDto) -> Self::To {
        Json(CheckedOutResponse {
            message: "Checked out successfully.",
            invoice: InvoiceResponse::from(input),
        })
    }
}
