use application::transfer::{InvoiceDto, PaymentIntentDto};
use axum::Json;
use kernel::prelude::entity::PaymentMethod;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    id: Uuid,
    booking_id: Uuid,
    amount: Decimal,
    payment_method: PaymentMethod,
    is_paid: bool,
}

impl From<InvoiceDto> for InvoiceResponse {
    fn from(value: InvoiceDto) -> Self {
        Self {
            id: value.id,
            booking_id: value.booking_id,
            amount: value.amount,
            payment_method: value.payment_method,
            is_paid: value.is_paid,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentIntentResponse {
    invoice_id: Uuid,
    client_secret: String,
}

pub struct InvoicePresenter;

impl Exhaust<InvoiceDto> for InvoicePresenter {
    type To = Json<InvoiceResponse>;
    fn emit(&self, input: InvoiceDto) -> Self::To {
        Json(InvoiceResponse::from(input))
    }
}

impl Exhaust<Vec<InvoiceDto>> for InvoicePresenter {
    type To = Json<Vec<InvoiceResponse>>;
    fn emit(&self, input: Vec<InvoiceDto>) -> Self::To {
        Json(input.into_iter().map(InvoiceResponse::from).collect())
    }
}

impl Exhaust<PaymentIntentDto> for InvoicePresenter {
    type To = Json<PaymentIntentResponse>;
    fn emit(&self, input: PaymentIntentDto) -> Self::To {
        Json(PaymentIntentResponse {
            invoice_id: input.invoice_id,
            client_secret: input.client_secret,
        })
    }
}
