use kernel::prelude::entity::{Actor, DestructInvoice, Invoice, PaymentMethod};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDto {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub is_paid: bool,
}

impl From<Invoice> for InvoiceDto {
    fn from(value: Invoice) -> Self {
        let DestructInvoice {
            id,
            booking_id,
            amount,
            payment_method,
            is_paid,
        } = value.into_destruct();
        Self {
            id: id.into(),
            booking_id: booking_id.into(),
            amount: amount.into(),
            payment_method,
            is_paid: is_paid.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentDto {
    pub invoice_id: Uuid,
    pub client_secret: String,
}

pub struct GetInvoiceDto {
    pub actor: Actor,
    pub id: Uuid,
}

pub struct GetAllInvoiceDto {
    pub actor: Actor,
}

pub struct SettleInvoiceDto {
    pub actor: Actor,
    pub id: Uuid,
}

pub struct RequestPaymentDto {
    pub actor: Actor,
    pub invoice_id: Uuid,
}
