use application::transfer::{GetAllInvoiceDto, GetInvoiceDto, RequestPaymentDto, SettleInvoiceDto};
use kernel::prelude::entity::Actor;
use uuid::Uuid;

use crate::controller::Intake;

#[derive(Debug)]
pub struct GetInvoiceRequest {
    actor: Actor,
    id: Uuid,
}

impl GetInvoiceRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

#[derive(Debug)]
pub struct SettleInvoiceRequest {
    actor: Actor,
    id: Uuid,
}

impl SettleInvoiceRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

#[derive(Debug)]
pub struct PaymentIntentRequest {
    actor: Actor,
    invoice_id: Uuid,
}

impl PaymentIntentRequest {
    pub fn new(actor: Actor, invoice_id: Uuid) -> Self {
        Self { actor, invoice_id }
    }
}

pub struct InvoiceTransformer;

impl Intake<Actor> for InvoiceTransformer {
    type To = GetAllInvoiceDto;
    fn emit(&self, actor: Actor) -> Self::To {
        GetAllInvoiceDto { actor }
    }
}

impl Intake<GetInvoiceRequest> for InvoiceTransformer {
    type To = GetInvoiceDto;
    fn emit(&self, input: GetInvoiceRequest) -> Self::To {
        GetInvoiceDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl Intake<SettleInvoiceRequest> for InvoiceTransformer {
    type To = SettleInvoiceDto;
    fn emit(&self, input: SettleInvoiceRequest) -> Self::To {
        SettleInvoiceDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl Intake<PaymentIntentRequest> for InvoiceTransformer {
    type To = RequestPaymentDto;
    fn emit(&self, input: PaymentIntentRequest) -> Self::To {
        RequestPaymentDto {
            actor: input.actor,
            invoice_id: input.invoice_id,
        }
    }
}
