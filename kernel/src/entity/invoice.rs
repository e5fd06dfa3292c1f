mod id;
mod paid;
mod secret;

pub use self::{id::*, paid::*, secret::*};
use destructure::Destructure;
use vodca::References;

use crate::entity::{Booking, BookingId, Money, PaymentMethod};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Invoice {
    id: InvoiceId,
    booking_id: BookingId,
    amount: Money,
    payment_method: PaymentMethod,
    is_paid: IsPaid,
}

impl Invoice {
    pub fn new(
        id: InvoiceId,
        booking_id: BookingId,
        amount: Money,
        payment_method: PaymentMethod,
        is_paid: IsPaid,
    ) -> Self {
        Self {
            id,
            booking_id,
            amount,
            payment_method,
            is_paid,
        }
    }

    pub(crate) fn issue(id: InvoiceId, booking: &Booking) -> Self {
        Self::new(
            id,
            booking.id().clone(),
            *booking.total_price(),
            *booking.payment_method(),
            IsPaid::new(false),
        )
    }

    /// Records the payment. Settling twice leaves the invoice unchanged.
    pub fn settle(&mut self) {
        self.is_paid = IsPaid::new(true);
    }
}
