use error_stack::Report;
use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction,
};
use kernel::interface::payment::{DependOnPaymentGateway, PaymentGateway};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnInvoiceQuery, InvoiceQuery,
};
use kernel::interface::update::{DependOnInvoiceModifier, InvoiceModifier};
use kernel::prelude::entity::{Action, Actor, Invoice, InvoiceId};
use kernel::KernelError;

use crate::transfer::{
    GetAllInvoiceDto, GetInvoiceDto, InvoiceDto, PaymentIntentDto, RequestPaymentDto,
    SettleInvoiceDto,
};

#[async_trait::async_trait]
pub trait GetInvoiceService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnInvoiceQuery + DependOnBookingQuery
{
    async fn get_invoice(&self, dto: GetInvoiceDto) -> error_stack::Result<InvoiceDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let invoice =
            find_readable(self, &mut connection, &dto.actor, InvoiceId::new(dto.id)).await?;
        Ok(InvoiceDto::from(invoice))
    }

    /// Staff see every invoice, guests only those of their own bookings.
    async fn get_all_invoices(
        &self,
        dto: GetAllInvoiceDto,
    ) -> error_stack::Result<Vec<InvoiceDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let invoices = if dto.actor.role().permits(Action::ViewAllInvoices) {
            self.invoice_query().find_all(&mut connection).await?
        } else {
            match dto.actor.guest_id() {
                Some(guest_id) => {
                    self.invoice_query()
                        .find_by_guest_id(&mut connection, guest_id)
                        .await?
                }
                None => Vec::new(),
            }
        };
        Ok(invoices.into_iter().map(InvoiceDto::from).collect())
    }
}

impl<T> GetInvoiceService for T where
    T: DependOnDatabaseConnection + DependOnInvoiceQuery + DependOnBookingQuery
{
}

/// Loads an invoice and checks that `actor` may see the booking it belongs to.
async fn find_readable<T>(
    module: &T,
    connection: &mut <T::DatabaseConnection as DatabaseConnection>::Transaction,
    actor: &Actor,
    id: InvoiceId,
) -> error_stack::Result<Invoice, KernelError>
where
    T: DependOnInvoiceQuery + DependOnBookingQuery + ?Sized,
{
    let invoice = module
        .invoice_query()
        .find_by_id(connection, &id)
        .await?
        .ok_or_else(|| Report::new(KernelError::InvoiceNotFound))?;
    let booking = module
        .booking_query()
        .find_by_id(connection, invoice.booking_id())
        .await?
        .ok_or_else(|| Report::new(KernelError::BookingNotFound))?;
    actor.ensure_reads(booking.guest_id())?;
    Ok(invoice)
}

#[async_trait::async_trait]
pub trait SettleInvoiceService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnInvoiceQuery + DependOnInvoiceModifier
{
    async fn settle_invoice(
        &self,
        dto: SettleInvoiceDto,
    ) -> error_stack::Result<InvoiceDto, KernelError> {
        dto.actor.authorize(Action::SettleInvoice)?;
        let mut connection = self.database_connection().transact().await?;

        let id = InvoiceId::new(dto.id);
        let mut invoice = self
            .invoice_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::InvoiceNotFound))?;
        invoice.settle();
        self.invoice_modifier()
            .update(&mut connection, &invoice)
            .await?;
        connection.commit().await?;

        tracing::info!(invoice = %id.as_ref(), "invoice settled");
        Ok(InvoiceDto::from(invoice))
    }
}

impl<T> SettleInvoiceService for T where
    T: DependOnDatabaseConnection + DependOnInvoiceQuery + DependOnInvoiceModifier
{
}

#[async_trait::async_trait]
pub trait PaymentService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnInvoiceQuery
    + DependOnBookingQuery
    + DependOnPaymentGateway
{
    /// Opens a payment with the processor for the amount stored on the invoice.
    async fn request_payment(
        &self,
        dto: RequestPaymentDto,
    ) -> error_stack::Result<PaymentIntentDto, KernelError> {
        dto.actor.authorize(Action::RequestPayment)?;
        let mut connection = self.database_connection().transact().await?;
        let invoice = find_readable(
            self,
            &mut connection,
            &dto.actor,
            InvoiceId::new(dto.invoice_id),
        )
        .await?;
        // nothing to write; release the connection before calling out
        drop(connection);

        if *invoice.is_paid().as_ref() {
            return Err(Report::new(KernelError::PaymentFailed)
                .attach_printable("invoice has already been paid"));
        }
        let secret = self
            .payment_gateway()
            .create_intent(invoice.amount())
            .await
            .inspect_err(|report| {
                tracing::warn!(
                    invoice = %invoice.id().as_ref(),
                    reason = ?report,
                    "payment intent failed"
                )
            })?;

        tracing::info!(invoice = %invoice.id().as_ref(), "payment intent created");
        Ok(PaymentIntentDto {
            invoice_id: *invoice.id().as_ref(),
            client_secret: secret.into(),
        })
    }
}

impl<T> PaymentService for T where
    T: DependOnDatabaseConnection
        + DependOnInvoiceQuery
        + DependOnBookingQuery
        + DependOnPaymentGateway
{
}
