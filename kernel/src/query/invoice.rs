use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{BookingId, GuestId, Invoice, InvoiceId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait InvoiceQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &InvoiceId,
    ) -> error_stack::Result<Option<Invoice>, KernelError>;

    async fn find_by_booking_id(
        &self,
        con: &mut Self::Transaction,
        booking_id: &BookingId,
    ) -> error_stack::Result<Option<Invoice>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Invoice>, KernelError>;

    async fn find_by_guest_id(
        &self,
        con: &mut Self::Transaction,
        guest_id: &GuestId,
    ) -> error_stack::Result<Vec<Invoice>, KernelError>;
}

pub trait DependOnInvoiceQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type InvoiceQuery: InvoiceQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn invoice_query(&self) -> &Self::InvoiceQuery;
}
