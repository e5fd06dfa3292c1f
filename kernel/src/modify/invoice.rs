use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Invoice;
use crate::KernelError;

/// Invoices are never deleted directly; they go away with their booking.
#[async_trait::async_trait]
pub trait InvoiceModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        invoice: &Invoice,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        invoice: &Invoice,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnInvoiceModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type InvoiceModifier: InvoiceModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn invoice_modifier(&self) -> &Self::InvoiceModifier;
}
