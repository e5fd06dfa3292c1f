use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Guest, GuestEmail, GuestId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GuestQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &GuestId,
    ) -> error_stack::Result<Option<Guest>, KernelError>;

    async fn find_by_email(
        &self,
        con: &mut Self::Transaction,
        email: &GuestEmail,
    ) -> error_stack::Result<Option<Guest>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Guest>, KernelError>;
}

pub trait DependOnGuestQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type GuestQuery: GuestQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn guest_query(&self) -> &Self::GuestQuery;
}
