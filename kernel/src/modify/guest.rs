use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Guest, GuestId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GuestModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        guest: &Guest,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        guest: &Guest,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        guest_id: &GuestId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnGuestModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type GuestModifier: GuestModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn guest_modifier(&self) -> &Self::GuestModifier;
}
