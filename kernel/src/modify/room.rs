use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Room, RoomId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RoomModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        room: &Room,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        room: &Room,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRoomModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type RoomModifier: RoomModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn room_modifier(&self) -> &Self::RoomModifier;
}
