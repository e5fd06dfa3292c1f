use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Room, RoomId, RoomType, Stay, TurnoverPolicy};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RoomQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError>;

    /// Like [`RoomQuery::find_by_id`], but holds the room until the transaction ends so
    /// that admission checks against it are serialised.
    async fn find_by_id_for_update(
        &self,
        con: &mut Self::Transaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Room>, KernelError>;

    /// Rooms flagged available that have no booking of any status overlapping `stay`.
    async fn find_available(
        &self,
        con: &mut Self::Transaction,
        stay: &Stay,
        room_type: Option<&RoomType>,
        policy: TurnoverPolicy,
    ) -> error_stack::Result<Vec<Room>, KernelError>;

    async fn count(&self, con: &mut Self::Transaction) -> error_stack::Result<u64, KernelError>;

    async fn count_occupied(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<u64, KernelError>;
}

pub trait DependOnRoomQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type RoomQuery: RoomQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn room_query(&self) -> &Self::RoomQuery;
}
