use time::Date;

use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Booking, BookingId, GuestId, Period, RoomId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;

    async fn find_by_id_for_update(
        &self,
        con: &mut Self::Transaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;

    async fn find_by_guest_id(
        &self,
        con: &mut Self::Transaction,
        guest_id: &GuestId,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;

    async fn find_by_room_id(
        &self,
        con: &mut Self::Transaction,
        room_id: &RoomId,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;

    /// Bookings touching `period` (inclusive on both ends) whose invoice has been paid.
    async fn find_settled_within(
        &self,
        con: &mut Self::Transaction,
        period: &Period,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;

    /// Active bookings whose stay includes the night starting on `date`.
    async fn count_covering(
        &self,
        con: &mut Self::Transaction,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError>;

    async fn count_arrivals(
        &self,
        con: &mut Self::Transaction,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError>;

    async fn count_departures(
        &self,
        con: &mut Self::Transaction,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError>;
}

pub trait DependOnBookingQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingQuery: BookingQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn booking_query(&self) -> &Self::BookingQuery;
}
