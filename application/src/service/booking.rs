use error_stack::Report;
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction,
};
use kernel::interface::policy::DependOnTurnoverPolicy;
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnGuestQuery, DependOnRoomQuery, GuestQuery,
    RoomQuery,
};
use kernel::interface::update::{
    BookingModifier, DependOnBookingModifier, DependOnInvoiceModifier, DependOnRoomModifier,
    InvoiceModifier, RoomModifier,
};
use kernel::prelude::entity::{
    Action, Booking, BookingId, GuestId, InvoiceId, Reservation, RoomId,
};
use kernel::KernelError;
use uuid::Uuid;

use crate::transfer::{
    BookingDto, CheckInDto, CheckOutDto, CreateBookingDto, DeleteBookingDto, GetAllBookingDto,
    GetBookingDto, InvoiceDto,
};

#[async_trait::async_trait]
pub trait GetBookingService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookingQuery
{
    async fn get_booking(&self, dto: GetBookingDto) -> error_stack::Result<BookingDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookingId::new(dto.id);
        let booking = self
            .booking_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::BookingNotFound))?;
        dto.actor.ensure_reads(booking.guest_id())?;
        Ok(BookingDto::from(booking))
    }

    /// Staff see every booking, guests only their own.
    async fn get_all_bookings(
        &self,
        dto: GetAllBookingDto,
    ) -> error_stack::Result<Vec<BookingDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let bookings = if dto.actor.role().permits(Action::ViewAllBookings) {
            self.booking_query().find_all(&mut connection).await?
        } else {
            match dto.actor.guest_id() {
                Some(guest_id) => {
                    self.booking_query()
                        .find_by_guest_id(&mut connection, guest_id)
                        .await?
                }
                None => Vec::new(),
            }
        };
        Ok(bookings.into_iter().map(BookingDto::from).collect())
    }
}

impl<T> GetBookingService for T where T: DependOnDatabaseConnection + DependOnBookingQuery {}

#[async_trait::async_trait]
pub trait BookingLifecycleService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnClock
    + DependOnTurnoverPolicy
    + DependOnGuestQuery
    + DependOnRoomQuery
    + DependOnRoomModifier
    + DependOnBookingQuery
    + DependOnBookingModifier
    + DependOnInvoiceModifier
{
    /// Admits a new reservation. The room row stays locked from the overlap check until
    /// the insert commits, so two overlapping requests cannot both succeed.
    async fn create_booking(
        &self,
        dto: CreateBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        dto.actor.authorize(Action::CreateBooking)?;
        let guest_id = dto
            .guest_id
            .map(GuestId::new)
            .or_else(|| dto.actor.guest_id().cloned())
            .ok_or_else(|| {
                Report::new(KernelError::GuestNotFound)
                    .attach_printable("no guest given and caller has no guest record")
            })?;
        dto.actor.ensure_acts_for(&guest_id)?;

        let mut connection = self.database_connection().transact().await?;
        self.guest_query()
            .find_by_id(&mut connection, &guest_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::GuestNotFound))?;
        let room_id = RoomId::new(dto.room_id);
        let room = self
            .room_query()
            .find_by_id_for_update(&mut connection, &room_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::RoomNotFound))?;
        let booked = self
            .booking_query()
            .find_by_room_id(&mut connection, &room_id)
            .await?;

        let reservation = Reservation::new(
            guest_id,
            room_id,
            dto.check_in,
            dto.check_out,
            dto.payment_method,
        );
        let booking = Booking::admit(
            BookingId::new(Uuid::new_v4()),
            reservation,
            &room,
            &booked,
            self.clock().today(),
            self.turnover_policy(),
        )
        .inspect_err(|report| {
            tracing::debug!(
                room = %room.id().as_ref(),
                reason = %report.current_context(),
                "booking rejected"
            )
        })?;
        self.booking_modifier()
            .create(&mut connection, &booking)
            .await?;
        connection.commit().await?;

        tracing::info!(
            booking = %booking.id().as_ref(),
            room = %booking.room_id().as_ref(),
            total_price = %booking.total_price().as_ref(),
            "booking created"
        );
        Ok(BookingDto::from(booking))
    }

    async fn check_in(&self, dto: CheckInDto) -> error_stack::Result<BookingDto, KernelError> {
        dto.actor.authorize(Action::CheckIn)?;
        let mut connection = self.database_connection().transact().await?;

        let id = BookingId::new(dto.id);
        let mut booking = self
            .booking_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::BookingNotFound))?;
        let mut room = self
            .room_query()
            .find_by_id_for_update(&mut connection, booking.room_id())
            .await?
            .ok_or_else(|| Report::new(KernelError::RoomNotFound))?;

        booking.check_in(&mut room, self.clock().today())?;
        self.booking_modifier()
            .update(&mut connection, &booking)
            .await?;
        self.room_modifier().update(&mut connection, &room).await?;
        connection.commit().await?;

        tracing::info!(booking = %id.as_ref(), room = %room.id().as_ref(), "checked in");
        Ok(BookingDto::from(booking))
    }

    /// Frees the room and issues the booking's invoice in the same transaction.
    async fn check_out(&self, dto: CheckOutDto) -> error_stack::Result<InvoiceDto, KernelError> {
        dto.actor.authorize(Action::CheckOut)?;
        let mut connection = self.database_connection().transact().await?;

        let id = BookingId::new(dto.id);
        let mut booking = self
            .booking_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::BookingNotFound))?;
        let mut room = self
            .room_query()
            .find_by_id_for_update(&mut connection, booking.room_id())
            .await?
            .ok_or_else(|| Report::new(KernelError::RoomNotFound))?;

        let invoice = booking.check_out(&mut room, InvoiceId::new(Uuid::new_v4()))?;
        self.booking_modifier()
            .update(&mut connection, &booking)
            .await?;
        self.room_modifier().update(&mut connection, &room).await?;
        self.invoice_modifier()
            .create(&mut connection, &invoice)
            .await?;
        connection.commit().await?;

        tracing::info!(
            booking = %id.as_ref(),
            invoice = %invoice.id().as_ref(),
            amount = %invoice.amount().as_ref(),
            "checked out"
        );
        Ok(InvoiceDto::from(invoice))
    }

    async fn delete_booking(&self, dto: DeleteBookingDto) -> error_stack::Result<(), KernelError> {
        dto.actor.authorize(Action::DeleteBooking)?;
        let mut connection = self.database_connection().transact().await?;

        let id = BookingId::new(dto.id);
        let booking = self
            .booking_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::BookingNotFound))?;
        let mut room = self
            .room_query()
            .find_by_id_for_update(&mut connection, booking.room_id())
            .await?
            .ok_or_else(|| Report::new(KernelError::RoomNotFound))?;

        let id = booking.withdraw(&mut room)?;
        self.room_modifier().update(&mut connection, &room).await?;
        self.booking_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        tracing::info!(booking = %id.as_ref(), "booking deleted");
        Ok(())
    }
}

impl<T> BookingLifecycleService for T where
    T: DependOnDatabaseConnection
        + DependOnClock
        + DependOnTurnoverPolicy
        + DependOnGuestQuery
        + DependOnRoomQuery
        + DependOnRoomModifier
        + DependOnBookingQuery
        + DependOnBookingModifier
        + DependOnInvoiceModifier
{
}

#[cfg(test)]
mod test {
    use super::{BookingLifecycleService, GetBookingService};
    use crate::mock::{actor, guest_actor, TestModule};
    use crate::transfer::{
        CheckInDto, CheckOutDto, CreateBookingDto, DeleteBookingDto, GetAllBookingDto,
        GetBookingDto,
    };
    use kernel::prelude::entity::{BookingStatus, PaymentMethod, Role, TurnoverPolicy};
    use kernel::KernelError;
    use rust_decimal::Decimal;
    use time::Duration;
    use uuid::Uuid;

    fn request(
        guest: Uuid,
        room: Uuid,
        module: &TestModule,
        offsets: (i64, i64),
    ) -> CreateBookingDto {
        CreateBookingDto {
            actor: guest_actor(guest),
            guest_id: None,
            room_id: room,
            check_in: module.today() + Duration::days(offsets.0),
            check_out: module.today() + Duration::days(offsets.1),
            payment_method: Some("credit_card".to_string()),
        }
    }

    #[tokio::test]
    async fn admission_scenario_with_inclusive_turnover() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let r101 = module.room("R101", Decimal::new(10000, 2)).await;
        let guest = module.guest("first@example.com").await;

        let first = module
            .create_booking(request(guest, r101, &module, (0, 2)))
            .await?;
        assert_eq!(first.total_price, Decimal::new(20000, 2));
        assert_eq!(first.status, BookingStatus::Reserved);
        assert!(first.is_active);
        assert_eq!(first.guest_id, guest);

        let err = module
            .create_booking(request(guest, r101, &module, (1, 3)))
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::RoomUnavailable);

        let err = module
            .create_booking(request(guest, r101, &module, (2, 4)))
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::RoomUnavailable);

        let later = module
            .create_booking(request(guest, r101, &module, (3, 4)))
            .await?;
        assert_eq!(later.total_price, Decimal::new(10000, 2));
        Ok(())
    }

    #[tokio::test]
    async fn admission_scenario_with_same_day_turnover() -> error_stack::Result<(), KernelError> {
        let module = TestModule::with_policy(TurnoverPolicy::SameDay);
        let r101 = module.room("R101", Decimal::new(10000, 2)).await;
        let guest = module.guest("turnover@example.com").await;

        module
            .create_booking(request(guest, r101, &module, (0, 2)))
            .await?;
        let err = module
            .create_booking(request(guest, r101, &module, (1, 3)))
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::RoomUnavailable);

        let third = module
            .create_booking(request(guest, r101, &module, (2, 4)))
            .await?;
        assert_eq!(third.total_price, Decimal::new(20000, 2));
        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_requests() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let room = module.room("101", Decimal::new(10000, 2)).await;
        let guest = module.guest("invalid@example.com").await;

        let err = module
            .create_booking(request(guest, room, &module, (-1, 1)))
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::PastCheckIn);

        let err = module
            .create_booking(request(guest, room, &module, (2, 2)))
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::InvalidDateRange);

        let mut missing = request(guest, room, &module, (0, 1));
        missing.payment_method = None;
        let err = module.create_booking(missing).await.unwrap_err();
        assert_eq!(err.current_context(), &KernelError::MissingPaymentMethod);

        let err = module
            .create_booking(request(guest, Uuid::new_v4(), &module, (0, 1)))
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::RoomNotFound);
        Ok(())
    }

    #[tokio::test]
    async fn guests_book_only_for_themselves() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let room = module.room("101", Decimal::new(10000, 2)).await;
        let me = module.guest("me@example.com").await;
        let other = module.guest("other@example.com").await;

        let mut on_behalf = request(me, room, &module, (0, 1));
        on_behalf.guest_id = Some(other);
        let err = module.create_booking(on_behalf).await.unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Forbidden);

        let mut by_staff = request(me, room, &module, (0, 1));
        by_staff.actor = actor(Role::Staff);
        by_staff.guest_id = Some(other);
        let err = module.create_booking(by_staff).await.unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Forbidden);

        let mut by_manager = request(me, room, &module, (0, 1));
        by_manager.actor = actor(Role::Manager);
        by_manager.guest_id = Some(other);
        let booking = module.create_booking(by_manager).await?;
        assert_eq!(booking.guest_id, other);

        let err = module
            .get_booking(GetBookingDto {
                actor: guest_actor(me),
                id: booking.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Forbidden);

        let mine = module
            .get_all_bookings(GetAllBookingDto {
                actor: guest_actor(me),
            })
            .await?;
        assert!(mine.is_empty());
        let all = module
            .get_all_bookings(GetAllBookingDto {
                actor: actor(Role::Staff),
            })
            .await?;
        assert_eq!(all.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn check_in_rejects_any_other_day() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let room = module.room("101", Decimal::new(10000, 2)).await;
        let guest = module.guest("early@example.com").await;
        let booking = module
            .create_booking(request(guest, room, &module, (1, 3)))
            .await?;

        let err = module
            .check_in(CheckInDto {
                actor: actor(Role::Staff),
                id: booking.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::WrongCheckInDate);
        assert!(module.room_state(room).await.is_available);

        let err = module
            .check_in(CheckInDto {
                actor: guest_actor(guest),
                id: booking.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Forbidden);
        Ok(())
    }

    #[tokio::test]
    async fn full_stay_issues_exactly_one_invoice() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let room = module.room("101", Decimal::new(12550, 2)).await;
        let guest = module.guest("stay@example.com").await;
        let mut dto = request(guest, room, &module, (0, 2));
        dto.payment_method = Some("cash".to_string());
        let booking = module.create_booking(dto).await?;

        let err = module
            .check_out(CheckOutDto {
                actor: actor(Role::Staff),
                id: booking.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::NotCheckedIn);

        let checked_in = module
            .check_in(CheckInDto {
                actor: actor(Role::Staff),
                id: booking.id,
            })
            .await?;
        assert_eq!(checked_in.status, BookingStatus::CheckedIn);
        assert!(checked_in.is_active);
        assert!(!module.room_state(room).await.is_available);

        let invoice = module
            .check_out(CheckOutDto {
                actor: actor(Role::Staff),
                id: booking.id,
            })
            .await?;
        assert_eq!(invoice.booking_id, booking.id);
        assert_eq!(invoice.amount, Decimal::new(25100, 2));
        assert_eq!(invoice.payment_method, PaymentMethod::Cash);
        assert!(!invoice.is_paid);
        assert!(module.room_state(room).await.is_available);

        let err = module
            .check_out(CheckOutDto {
                actor: actor(Role::Staff),
                id: booking.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::AlreadyCheckedOut);
        assert_eq!(module.invoice_count(booking.id).await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn failed_check_out_leaves_room_and_booking_untouched(
    ) -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let room = module.room("101", Decimal::new(10000, 2)).await;
        let guest = module.guest("race@example.com").await;
        let booking = module
            .create_booking(request(guest, room, &module, (0, 1)))
            .await?;
        module
            .check_in(CheckInDto {
                actor: actor(Role::Staff),
                id: booking.id,
            })
            .await?;
        module.seed_invoice(booking.id, false).await;

        let err = module
            .check_out(CheckOutDto {
                actor: actor(Role::Staff),
                id: booking.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::InvoiceAlreadyExists);
        assert!(!module.room_state(room).await.is_available);

        let stored = module
            .get_booking(GetBookingDto {
                actor: actor(Role::Staff),
                id: booking.id,
            })
            .await?;
        assert_eq!(stored.status, BookingStatus::CheckedIn);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_occupied_booking_frees_room() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let room = module.room("101", Decimal::new(10000, 2)).await;
        let guest = module.guest("gone@example.com").await;
        let booking = module
            .create_booking(request(guest, room, &module, (0, 1)))
            .await?;
        module
            .check_in(CheckInDto {
                actor: actor(Role::Staff),
                id: booking.id,
            })
            .await?;

        let err = module
            .delete_booking(DeleteBookingDto {
                actor: actor(Role::Manager),
                id: booking.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Forbidden);

        module
            .delete_booking(DeleteBookingDto {
                actor: actor(Role::Admin),
                id: booking.id,
            })
            .await?;
        assert!(module.room_state(room).await.is_available);
        let err = module
            .get_booking(GetBookingDto {
                actor: actor(Role::Admin),
                id: booking.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::BookingNotFound);
        Ok(())
    }
}
