use error_stack::Report;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::BookingQuery;
use kernel::interface::update::BookingModifier;
use kernel::prelude::entity::{
    Booking, BookingId, BookingStatus, GuestId, Money, PaymentMethod, Period, RoomId, Stay,
};
use kernel::KernelError;

use super::{to_count, PostgresTransaction};
use crate::error::ConvertError;

pub struct PostgresBookingRepository;

#[async_trait::async_trait]
impl BookingQuery for PostgresBookingRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_id(con, id, false).await
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut PostgresTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_id(con, id, true).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_all(con).await
    }

    async fn find_by_guest_id(
        &self,
        con: &mut PostgresTransaction,
        guest_id: &GuestId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_by_guest_id(con, guest_id).await
    }

    async fn find_by_room_id(
        &self,
        con: &mut PostgresTransaction,
        room_id: &RoomId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_by_room_id(con, room_id).await
    }

    async fn find_settled_within(
        &self,
        con: &mut PostgresTransaction,
        period: &Period,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_settled_within(con, period).await
    }

    async fn count_covering(
        &self,
        con: &mut PostgresTransaction,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        PgBookingInternal::count_covering(con, date).await
    }

    async fn count_arrivals(
        &self,
        con: &mut PostgresTransaction,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        PgBookingInternal::count_on(con, ARRIVALS_ON, date).await
    }

    async fn count_departures(
        &self,
        con: &mut PostgresTransaction,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        PgBookingInternal::count_on(con, DEPARTURES_ON, date).await
    }
}

#[async_trait::async_trait]
impl BookingModifier for PostgresBookingRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::create(con, booking).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::update(con, booking).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        booking_id: &BookingId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::delete(con, booking_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    guest_id: Uuid,
    room_id: Uuid,
    check_in_date: Date,
    check_out_date: Date,
    total_price: Decimal,
    status: String,
    payment_method: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = Report<KernelError>;
    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let status = BookingStatus::from_code(&value.status).ok_or_else(|| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("unknown booking status: {}", value.status))
        })?;
        let payment_method = PaymentMethod::from_code(&value.payment_method).ok_or_else(|| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("unknown payment method: {}", value.payment_method))
        })?;
        Ok(Booking::new(
            BookingId::new(value.id),
            GuestId::new(value.guest_id),
            RoomId::new(value.room_id),
            Stay::new(value.check_in_date, value.check_out_date)?,
            Money::new(value.total_price),
            status,
            payment_method,
        ))
    }
}

// language=postgresql
const ARRIVALS_ON: &str = "SELECT COUNT(*) FROM bookings WHERE check_in_date = $1";

// language=postgresql
const DEPARTURES_ON: &str = "SELECT COUNT(*) FROM bookings WHERE check_out_date = $1";

pub(in crate::database) struct PgBookingInternal;

impl PgBookingInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookingId,
        lock: bool,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        // language=postgresql
        let sql = if lock {
            r#"
            SELECT id, guest_id, room_id, check_in_date, check_out_date, total_price, status, payment_method
            FROM bookings
            WHERE id = $1
            FOR UPDATE
            "#
        } else {
            r#"
            SELECT id, guest_id, room_id, check_in_date, check_out_date, total_price, status, payment_method
            FROM bookings
            WHERE id = $1
            "#
        };
        let row = sqlx::query_as::<_, BookingRow>(sql)
            .bind(id.as_ref())
            .fetch_optional(con)
            .await
            .convert_error()?;
        row.map(Booking::try_from).transpose()
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Booking>, KernelError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, guest_id, room_id, check_in_date, check_out_date, total_price, status, payment_method
            FROM bookings
            ORDER BY check_in_date, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_guest_id(
        con: &mut PgConnection,
        guest_id: &GuestId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, guest_id, room_id, check_in_date, check_out_date, total_price, status, payment_method
            FROM bookings
            WHERE guest_id = $1
            ORDER BY check_in_date, id
            "#,
        )
        .bind(guest_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_room_id(
        con: &mut PgConnection,
        room_id: &RoomId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, guest_id, room_id, check_in_date, check_out_date, total_price, status, payment_method
            FROM bookings
            WHERE room_id = $1
            ORDER BY check_in_date, id
            "#,
        )
        .bind(room_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_settled_within(
        con: &mut PgConnection,
        period: &Period,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT b.id, b.guest_id, b.room_id, b.check_in_date, b.check_out_date,
                   b.total_price, b.status, b.payment_method
            FROM bookings b
            JOIN invoices i ON i.booking_id = b.id
            WHERE i.is_paid
              AND b.check_in_date <= $2
              AND b.check_out_date >= $1
            ORDER BY b.check_in_date, b.id
            "#,
        )
        .bind(period.start())
        .bind(period.end())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn count_covering(
        con: &mut PgConnection,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        let count = sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            SELECT COUNT(*)
            FROM bookings
            WHERE status <> 'checked_out'
              AND check_in_date <= $1
              AND check_out_date > $1
            "#,
        )
        .bind(date)
        .fetch_one(con)
        .await
        .convert_error()?;
        to_count(count)
    }

    async fn count_on(
        con: &mut PgConnection,
        sql: &'static str,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        let count = sqlx::query_scalar::<_, i64>(sql)
            .bind(date)
            .fetch_one(con)
            .await
            .convert_error()?;
        to_count(count)
    }

    async fn create(
        con: &mut PgConnection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO bookings (id, guest_id, room_id, check_in_date, check_out_date, total_price, status, payment_method)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(booking.id().as_ref())
        .bind(booking.guest_id().as_ref())
        .bind(booking.room_id().as_ref())
        .bind(booking.stay().check_in())
        .bind(booking.stay().check_out())
        .bind(Decimal::from(*booking.total_price()))
        .bind(booking.status().code())
        .bind(booking.payment_method().code())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    /// Only the status moves after admission.
    async fn update(
        con: &mut PgConnection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2
            WHERE id = $1
            "#,
        )
        .bind(booking.id().as_ref())
        .bind(booking.status().code())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        booking_id: &BookingId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration as StdDuration;

    use rand::Rng;
    use rust_decimal::Decimal;
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{BookingQuery, RoomQuery};
    use kernel::interface::update::{BookingModifier, GuestModifier, RoomModifier};
    use kernel::prelude::entity::{
        Address, Booking, BookingId, BookingStatus, FirstName, Guest, GuestEmail, GuestId,
        IsAvailable, LastName, Money, NightlyRate, PaymentMethod, PhoneNumber, Room, RoomId,
        RoomNumber, RoomType, Stay,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresBookingRepository, PostgresDatabase, PostgresGuestRepository,
        PostgresRoomRepository, PostgresTransaction,
    };

    async fn booking(con: &mut PostgresTransaction) -> error_stack::Result<Booking, KernelError> {
        let room = Room::new(
            RoomId::new(Uuid::new_v4()),
            RoomNumber::new(rand::thread_rng().gen_range(10000..100000).to_string()),
            RoomType::DoubleQueen,
            NightlyRate::new(Money::new(Decimal::new(15000, 2))),
            IsAvailable::new(true),
        );
        let guest = Guest::new(
            GuestId::new(Uuid::new_v4()),
            FirstName::new("Booking"),
            LastName::new("Test"),
            GuestEmail::new(format!("{}@example.com", Uuid::new_v4())),
            PhoneNumber::new("555-0100"),
            Address::default(),
            None,
        );
        PostgresRoomRepository.create(con, &room).await?;
        PostgresGuestRepository.create(con, &guest).await?;
        let today = OffsetDateTime::now_utc().date();
        Ok(Booking::new(
            BookingId::new(Uuid::new_v4()),
            guest.id().clone(),
            room.id().clone(),
            Stay::new(today, today + Duration::days(2))?,
            Money::new(Decimal::new(30000, 2)),
            BookingStatus::Reserved,
            PaymentMethod::CreditCard,
        ))
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let booking = booking(&mut con).await?;
        let id = booking.id().clone();

        PostgresBookingRepository.create(&mut con, &booking).await?;
        let found = PostgresBookingRepository
            .find_by_id_for_update(&mut con, &id)
            .await?;
        assert_eq!(found, Some(booking.clone()));
        let by_room = PostgresBookingRepository
            .find_by_room_id(&mut con, booking.room_id())
            .await?;
        assert_eq!(by_room, vec![booking.clone()]);
        let covering = PostgresBookingRepository
            .count_covering(&mut con, booking.stay().check_in())
            .await?;
        assert!(covering >= 1);

        PostgresBookingRepository.delete(&mut con, &id).await?;
        let found = PostgresBookingRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn room_lock_serializes_concurrent_bookings() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut setup = db.transact().await?;
        let booking = booking(&mut setup).await?;
        setup.commit().await?;
        let room_id = booking.room_id().clone();

        let mut holder = db.transact().await?;
        let locked = PostgresRoomRepository
            .find_by_id_for_update(&mut holder, &room_id)
            .await?;
        assert!(locked.is_some());
        PostgresBookingRepository.create(&mut holder, &booking).await?;

        let mut waiter = tokio::spawn({
            let db = db.clone();
            let room_id = room_id.clone();
            async move {
                let mut con = db.transact().await?;
                PostgresRoomRepository
                    .find_by_id_for_update(&mut con, &room_id)
                    .await?;
                let seen = PostgresBookingRepository
                    .find_by_room_id(&mut con, &room_id)
                    .await?;
                con.roll_back().await?;
                Ok::<_, error_stack::Report<KernelError>>(seen)
            }
        });

        let early = tokio::time::timeout(StdDuration::from_millis(300), &mut waiter).await;
        assert!(early.is_err(), "second transaction read the room while it was locked");

        holder.commit().await?;
        let seen = tokio::time::timeout(StdDuration::from_secs(5), waiter)
            .await
            .expect("lock was not released by commit")
            .expect("waiter task panicked")?;
        assert_eq!(seen, vec![booking.clone()]);

        let mut cleanup = db.transact().await?;
        PostgresRoomRepository.delete(&mut cleanup, &room_id).await?;
        PostgresGuestRepository
            .delete(&mut cleanup, booking.guest_id())
            .await?;
        cleanup.commit().await?;
        Ok(())
    }
}
