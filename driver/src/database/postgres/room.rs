use error_stack::Report;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::RoomQuery;
use kernel::interface::update::RoomModifier;
use kernel::prelude::entity::{
    IsAvailable, Money, NightlyRate, Room, RoomId, RoomNumber, RoomType, Stay, TurnoverPolicy,
};
use kernel::KernelError;

use super::{to_count, PostgresTransaction};
use crate::error::ConvertError;

pub struct PostgresRoomRepository;

#[async_trait::async_trait]
impl RoomQuery for PostgresRoomRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        PgRoomInternal::find_by_id(con, id).await
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut PostgresTransaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        PgRoomInternal::find_by_id_for_update(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        PgRoomInternal::find_all(con).await
    }

    async fn find_available(
        &self,
        con: &mut PostgresTransaction,
        stay: &Stay,
        room_type: Option<&RoomType>,
        policy: TurnoverPolicy,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        PgRoomInternal::find_available(con, stay, room_type, policy).await
    }

    async fn count(&self, con: &mut PostgresTransaction) -> error_stack::Result<u64, KernelError> {
        PgRoomInternal::count(con).await
    }

    async fn count_occupied(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<u64, KernelError> {
        PgRoomInternal::count_occupied(con).await
    }
}

#[async_trait::async_trait]
impl RoomModifier for PostgresRoomRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        room: &Room,
    ) -> error_stack::Result<(), KernelError> {
        PgRoomInternal::create(con, room).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        room: &Room,
    ) -> error_stack::Result<(), KernelError> {
        PgRoomInternal::update(con, room).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError> {
        PgRoomInternal::delete(con, room_id).await
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: Uuid,
    number: String,
    room_type: String,
    nightly_rate: Decimal,
    is_available: bool,
}

impl TryFrom<RoomRow> for Room {
    type Error = Report<KernelError>;
    fn try_from(value: RoomRow) -> Result<Self, Self::Error> {
        Ok(Room::new(
            RoomId::new(value.id),
            RoomNumber::new(value.number),
            value.room_type.parse()?,
            NightlyRate::new(Money::new(value.nightly_rate)),
            IsAvailable::new(value.is_available),
        ))
    }
}

// Inclusive: a stay ending on the day another begins still collides.
// language=postgresql
const AVAILABLE_INCLUSIVE: &str = r#"
    SELECT r.id, r.number, r.room_type, r.nightly_rate, r.is_available
    FROM rooms r
    WHERE r.is_available
      AND ($3::VARCHAR IS NULL OR r.room_type = $3)
      AND NOT EXISTS (
          SELECT 1 FROM bookings b
          WHERE b.room_id = r.id
            AND b.check_in_date <= $2
            AND b.check_out_date >= $1
      )
    ORDER BY r.number
    "#;

// language=postgresql
const AVAILABLE_SAME_DAY: &str = r#"
    SELECT r.id, r.number, r.room_type, r.nightly_rate, r.is_available
    FROM rooms r
    WHERE r.is_available
      AND ($3::VARCHAR IS NULL OR r.room_type = $3)
      AND NOT EXISTS (
          SELECT 1 FROM bookings b
          WHERE b.room_id = r.id
            AND b.check_in_date < $2
            AND b.check_out_date > $1
      )
    ORDER BY r.number
    "#;

pub(in crate::database) struct PgRoomInternal;

impl PgRoomInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        let row = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            SELECT id, number, room_type, nightly_rate, is_available
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Room::try_from).transpose()
    }

    async fn find_by_id_for_update(
        con: &mut PgConnection,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        let row = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            SELECT id, number, room_type, nightly_rate, is_available
            FROM rooms
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Room::try_from).transpose()
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Room>, KernelError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            SELECT id, number, room_type, nightly_rate, is_available
            FROM rooms
            ORDER BY number
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Room::try_from).collect()
    }

    async fn find_available(
        con: &mut PgConnection,
        stay: &Stay,
        room_type: Option<&RoomType>,
        policy: TurnoverPolicy,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        let sql = match policy {
            TurnoverPolicy::Inclusive => AVAILABLE_INCLUSIVE,
            TurnoverPolicy::SameDay => AVAILABLE_SAME_DAY,
        };
        let rows = sqlx::query_as::<_, RoomRow>(sql)
            .bind(stay.check_in())
            .bind(stay.check_out())
            .bind(room_type.map(RoomType::code))
            .fetch_all(con)
            .await
            .convert_error()?;
        rows.into_iter().map(Room::try_from).collect()
    }

    async fn count(con: &mut PgConnection) -> error_stack::Result<u64, KernelError> {
        // language=postgresql
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms")
            .fetch_one(con)
            .await
            .convert_error()?;
        to_count(count)
    }

    async fn count_occupied(con: &mut PgConnection) -> error_stack::Result<u64, KernelError> {
        // language=postgresql
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms WHERE NOT is_available")
                .fetch_one(con)
                .await
                .convert_error()?;
        to_count(count)
    }

    async fn create(con: &mut PgConnection, room: &Room) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO rooms (id, number, room_type, nightly_rate, is_available)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(room.id().as_ref())
        .bind(room.number().as_ref())
        .bind(room.room_type().code())
        .bind(Decimal::from(*room.rate().as_ref()))
        .bind(room.is_available().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, room: &Room) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE rooms
            SET number = $2, room_type = $3, nightly_rate = $4, is_available = $5
            WHERE id = $1
            "#,
        )
        .bind(room.id().as_ref())
        .bind(room.number().as_ref())
        .bind(room.room_type().code())
        .bind(Decimal::from(*room.rate().as_ref()))
        .bind(room.is_available().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, room_id: &RoomId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(room_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::Rng;
    use rust_decimal::Decimal;
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::RoomQuery;
    use kernel::interface::update::{BookingModifier, GuestModifier, RoomModifier};
    use kernel::prelude::entity::{
        Address, Booking, BookingId, BookingStatus, FirstName, Guest, GuestEmail, GuestId,
        IsAvailable, LastName, Money, NightlyRate, PaymentMethod, PhoneNumber, Room, RoomId,
        RoomNumber, RoomType, Stay, TurnoverPolicy,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresBookingRepository, PostgresDatabase, PostgresGuestRepository,
        PostgresRoomRepository,
    };

    fn room() -> Room {
        let number = rand::thread_rng().gen_range(10000..100000).to_string();
        Room::new(
            RoomId::new(Uuid::new_v4()),
            RoomNumber::new(number),
            RoomType::QueenSuite,
            NightlyRate::new(Money::new(Decimal::new(18000, 2))),
            IsAvailable::new(true),
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let room = room();
        let id = room.id().clone();

        PostgresRoomRepository.create(&mut con, &room).await?;
        let found = PostgresRoomRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(room.clone()));

        let mut room = room;
        room.substitute(|room| *room.rate = NightlyRate::new(Money::new(Decimal::new(21000, 2))));
        PostgresRoomRepository.update(&mut con, &room).await?;
        let found = PostgresRoomRepository
            .find_by_id_for_update(&mut con, &id)
            .await?;
        assert_eq!(found, Some(room));

        PostgresRoomRepository.delete(&mut con, &id).await?;
        let found = PostgresRoomRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn duplicate_number_is_reported() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let first = room();
        let second = Room::new(
            RoomId::new(Uuid::new_v4()),
            first.number().clone(),
            RoomType::SingleKing,
            NightlyRate::new(Money::new(Decimal::new(9000, 2))),
            IsAvailable::new(true),
        );

        PostgresRoomRepository.create(&mut con, &first).await?;
        let err = PostgresRoomRepository
            .create(&mut con, &second)
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::RoomNumberTaken);
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn availability_follows_turnover_policy() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let room = room();
        let guest = Guest::new(
            GuestId::new(Uuid::new_v4()),
            FirstName::new("Search"),
            LastName::new("Test"),
            GuestEmail::new(format!("{}@example.com", Uuid::new_v4())),
            PhoneNumber::new("555-0100"),
            Address::default(),
            None,
        );
        let today = OffsetDateTime::now_utc().date();
        let booked = Stay::new(today, today + Duration::days(2))?;
        PostgresRoomRepository.create(&mut con, &room).await?;
        PostgresGuestRepository.create(&mut con, &guest).await?;
        PostgresBookingRepository
            .create(
                &mut con,
                &Booking::new(
                    BookingId::new(Uuid::new_v4()),
                    guest.id().clone(),
                    room.id().clone(),
                    booked,
                    Money::new(Decimal::new(36000, 2)),
                    BookingStatus::Reserved,
                    PaymentMethod::Cash,
                ),
            )
            .await?;

        let turnover = Stay::new(today + Duration::days(2), today + Duration::days(3))?;
        let contains = |rooms: Vec<Room>| rooms.iter().any(|found| found.id() == room.id());
        let inclusive = PostgresRoomRepository
            .find_available(
                &mut con,
                &turnover,
                Some(&RoomType::QueenSuite),
                TurnoverPolicy::Inclusive,
            )
            .await?;
        assert!(!contains(inclusive));
        let same_day = PostgresRoomRepository
            .find_available(
                &mut con,
                &turnover,
                Some(&RoomType::QueenSuite),
                TurnoverPolicy::SameDay,
            )
            .await?;
        assert!(contains(same_day));
        let other_type = PostgresRoomRepository
            .find_available(
                &mut con,
                &turnover,
                Some(&RoomType::SingleKing),
                TurnoverPolicy::SameDay,
            )
            .await?;
        assert!(!contains(other_type));
        Ok(())
    }
}
