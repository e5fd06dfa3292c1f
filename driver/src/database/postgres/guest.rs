use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::GuestQuery;
use kernel::interface::update::GuestModifier;
use kernel::prelude::entity::{
    Address, DateOfBirth, FirstName, Guest, GuestEmail, GuestId, LastName, PhoneNumber,
};
use kernel::KernelError;

use super::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresGuestRepository;

#[async_trait::async_trait]
impl GuestQuery for PostgresGuestRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &GuestId,
    ) -> error_stack::Result<Option<Guest>, KernelError> {
        PgGuestInternal::find_by_id(con, id).await
    }

    async fn find_by_email(
        &self,
        con: &mut PostgresTransaction,
        email: &GuestEmail,
    ) -> error_stack::Result<Option<Guest>, KernelError> {
        PgGuestInternal::find_by_email(con, email).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Guest>, KernelError> {
        PgGuestInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl GuestModifier for PostgresGuestRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        guest: &Guest,
    ) -> error_stack::Result<(), KernelError> {
        PgGuestInternal::create(con, guest).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        guest: &Guest,
    ) -> error_stack::Result<(), KernelError> {
        PgGuestInternal::update(con, guest).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        guest_id: &GuestId,
    ) -> error_stack::Result<(), KernelError> {
        PgGuestInternal::delete(con, guest_id).await
    }
}

#[derive(sqlx::FromRow)]
struct GuestRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    address: String,
    date_of_birth: Option<Date>,
}

impl From<GuestRow> for Guest {
    fn from(value: GuestRow) -> Self {
        Guest::new(
            GuestId::new(value.id),
            FirstName::new(value.first_name),
            LastName::new(value.last_name),
            GuestEmail::new(value.email),
            PhoneNumber::new(value.phone_number),
            Address::new(value.address),
            value.date_of_birth.map(DateOfBirth::new),
        )
    }
}

pub(in crate::database) struct PgGuestInternal;

impl PgGuestInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &GuestId,
    ) -> error_stack::Result<Option<Guest>, KernelError> {
        let row = sqlx::query_as::<_, GuestRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, email, phone_number, address, date_of_birth
            FROM guests
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Guest::from))
    }

    async fn find_by_email(
        con: &mut PgConnection,
        email: &GuestEmail,
    ) -> error_stack::Result<Option<Guest>, KernelError> {
        let row = sqlx::query_as::<_, GuestRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, email, phone_number, address, date_of_birth
            FROM guests
            WHERE email = $1
            "#,
        )
        .bind(email.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Guest::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Guest>, KernelError> {
        let rows = sqlx::query_as::<_, GuestRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, email, phone_number, address, date_of_birth
            FROM guests
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Guest::from).collect())
    }

    async fn create(con: &mut PgConnection, guest: &Guest) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO guests (id, first_name, last_name, email, phone_number, address, date_of_birth)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(guest.id().as_ref())
        .bind(guest.first_name().as_ref())
        .bind(guest.last_name().as_ref())
        .bind(guest.email().as_ref())
        .bind(guest.phone_number().as_ref())
        .bind(guest.address().as_ref())
        .bind(guest.date_of_birth().map(Date::from))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, guest: &Guest) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE guests
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
                address = $6, date_of_birth = $7
            WHERE id = $1
            "#,
        )
        .bind(guest.id().as_ref())
        .bind(guest.first_name().as_ref())
        .bind(guest.last_name().as_ref())
        .bind(guest.email().as_ref())
        .bind(guest.phone_number().as_ref())
        .bind(guest.address().as_ref())
        .bind(guest.date_of_birth().map(Date::from))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        guest_id: &GuestId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM guests
            WHERE id = $1
            "#,
        )
        .bind(guest_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
