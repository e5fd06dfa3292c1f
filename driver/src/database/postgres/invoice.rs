use error_stack::Report;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::InvoiceQuery;
use kernel::interface::update::InvoiceModifier;
use kernel::prelude::entity::{
    BookingId, GuestId, Invoice, InvoiceId, IsPaid, Money, PaymentMethod,
};
use kernel::KernelError;

use super::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresInvoiceRepository;

#[async_trait::async_trait]
impl InvoiceQuery for PostgresInvoiceRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &InvoiceId,
    ) -> error_stack::Result<Option<Invoice>, KernelError> {
        PgInvoiceInternal::find_by_id(con, id).await
    }

    async fn find_by_booking_id(
        &self,
        con: &mut PostgresTransaction,
        booking_id: &BookingId,
    ) -> error_stack::Result<Option<Invoice>, KernelError> {
        PgInvoiceInternal::find_by_booking_id(con, booking_id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Invoice>, KernelError> {
        PgInvoiceInternal::find_all(con).await
    }

    async fn find_by_guest_id(
        &self,
        con: &mut PostgresTransaction,
        guest_id: &GuestId,
    ) -> error_stack::Result<Vec<Invoice>, KernelError> {
        PgInvoiceInternal::find_by_guest_id(con, guest_id).await
    }
}

#[async_trait::async_trait]
impl InvoiceModifier for PostgresInvoiceRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        invoice: &Invoice,
    ) -> error_stack::Result<(), KernelError> {
        PgInvoiceInternal::create(con, invoice).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        invoice: &Invoice,
    ) -> error_stack::Result<(), KernelError> {
        PgInvoiceInternal::update(con, invoice).await
    }
}

#[derive(sqlx::FromRow)]
struct InvoiceRow {
    id: Uuid,
    booking_id: Uuid,
    amount: Decimal,
    payment_method: String,
    is_paid: bool,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = Report<KernelError>;
    fn try_from(value: InvoiceRow) -> Result<Self, Self::Error> {
        let payment_method = PaymentMethod::from_code(&value.payment_method).ok_or_else(|| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("unknown payment method: {}", value.payment_method))
        })?;
        Ok(Invoice::new(
            InvoiceId::new(value.id),
            BookingId::new(value.booking_id),
            Money::new(value.amount),
            payment_method,
            IsPaid::new(value.is_paid),
        ))
    }
}

pub(in crate::database) struct PgInvoiceInternal;

impl PgInvoiceInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &InvoiceId,
    ) -> error_stack::Result<Option<Invoice>, KernelError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            // language=postgresql
            r#"
            SELECT id, booking_id, amount, payment_method, is_paid
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Invoice::try_from).transpose()
    }

    async fn find_by_booking_id(
        con: &mut PgConnection,
        booking_id: &BookingId,
    ) -> error_stack::Result<Option<Invoice>, KernelError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            // language=postgresql
            r#"
            SELECT id, booking_id, amount, payment_method, is_paid
            FROM invoices
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Invoice::try_from).transpose()
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Invoice>, KernelError> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            // language=postgresql
            r#"
            SELECT id, booking_id, amount, payment_method, is_paid
            FROM invoices
            ORDER BY is_paid, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Invoice::try_from).collect()
    }

    async fn find_by_guest_id(
        con: &mut PgConnection,
        guest_id: &GuestId,
    ) -> error_stack::Result<Vec<Invoice>, KernelError> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            // language=postgresql
            r#"
            SELECT i.id, i.booking_id, i.amount, i.payment_method, i.is_paid
            FROM invoices i
            JOIN bookings b ON b.id = i.booking_id
            WHERE b.guest_id = $1
            ORDER BY i.is_paid, i.id
            "#,
        )
        .bind(guest_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Invoice::try_from).collect()
    }

    async fn create(
        con: &mut PgConnection,
        invoice: &Invoice,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO invoices (id, booking_id, amount, payment_method, is_paid)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(invoice.id().as_ref())
        .bind(invoice.booking_id().as_ref())
        .bind(Decimal::from(*invoice.amount()))
        .bind(invoice.payment_method().code())
        .bind(invoice.is_paid().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        invoice: &Invoice,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE invoices
            SET is_paid = $2
            WHERE id = $1
            "#,
        )
        .bind(invoice.id().as_ref())
        .bind(invoice.is_paid().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
