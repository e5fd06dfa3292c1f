use std::ops::Deref;
use std::sync::Arc;

use driver::clock::SystemClock;
use driver::database::{
    PostgresBookingRepository, PostgresDatabase, PostgresGuestRepository,
    PostgresInvoiceRepository, PostgresRoomRepository,
};
use driver::payment::StripePaymentGateway;
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::payment::DependOnPaymentGateway;
use kernel::interface::policy::DependOnTurnoverPolicy;
use kernel::interface::query::{
    DependOnBookingQuery, DependOnGuestQuery, DependOnInvoiceQuery, DependOnRoomQuery,
};
use kernel::interface::update::{
    DependOnBookingModifier, DependOnGuestModifier, DependOnInvoiceModifier,
    DependOnRoomModifier,
};
use kernel::prelude::entity::TurnoverPolicy;
use kernel::KernelError;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(config: &AppConfig) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(config).await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    pgpool: PostgresDatabase,
    clock: SystemClock,
    payment: StripePaymentGateway,
    policy: TurnoverPolicy,
}

impl Handler {
    pub async fn init(config: &AppConfig) -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;
        let clock = SystemClock::from_hours(config.utc_offset_hours)?;
        let payment = StripePaymentGateway::new()?;
        tracing::info!(policy = ?config.turnover_policy, "handler initialised");

        Ok(Self {
            pgpool,
            clock,
            payment,
            policy: config.turnover_policy,
        })
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &PostgresDatabase {
        &self.pgpool
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &SystemClock {
        &self.clock
    }
}

impl DependOnPaymentGateway for Handler {
    type PaymentGateway = StripePaymentGateway;
    fn payment_gateway(&self) -> &StripePaymentGateway {
        &self.payment
    }
}

impl DependOnTurnoverPolicy for Handler {
    fn turnover_policy(&self) -> TurnoverPolicy {
        self.policy
    }
}

impl DependOnRoomQuery for Handler {
    type RoomQuery = PostgresRoomRepository;
    fn room_query(&self) -> &PostgresRoomRepository {
        &PostgresRoomRepository
    }
}

impl DependOnRoomModifier for Handler {
    type RoomModifier = PostgresRoomRepository;
    fn room_modifier(&self) -> &PostgresRoomRepository {
        &PostgresRoomRepository
    }
}

impl DependOnGuestQuery for Handler {
    type GuestQuery = PostgresGuestRepository;
    fn guest_query(&self) -> &PostgresGuestRepository {
        &PostgresGuestRepository
    }
}

impl DependOnGuestModifier for Handler {
    type GuestModifier = PostgresGuestRepository;
    fn guest_modifier(&self) -> &PostgresGuestRepository {
        &PostgresGuestRepository
    }
}

impl DependOnBookingQuery for Handler {
    type BookingQuery = PostgresBookingRepository;
    fn booking_query(&self) -> &PostgresBookingRepository {
        &PostgresBookingRepository
    }
}

impl DependOnBookingModifier for Handler {
    type BookingModifier = PostgresBookingRepository;
    fn booking_modifier(&self) -> &PostgresBookingRepository {
        &PostgresBookingRepository
    }
}

impl DependOnInvoiceQuery for Handler {
    type InvoiceQuery = PostgresInvoiceRepository;
    fn invoice_query(&self) -> &PostgresInvoiceRepository {
        &PostgresInvoiceRepository
    }
}

impl DependOnInvoiceModifier for Handler {
    type InvoiceModifier = PostgresInvoiceRepository;
    fn invoice_modifier(&self) -> &PostgresInvoiceRepository {
        &PostgresInvoiceRepository
    }
}
