//! In-memory stand-ins for the driver crate, used by the service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use error_stack::Report;
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::payment::{DependOnPaymentGateway, PaymentGateway};
use kernel::interface::policy::DependOnTurnoverPolicy;
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnGuestQuery, DependOnInvoiceQuery,
    DependOnRoomQuery, GuestQuery, InvoiceQuery, RoomQuery,
};
use kernel::interface::update::{
    BookingModifier, DependOnBookingModifier, DependOnGuestModifier, DependOnInvoiceModifier,
    DependOnRoomModifier, GuestModifier, InvoiceModifier, RoomModifier,
};
use kernel::prelude::entity::{
    Actor, Address, Booking, BookingId, BookingStatus, ClientSecret, DateOfBirth, FirstName,
    Guest, GuestEmail, GuestId, Invoice, InvoiceId, IsAvailable, IsPaid, LastName, Money,
    NightlyRate, PaymentMethod, Period, PhoneNumber, Role, Room, RoomId, RoomNumber, RoomType,
    Stay, TurnoverPolicy,
};
use kernel::KernelError;
use rust_decimal::Decimal;
use time::macros::date;
use time::{Date, Duration};
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::transfer::RoomDto;

const TODAY: Date = date!(2026 - 10 - 19);

#[derive(Debug, Clone, Default)]
pub struct Store {
    rooms: Vec<Room>,
    guests: Vec<Guest>,
    bookings: Vec<Booking>,
    invoices: Vec<Invoice>,
}

impl Store {
    fn remove_bookings(&mut self, doomed: impl Fn(&Booking) -> bool) {
        let removed = self
            .bookings
            .iter()
            .filter(|booking| doomed(booking))
            .map(|booking| booking.id().clone())
            .collect::<Vec<_>>();
        self.bookings.retain(|booking| !removed.contains(booking.id()));
        self.invoices
            .retain(|invoice| !removed.contains(invoice.booking_id()));
    }

    fn is_settled(&self, booking: &Booking) -> bool {
        self.invoices
            .iter()
            .any(|invoice| invoice.booking_id() == booking.id() && *invoice.is_paid().as_ref())
    }
}

/// Every transaction holds the whole store, so transactions run one at a time.
#[derive(Clone, Default)]
pub struct MemoryDatabase(Arc<Mutex<Store>>);

/// Works on a copy of the store which is written back on commit.
pub struct MemoryTransaction {
    guard: OwnedMutexGuard<Store>,
    working: Store,
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Transaction = MemoryTransaction;

    async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
        let guard = Arc::clone(&self.0).lock_owned().await;
        let working = guard.clone();
        Ok(MemoryTransaction { guard, working })
    }
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let MemoryTransaction { mut guard, working } = self;
        *guard = working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

pub struct MemoryRoomRepository;

#[async_trait::async_trait]
impl RoomQuery for MemoryRoomRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        Ok(con.working.rooms.iter().find(|room| room.id() == id).cloned())
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut MemoryTransaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        self.find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        Ok(con.working.rooms.clone())
    }

    async fn find_available(
        &self,
        con: &mut MemoryTransaction,
        stay: &Stay,
        room_type: Option<&RoomType>,
        policy: TurnoverPolicy,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        let store = &con.working;
        Ok(store
            .rooms
            .iter()
            .filter(|room| *room.is_available().as_ref())
            .filter(|room| room_type.map_or(true, |kind| room.room_type() == kind))
            .filter(|room| {
                !store.bookings.iter().any(|booking| {
                    booking.room_id() == room.id() && booking.stay().overlaps(stay, policy)
                })
            })
            .cloned()
            .collect())
    }

    async fn count(&self, con: &mut MemoryTransaction) -> error_stack::Result<u64, KernelError> {
        Ok(con.working.rooms.len() as u64)
    }

    async fn count_occupied(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<u64, KernelError> {
        Ok(con
            .working
            .rooms
            .iter()
            .filter(|room| !*room.is_available().as_ref())
            .count() as u64)
    }
}

#[async_trait::async_trait]
impl RoomModifier for MemoryRoomRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        room: &Room,
    ) -> error_stack::Result<(), KernelError> {
        if con
            .working
            .rooms
            .iter()
            .any(|other| other.number() == room.number())
        {
            return Err(Report::new(KernelError::RoomNumberTaken));
        }
        con.working.rooms.push(room.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        room: &Room,
    ) -> error_stack::Result<(), KernelError> {
        if con
            .working
            .rooms
            .iter()
            .any(|other| other.id() != room.id() && other.number() == room.number())
        {
            return Err(Report::new(KernelError::RoomNumberTaken));
        }
        let slot = con
            .working
            .rooms
            .iter_mut()
            .find(|other| other.id() == room.id())
            .ok_or_else(|| Report::new(KernelError::RoomNotFound))?;
        *slot = room.clone();
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError> {
        con.working.rooms.retain(|room| room.id() != room_id);
        con.working
            .remove_bookings(|booking| booking.room_id() == room_id);
        Ok(())
    }
}

pub struct MemoryGuestRepository;

#[async_trait::async_trait]
impl GuestQuery for MemoryGuestRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &GuestId,
    ) -> error_stack::Result<Option<Guest>, KernelError> {
        Ok(con
            .working
            .guests
            .iter()
            .find(|guest| guest.id() == id)
            .cloned())
    }

    async fn find_by_email(
        &self,
        con: &mut MemoryTransaction,
        email: &GuestEmail,
    ) -> error_stack::Result<Option<Guest>, KernelError> {
        Ok(con
            .working
            .guests
            .iter()
            .find(|guest| guest.email() == email)
            .cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Guest>, KernelError> {
        Ok(con.working.guests.clone())
    }
}

#[async_trait::async_trait]
impl GuestModifier for MemoryGuestRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        guest: &Guest,
    ) -> error_stack::Result<(), KernelError> {
        if con
            .working
            .guests
            .iter()
            .any(|other| other.email() == guest.email())
        {
            return Err(Report::new(KernelError::EmailTaken));
        }
        con.working.guests.push(guest.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        guest: &Guest,
    ) -> error_stack::Result<(), KernelError> {
        if con
            .working
            .guests
            .iter()
            .any(|other| other.id() != guest.id() && other.email() == guest.email())
        {
            return Err(Report::new(KernelError::EmailTaken));
        }
        let slot = con
            .working
            .guests
            .iter_mut()
            .find(|other| other.id() == guest.id())
            .ok_or_else(|| Report::new(KernelError::GuestNotFound))?;
        *slot = guest.clone();
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        guest_id: &GuestId,
    ) -> error_stack::Result<(), KernelError> {
        con.working.guests.retain(|guest| guest.id() != guest_id);
        con.working
            .remove_bookings(|booking| booking.guest_id() == guest_id);
        Ok(())
    }
}

pub struct MemoryBookingRepository;

#[async_trait::async_trait]
impl BookingQuery for MemoryBookingRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        Ok(con
            .working
            .bookings
            .iter()
            .find(|booking| booking.id() == id)
            .cloned())
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut MemoryTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        self.find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        Ok(con.working.bookings.clone())
    }

    async fn find_by_guest_id(
        &self,
        con: &mut MemoryTransaction,
        guest_id: &GuestId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        Ok(con
            .working
            .bookings
            .iter()
            .filter(|booking| booking.guest_id() == guest_id)
            .cloned()
            .collect())
    }

    async fn find_by_room_id(
        &self,
        con: &mut MemoryTransaction,
        room_id: &RoomId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        Ok(con
            .working
            .bookings
            .iter()
            .filter(|booking| booking.room_id() == room_id)
            .cloned()
            .collect())
    }

    async fn find_settled_within(
        &self,
        con: &mut MemoryTransaction,
        period: &Period,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let store = &con.working;
        Ok(store
            .bookings
            .iter()
            .filter(|booking| {
                booking.stay().check_in() <= period.end()
                    && booking.stay().check_out() >= period.start()
            })
            .filter(|booking| store.is_settled(booking))
            .cloned()
            .collect())
    }

    async fn count_covering(
        &self,
        con: &mut MemoryTransaction,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        Ok(con
            .working
            .bookings
            .iter()
            .filter(|booking| booking.is_active() && booking.stay().covers(*date))
            .count() as u64)
    }

    async fn count_arrivals(
        &self,
        con: &mut MemoryTransaction,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        Ok(con
            .working
            .bookings
            .iter()
            .filter(|booking| booking.stay().check_in() == date)
            .count() as u64)
    }

    async fn count_departures(
        &self,
        con: &mut MemoryTransaction,
        date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        Ok(con
            .working
            .bookings
            .iter()
            .filter(|booking| booking.stay().check_out() == date)
            .count() as u64)
    }
}

#[async_trait::async_trait]
impl BookingModifier for MemoryBookingRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        con.working.bookings.push(booking.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        let slot = con
            .working
            .bookings
            .iter_mut()
            .find(|other| other.id() == booking.id())
            .ok_or_else(|| Report::new(KernelError::BookingNotFound))?;
        *slot = booking.clone();
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        booking_id: &BookingId,
    ) -> error_stack::Result<(), KernelError> {
        con.working
            .remove_bookings(|booking| booking.id() == booking_id);
        Ok(())
    }
}

pub struct MemoryInvoiceRepository;

#[async_trait::async_trait]
impl InvoiceQuery for MemoryInvoiceRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &InvoiceId,
    ) -> error_stack::Result<Option<Invoice>, KernelError> {
        Ok(con
            .working
            .invoices
            .iter()
            .find(|invoice| invoice.id() == id)
            .cloned())
    }

    async fn find_by_booking_id(
        &self,
        con: &mut MemoryTransaction,
        booking_id: &BookingId,
    ) -> error_stack::Result<Option<Invoice>, KernelError> {
        Ok(con
            .working
            .invoices
            .iter()
            .find(|invoice| invoice.booking_id() == booking_id)
            .cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Invoice>, KernelError> {
        Ok(con.working.invoices.clone())
    }

    async fn find_by_guest_id(
        &self,
        con: &mut MemoryTransaction,
        guest_id: &GuestId,
    ) -> error_stack::Result<Vec<Invoice>, KernelError> {
        let store = &con.working;
        Ok(store
            .invoices
            .iter()
            .filter(|invoice| {
                store.bookings.iter().any(|booking| {
                    booking.id() == invoice.booking_id() && booking.guest_id() == guest_id
                })
            })
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl InvoiceModifier for MemoryInvoiceRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        invoice: &Invoice,
    ) -> error_stack::Result<(), KernelError> {
        if con
            .working
            .invoices
            .iter()
            .any(|other| other.booking_id() == invoice.booking_id())
        {
            return Err(Report::new(KernelError::InvoiceAlreadyExists));
        }
        con.working.invoices.push(invoice.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        invoice: &Invoice,
    ) -> error_stack::Result<(), KernelError> {
        let slot = con
            .working
            .invoices
            .iter_mut()
            .find(|other| other.id() == invoice.id())
            .ok_or_else(|| Report::new(KernelError::InvoiceNotFound))?;
        *slot = invoice.clone();
        Ok(())
    }
}

pub struct FixedClock(Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[derive(Default)]
pub struct FakeGateway {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_intent(&self, amount: &Money) -> error_stack::Result<ClientSecret, KernelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let cents = amount
            .to_minor_units()
            .ok_or_else(|| Report::new(KernelError::PaymentFailed))?;
        Ok(ClientSecret::new(format!("pi_{cents}_secret_test")))
    }
}

pub struct TestModule {
    database: MemoryDatabase,
    clock: FixedClock,
    gateway: FakeGateway,
    policy: TurnoverPolicy,
}

impl TestModule {
    pub fn new() -> Self {
        Self::with_policy(TurnoverPolicy::default())
    }

    pub fn with_policy(policy: TurnoverPolicy) -> Self {
        Self {
            database: MemoryDatabase::default(),
            clock: FixedClock(TODAY),
            gateway: FakeGateway::default(),
            policy,
        }
    }

    pub fn today(&self) -> Date {
        TODAY
    }

    pub fn gateway_calls(&self) -> usize {
        self.gateway.calls.load(Ordering::SeqCst)
    }

    /// Adds a single-queen room directly to the store.
    pub async fn room(&self, number: &str, rate: Decimal) -> Uuid {
        let id = Uuid::new_v4();
        self.database.0.lock().await.rooms.push(Room::new(
            RoomId::new(id),
            RoomNumber::new(number),
            RoomType::SingleQueen,
            NightlyRate::new(Money::new(rate)),
            IsAvailable::default(),
        ));
        id
    }

    pub async fn guest(&self, email: &str) -> Uuid {
        self.guest_with(email, "1 Main St, Springfield, USA", Some(date!(1990 - 01 - 01)))
            .await
    }

    pub async fn guest_with(&self, email: &str, address: &str, born: Option<Date>) -> Uuid {
        let id = Uuid::new_v4();
        self.database.0.lock().await.guests.push(Guest::new(
            GuestId::new(id),
            FirstName::new("Test"),
            LastName::new("Guest"),
            GuestEmail::new(email),
            PhoneNumber::new("555-0100"),
            Address::new(address),
            born.map(DateOfBirth::new),
        ));
        id
    }

    /// Records a booking as-is, bypassing admission. `nights` are offsets from today.
    pub async fn booking(
        &self,
        guest: Uuid,
        room: Uuid,
        nights: (i64, i64),
        status: BookingStatus,
        total_price: Decimal,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let stay = Stay::new(TODAY + Duration::days(nights.0), TODAY + Duration::days(nights.1))
            .expect("test stays are well formed");
        self.database.0.lock().await.bookings.push(Booking::new(
            BookingId::new(id),
            GuestId::new(guest),
            RoomId::new(room),
            stay,
            Money::new(total_price),
            status,
            PaymentMethod::CreditCard,
        ));
        id
    }

    pub async fn seed_invoice(&self, booking: Uuid, paid: bool) -> Uuid {
        let id = Uuid::new_v4();
        let mut store = self.database.0.lock().await;
        let amount = store
            .bookings
            .iter()
            .find(|stored| stored.id().as_ref() == &booking)
            .map_or_else(Money::zero, |stored| *stored.total_price());
        store.invoices.push(Invoice::new(
            InvoiceId::new(id),
            BookingId::new(booking),
            amount,
            PaymentMethod::CreditCard,
            IsPaid::new(paid),
        ));
        id
    }

    pub async fn room_state(&self, id: Uuid) -> RoomDto {
        let store = self.database.0.lock().await;
        let room = store
            .rooms
            .iter()
            .find(|room| room.id().as_ref() == &id)
            .cloned()
            .expect("room exists");
        RoomDto::from(room)
    }

    pub async fn invoice_count(&self, booking: Uuid) -> usize {
        self.database
            .0
            .lock()
            .await
            .invoices
            .iter()
            .filter(|invoice| invoice.booking_id().as_ref() == &booking)
            .count()
    }
}

pub fn actor(role: Role) -> Actor {
    Actor::new(role, None)
}

pub fn guest_actor(guest: Uuid) -> Actor {
    Actor::new(Role::Guest, Some(GuestId::new(guest)))
}

impl DependOnDatabaseConnection for TestModule {
    type DatabaseConnection = MemoryDatabase;
    fn database_connection(&self) -> &MemoryDatabase {
        &self.database
    }
}

impl DependOnClock for TestModule {
    type Clock = FixedClock;
    fn clock(&self) -> &FixedClock {
        &self.clock
    }
}

impl DependOnPaymentGateway for TestModule {
    type PaymentGateway = FakeGateway;
    fn payment_gateway(&self) -> &FakeGateway {
        &self.gateway
    }
}

impl DependOnTurnoverPolicy for TestModule {
    fn turnover_policy(&self) -> TurnoverPolicy {
        self.policy
    }
}

impl DependOnRoomQuery for TestModule {
    type RoomQuery = MemoryRoomRepository;
    fn room_query(&self) -> &MemoryRoomRepository {
        &MemoryRoomRepository
    }
}

impl DependOnRoomModifier for TestModule {
    type RoomModifier = MemoryRoomRepository;
    fn room_modifier(&self) -> &MemoryRoomRepository {
        &MemoryRoomRepository
    }
}

impl DependOnGuestQuery for TestModule {
    type GuestQuery = MemoryGuestRepository;
    fn guest_query(&self) -> &MemoryGuestRepository {
        &MemoryGuestRepository
    }
}

impl DependOnGuestModifier for TestModule {
    type GuestModifier = MemoryGuestRepository;
    fn guest_modifier(&self) -> &MemoryGuestRepository {
        &MemoryGuestRepository
    }
}

impl DependOnBookingQuery for TestModule {
    type BookingQuery = MemoryBookingRepository;
    fn booking_query(&self) -> &MemoryBookingRepository {
        &MemoryBookingRepository
    }
}

impl DependOnBookingModifier for TestModule {
    type BookingModifier = MemoryBookingRepository;
    fn booking_modifier(&self) -> &MemoryBookingRepository {
        &MemoryBookingRepository
    }
}

impl DependOnInvoiceQuery for TestModule {
    type InvoiceQuery = MemoryInvoiceRepository;
    fn invoice_query(&self) -> &MemoryInvoiceRepository {
        &MemoryInvoiceRepository
    }
}

impl DependOnInvoiceModifier for TestModule {
    type InvoiceModifier = MemoryInvoiceRepository;
    fn invoice_modifier(&self) -> &MemoryInvoiceRepository {
        &MemoryInvoiceRepository
    }
}
