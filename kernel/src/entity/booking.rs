mod id;
mod payment_method;
mod stay;
mod status;

pub use self::{id::*, payment_method::*, stay::*, status::*};
use destructure::Destructure;
use error_stack::Report;
use time::Date;
use vodca::References;

use crate::entity::{GuestId, Invoice, InvoiceId, Money, Room, RoomId, TurnoverPolicy};
use crate::KernelError;

const TOTAL_PRECISION: u32 = 10;
const TOTAL_SCALE: u32 = 2;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Booking {
    id: BookingId,
    guest_id: GuestId,
    room_id: RoomId,
    stay: Stay,
    total_price: Money,
    status: BookingStatus,
    payment_method: PaymentMethod,
}

/// Unvalidated request for a new booking as received from a client.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Reservation {
    guest_id: GuestId,
    room_id: RoomId,
    check_in: Date,
    check_out: Date,
    payment_method: Option<String>,
}

impl Reservation {
    pub fn new(
        guest_id: GuestId,
        room_id: RoomId,
        check_in: Date,
        check_out: Date,
        payment_method: Option<String>,
    ) -> Self {
        Self {
            guest_id,
            room_id,
            check_in,
            check_out,
            payment_method,
        }
    }
}

impl Booking {
    pub fn new(
        id: BookingId,
        guest_id: GuestId,
        room_id: RoomId,
        stay: Stay,
        total_price: Money,
        status: BookingStatus,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id,
            guest_id,
            room_id,
            stay,
            total_price,
            status,
            payment_method,
        }
    }

    /// Runs the admission checks in order and prices the stay.
    ///
    /// `booked` are the bookings already recorded for `room`; only active ones block the new stay.
    pub fn admit(
        id: BookingId,
        reservation: Reservation,
        room: &Room,
        booked: &[Booking],
        today: Date,
        policy: TurnoverPolicy,
    ) -> Result<Self, Report<KernelError>> {
        let DestructReservation {
            guest_id,
            room_id,
            check_in,
            check_out,
            payment_method,
        } = reservation.into_destruct();
        if &room_id != room.id() {
            return Err(Report::new(KernelError::Internal)
                .attach_printable("reservation and room do not match"));
        }

        let stay = Stay::new(check_in, check_out)?;
        if check_in < today {
            return Err(Report::new(KernelError::PastCheckIn)
                .attach_printable(format!("check_in: {check_in}, today: {today}")));
        }
        let payment_method = PaymentMethod::parse(payment_method.as_deref())?;
        let conflict = booked
            .iter()
            .filter(|booking| booking.room_id == room_id && booking.is_active())
            .find(|booking| booking.stay.overlaps(&stay, policy));
        if let Some(conflict) = conflict {
            return Err(Report::new(KernelError::RoomUnavailable)
                .attach_printable(format!("overlaps booking {:?}", conflict.id.as_ref())));
        }

        let total_price = room.rate().price_for(stay.nights());
        if !total_price.fits(TOTAL_PRECISION, TOTAL_SCALE) {
            return Err(Report::new(KernelError::PriceOutOfRange)
                .attach_printable(format!("total price: {total_price:?}")));
        }
        Ok(Self::new(
            id,
            guest_id,
            room_id,
            stay,
            total_price,
            BookingStatus::Reserved,
            payment_method,
        ))
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Moves a reserved booking into the room. Booking and room change together or not at all.
    pub fn check_in(&mut self, room: &mut Room, today: Date) -> Result<(), Report<KernelError>> {
        self.ensure_room(room)?;
        if self.status != BookingStatus::Reserved {
            return Err(Report::new(KernelError::BookingNotActive)
                .attach_printable(format!("status: {:?}", self.status)));
        }
        if self.stay.check_in() != &today {
            return Err(Report::new(KernelError::WrongCheckInDate).attach_printable(format!(
                "check_in: {}, today: {today}",
                self.stay.check_in()
            )));
        }
        self.status = BookingStatus::CheckedIn;
        room.occupy();
        Ok(())
    }

    /// Concludes the stay, frees the room and issues the one invoice this booking will ever get.
    pub fn check_out(
        &mut self,
        room: &mut Room,
        invoice_id: InvoiceId,
    ) -> Result<Invoice, Report<KernelError>> {
        self.ensure_room(room)?;
        match self.status {
            BookingStatus::Reserved => return Err(Report::new(KernelError::NotCheckedIn)),
            BookingStatus::CheckedOut => return Err(Report::new(KernelError::AlreadyCheckedOut)),
            BookingStatus::CheckedIn => {}
        }
        self.status = BookingStatus::CheckedOut;
        room.vacate();
        Ok(Invoice::issue(invoice_id, self))
    }

    /// Prepares the booking for removal; a guest still in the room gives it back.
    pub fn withdraw(self, room: &mut Room) -> Result<BookingId, Report<KernelError>> {
        self.ensure_room(room)?;
        if self.status == BookingStatus::CheckedIn {
            room.vacate();
        }
        Ok(self.id)
    }

    fn ensure_room(&self, room: &Room) -> Result<(), Report<KernelError>> {
        if &self.room_id != room.id() {
            return Err(Report::new(KernelError::Internal)
                .attach_printable("booking refers to a different room"));
        }
        Ok(())
    }
}
