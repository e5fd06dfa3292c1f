use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::entity::GuestId;
use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Role {
    Guest,
    Staff,
    Manager,
    Admin,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    SearchRooms,
    ViewRooms,
    ManageRooms,
    DeleteRoom,
    RegisterGuest,
    ViewAllGuests,
    DeleteGuest,
    CreateBooking,
    ViewAllBookings,
    CheckIn,
    CheckOut,
    DeleteBooking,
    ViewAllInvoices,
    SettleInvoice,
    RequestPayment,
    ViewReports,
}

impl Role {
    pub fn permits(&self, action: Action) -> bool {
        match action {
            Action::SearchRooms
            | Action::ViewRooms
            | Action::RegisterGuest
            | Action::CreateBooking
            | Action::RequestPayment => true,
            Action::ManageRooms
            | Action::ViewAllGuests
            | Action::ViewAllBookings
            | Action::CheckIn
            | Action::CheckOut
            | Action::ViewAllInvoices
            | Action::SettleInvoice
            | Action::ViewReports => *self >= Role::Staff,
            Action::DeleteRoom | Action::DeleteGuest | Action::DeleteBooking => {
                *self == Role::Admin
            }
        }
    }

    pub fn authorize(&self, action: Action) -> Result<(), Report<KernelError>> {
        if self.permits(action) {
            Ok(())
        } else {
            Err(Report::new(KernelError::Forbidden)
                .attach_printable(format!("{self:?} may not perform {action:?}")))
        }
    }
}

impl FromStr for Role {
    type Err = Report<KernelError>;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "staff" => Ok(Role::Staff),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            other => Err(Report::new(KernelError::Unauthorized)
                .attach_printable(format!("unknown role: {other}"))),
        }
    }
}

/// Caller identity resolved by the authentication layer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Actor {
    role: Role,
    guest_id: Option<GuestId>,
}

impl Actor {
    pub fn new(role: Role, guest_id: Option<GuestId>) -> Self {
        Self { role, guest_id }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn guest_id(&self) -> Option<&GuestId> {
        self.guest_id.as_ref()
    }

    pub fn authorize(&self, action: Action) -> Result<(), Report<KernelError>> {
        self.role.authorize(action)
    }

    /// Guests may only read records that belong to them; staff and above read everything.
    pub fn may_read(&self, owner: &GuestId) -> bool {
        self.role >= Role::Staff || self.guest_id.as_ref() == Some(owner)
    }

    /// Guests may only write their own records; managers and above act for anyone.
    pub fn may_act_for(&self, owner: &GuestId) -> bool {
        match self.role {
            Role::Guest => self.guest_id.as_ref() == Some(owner),
            Role::Staff => false,
            Role::Manager | Role::Admin => true,
        }
    }

    pub fn ensure_reads(&self, owner: &GuestId) -> Result<(), Report<KernelError>> {
        if self.may_read(owner) {
            Ok(())
        } else {
            Err(Report::new(KernelError::Forbidden)
                .attach_printable(format!("{:?} may not read records of another guest", self.role)))
        }
    }

    pub fn ensure_acts_for(&self, owner: &GuestId) -> Result<(), Report<KernelError>> {
        if self.may_act_for(owner) {
            Ok(())
        } else {
            Err(Report::new(KernelError::Forbidden)
                .attach_printable(format!("{:?} may not act on behalf of another guest", self.role)))
        }
    }
}
