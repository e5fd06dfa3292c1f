use application::transfer::{
    CheckInDto, CheckOutDto, CreateBookingDto, DeleteBookingDto, GetAllBookingDto, GetBookingDto,
};
use error_stack::Report;
use kernel::prelude::entity::Actor;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

use crate::controller::{Intake, TryIntake};
use crate::request::parse_date;

/// Carries no price; the total comes from the room rate.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    guest_id: Option<Uuid>,
    room_id: Uuid,
    check_in_date: Option<String>,
    check_out_date: Option<String>,
    payment_method: Option<String>,
}

#[derive(Debug)]
pub struct GetBookingRequest {
    actor: Actor,
    id: Uuid,
}

impl GetBookingRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

#[derive(Debug)]
pub struct CheckInRequest {
    actor: Actor,
    id: Uuid,
}

impl CheckInRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

#[derive(Debug)]
pub struct CheckOutRequest {
    actor: Actor,
    id: Uuid,
}

impl CheckOutRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

#[derive(Debug)]
pub struct DeleteBookingRequest {
    actor: Actor,
    id: Uuid,
}

impl DeleteBookingRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

pub struct BookingTransformer;

impl Intake<Actor> for BookingTransformer {
    type To = GetAllBookingDto;
    fn emit(&self, actor: Actor) -> Self::To {
        GetAllBookingDto { actor }
    }
}

impl Intake<GetBookingRequest> for BookingTransformer {
    type To = GetBookingDto;
    fn emit(&self, input: GetBookingRequest) -> Self::To {
        GetBookingDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl Intake<CheckInRequest> for BookingTransformer {
    type To = CheckInDto;
    fn emit(&self, input: CheckInRequest) -> Self::To {
        CheckInDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl Intake<CheckOutRequest> for BookingTransformer {
    type To = CheckOutDto;
    fn emit(&self, input: CheckOutRequest) -> Self::To {
        CheckOutDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl Intake<DeleteBookingRequest> for BookingTransformer {
    type To = DeleteBookingDto;
    fn emit(&self, input: DeleteBookingRequest) -> Self::To {
        DeleteBookingDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl TryIntake<(Actor, CreateBookingRequest)> for BookingTransformer {
    type To = CreateBookingDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: (Actor, CreateBookingRequest)) -> Result<Self::To, Self::Error> {
        let (actor, input) = input;
        Ok(CreateBookingDto {
            actor,
            guest_id: input.guest_id,
            room_id: input.room_id,
            check_in: parse_date("check_in_date", input.check_in_date.as_deref())?,
            check_out: parse_date("check_out_date", input.check_out_date.as_deref())?,
            payment_method: input.payment_method,
        })
    }
}
