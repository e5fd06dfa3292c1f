use application::transfer::{
    CreateGuestDto, DeleteGuestDto, GetAllGuestDto, GetGuestDto, UpdateGuestDto,
};
use error_stack::Report;
use kernel::prelude::entity::Actor;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

use crate::controller::{Intake, TryIntake};
use crate::request::parse_optional_date;

#[derive(Debug, Deserialize)]
pub struct CreateGuestRequest {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    #[serde(default)]
    address: String,
    date_of_birth: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGuestRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    address: Option<String>,
    date_of_birth: Option<String>,
}

#[derive(Debug)]
pub struct GetGuestRequest {
    actor: Actor,
    id: Uuid,
}

impl GetGuestRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

#[derive(Debug)]
pub struct DeleteGuestRequest {
    actor: Actor,
    id: Uuid,
}

impl DeleteGuestRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

pub struct GuestTransformer;

impl Intake<Actor> for GuestTransformer {
    type To = GetAllGuestDto;
    fn emit(&self, actor: Actor) -> Self::To {
        GetAllGuestDto { actor }
    }
}

impl Intake<GetGuestRequest> for GuestTransformer {
    type To = GetGuestDto;
    fn emit(&self, input: GetGuestRequest) -> Self::To {
        GetGuestDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl Intake<DeleteGuestRequest> for GuestTransformer {
    type To = DeleteGuestDto;
    fn emit(&self, input: DeleteGuestRequest) -> Self::To {
        DeleteGuestDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl TryIntake<(Actor, CreateGuestRequest)> for GuestTransformer {
    type To = CreateGuestDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: (Actor, CreateGuestRequest)) -> Result<Self::To, Self::Error> {
        let (actor, input) = input;
        Ok(CreateGuestDto {
            actor,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone_number: input.phone_number,
            address: input.address,
            date_of_birth: parse_optional_date("date_of_birth", input.date_of_birth.as_deref())?,
        })
    }
}

impl TryIntake<(Actor, Uuid, UpdateGuestRequest)> for GuestTransformer {
    type To = UpdateGuestDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: (Actor, Uuid, UpdateGuestRequest)) -> Result<Self::To, Self::Error> {
        let (actor, id, input) = input;
        Ok(UpdateGuestDto {
            actor,
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone_number: input.phone_number,
            address: input.address,
            date_of_birth: parse_optional_date("date_of_birth", input.date_of_birth.as_deref())?,
        })
    }
}
