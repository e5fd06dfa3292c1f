use application::transfer::{
    CreateRoomDto, DeleteRoomDto, GetAllRoomDto, GetRoomDto, SearchRoomDto, UpdateRoomDto,
};
use error_stack::Report;
use kernel::prelude::entity::{Actor, RoomType};
use kernel::KernelError;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::controller::{Intake, TryIntake};
use crate::request::parse_date;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    number: String,
    room_type: RoomType,
    rate: Decimal,
}

/// The availability flag is owned by check-in and check-out and cannot be set here.
#[derive(Debug, Deserialize)]
pub struct UpdateRoomRequest {
    number: Option<String>,
    room_type: Option<RoomType>,
    rate: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRoomRequest {
    check_in_date: Option<String>,
    check_out_date: Option<String>,
    room_type: Option<RoomType>,
}

#[derive(Debug)]
pub struct GetRoomRequest {
    actor: Actor,
    id: Uuid,
}

impl GetRoomRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

#[derive(Debug)]
pub struct DeleteRoomRequest {
    actor: Actor,
    id: Uuid,
}

impl DeleteRoomRequest {
    pub fn new(actor: Actor, id: Uuid) -> Self {
        Self { actor, id }
    }
}

pub struct RoomTransformer;

impl Intake<Actor> for RoomTransformer {
    type To = GetAllRoomDto;
    fn emit(&self, actor: Actor) -> Self::To {
        GetAllRoomDto { actor }
    }
}

impl Intake<GetRoomRequest> for RoomTransformer {
    type To = GetRoomDto;
    fn emit(&self, input: GetRoomRequest) -> Self::To {
        GetRoomDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl Intake<(Actor, CreateRoomRequest)> for RoomTransformer {
    type To = CreateRoomDto;
    fn emit(&self, input: (Actor, CreateRoomRequest)) -> Self::To {
        let (actor, input) = input;
        CreateRoomDto {
            actor,
            number: input.number,
            room_type: input.room_type,
            rate: input.rate,
        }
    }
}

impl Intake<(Actor, Uuid, UpdateRoomRequest)> for RoomTransformer {
    type To = UpdateRoomDto;
    fn emit(&self, input: (Actor, Uuid, UpdateRoomRequest)) -> Self::To {
        let (actor, id, input) = input;
        UpdateRoomDto {
            actor,
            id,
            number: input.number,
            room_type: input.room_type,
            rate: input.rate,
        }
    }
}

impl Intake<DeleteRoomRequest> for RoomTransformer {
    type To = DeleteRoomDto;
    fn emit(&self, input: DeleteRoomRequest) -> Self::To {
        DeleteRoomDto {
            actor: input.actor,
            id: input.id,
        }
    }
}

impl TryIntake<(Actor, SearchRoomRequest)> for RoomTransformer {
    type To = SearchRoomDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: (Actor, SearchRoomRequest)) -> Result<Self::To, Self::Error> {
        let (actor, input) = input;
        Ok(SearchRoomDto {
            actor,
            check_in: parse_date("check_in_date", input.check_in_date.as_deref())?,
            check_out: parse_date("check_out_date", input.check_out_date.as_deref())?,
            room_type: input.room_type,
        })
    }
}
