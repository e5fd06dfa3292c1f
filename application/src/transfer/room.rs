use kernel::prelude::entity::{Actor, DestructRoom, Room, RoomType};
use rust_decimal::Decimal;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDto {
    pub id: Uuid,
    pub number: String,
    pub room_type: RoomType,
    pub rate: Decimal,
    pub is_available: bool,
}

impl From<Room> for RoomDto {
    fn from(value: Room) -> Self {
        let DestructRoom {
            id,
            number,
            room_type,
            rate,
            is_available,
        } = value.into_destruct();
        Self {
            id: id.into(),
            number: number.into(),
            room_type,
            rate: Decimal::from(*rate.as_ref()),
            is_available: is_available.into(),
        }
    }
}

pub struct GetRoomDto {
    pub actor: Actor,
    pub id: Uuid,
}

pub struct GetAllRoomDto {
    pub actor: Actor,
}

pub struct SearchRoomDto {
    pub actor: Actor,
    pub check_in: Date,
    pub check_out: Date,
    pub room_type: Option<RoomType>,
}

pub struct CreateRoomDto {
    pub actor: Actor,
    pub number: String,
    pub room_type: RoomType,
    pub rate: Decimal,
}

pub struct UpdateRoomDto {
    pub actor: Actor,
    pub id: Uuid,
    pub number: Option<String>,
    pub room_type: Option<RoomType>,
    pub rate: Option<Decimal>,
}

pub struct DeleteRoomDto {
    pub actor: Actor,
    pub id: Uuid,
}
