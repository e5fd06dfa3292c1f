use application::transfer::RoomDto;
use axum::http::StatusCode;
use axum::Json;
use kernel::prelude::entity::RoomType;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    id: Uuid,
    number: String,
    room_type: RoomType,
    rate: Decimal,
    is_available: bool,
}

impl From<RoomDto> for RoomResponse {
    fn from(value: RoomDto) -> Self {
        Self {
            id: value.id,
            number: value.number,
            room_type: value.room_type,
            rate: value.rate,
            is_available: value.is_available,
        }
    }
}

pub struct RoomPresenter;

impl Exhaust<()> for RoomPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<RoomDto> for RoomPresenter {
    type To = Json<RoomResponse>;
    fn emit(&self, input: RoomDto) -> Self::To {
        Json(RoomResponse::from(input))
    }
}

impl Exhaust<Vec<RoomDto>> for RoomPresenter {
    type To = Json<Vec<RoomResponse>>;
    fn emit(&self, input: Vec<RoomDto>) -> Self::To {
        Json(input.into_iter().map(RoomResponse::from).collect())
    }
}
