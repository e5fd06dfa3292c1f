use application::transfer::GuestDto;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct GuestResponse {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    address: String,
    date_of_birth: Option<Date>,
}

impl From<GuestDto> for GuestResponse {
    fn from(value: GuestDto) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone_number: value.phone_number,
            address: value.address,
            date_of_birth: value.date_of_birth,
        }
    }
}

pub struct GuestPresenter;

impl Exhaust<()> for GuestPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<GuestDto> for GuestPresenter {
    type To = Json<GuestResponse>;
    fn emit(&self, input: GuestDto) -> Self::To {
        Json(GuestResponse::from(input))
    }
}

impl Exhaust<Vec<GuestDto>> for GuestPresenter {
    type To = Json<Vec<GuestResponse>>;
    fn emit(&self, input: Vec<GuestDto>) -> Self::To {
        Json(input.into_iter().map(GuestResponse::from).collect())
    }
}
