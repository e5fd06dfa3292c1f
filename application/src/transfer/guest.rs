use kernel::prelude::entity::{Actor, DestructGuest, Guest};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: Option<Date>,
}

impl From<Guest> for GuestDto {
    fn from(value: Guest) -> Self {
        let DestructGuest {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            address,
            date_of_birth,
        } = value.into_destruct();
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            address: address.into(),
            date_of_birth: date_of_birth.map(Date::from),
        }
    }
}

pub struct GetGuestDto {
    pub actor: Actor,
    pub id: Uuid,
}

pub struct GetAllGuestDto {
    pub actor: Actor,
}

pub struct CreateGuestDto {
    pub actor: Actor,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: Option<Date>,
}

pub struct UpdateGuestDto {
    pub actor: Actor,
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<Date>,
}

pub struct DeleteGuestDto {
    pub actor: Actor,
    pub id: Uuid,
}
