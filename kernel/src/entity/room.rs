mod availability;
mod id;
mod kind;
mod number;
mod rate;

pub use self::{availability::*, id::*, kind::*, number::*, rate::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Room {
    id: RoomId,
    number: RoomNumber,
    room_type: RoomType,
    rate: NightlyRate,
    is_available: IsAvailable,
}

impl Room {
    pub fn new(
        id: RoomId,
        number: RoomNumber,
        room_type: RoomType,
        rate: NightlyRate,
        is_available: IsAvailable,
    ) -> Self {
        Self {
            id,
            number,
            room_type,
            rate,
            is_available,
        }
    }

    pub(crate) fn occupy(&mut self) {
        self.is_available = IsAvailable::new(false);
    }

    pub(crate) fn vacate(&mut self) {
        self.is_available = IsAvailable::new(true);
    }
}
