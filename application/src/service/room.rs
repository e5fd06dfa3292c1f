use error_stack::Report;
use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction,
};
use kernel::interface::policy::DependOnTurnoverPolicy;
use kernel::interface::query::{BookingQuery, DependOnBookingQuery, DependOnRoomQuery, RoomQuery};
use kernel::interface::update::{DependOnRoomModifier, RoomModifier};
use kernel::prelude::entity::{
    Action, IsAvailable, Money, NightlyRate, Room, RoomId, RoomNumber, Stay,
};
use kernel::KernelError;
use uuid::Uuid;

use crate::transfer::{
    CreateRoomDto, DeleteRoomDto, GetAllRoomDto, GetRoomDto, RoomDto, SearchRoomDto,
    UpdateRoomDto,
};

#[async_trait::async_trait]
pub trait GetRoomService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnRoomQuery + DependOnTurnoverPolicy
{
    async fn get_room(&self, dto: GetRoomDto) -> error_stack::Result<RoomDto, KernelError> {
        dto.actor.authorize(Action::ViewRooms)?;
        let mut connection = self.database_connection().transact().await?;

        let id = RoomId::new(dto.id);
        let room = self
            .room_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::RoomNotFound))?;
        Ok(RoomDto::from(room))
    }

    async fn get_all_rooms(
        &self,
        dto: GetAllRoomDto,
    ) -> error_stack::Result<Vec<RoomDto>, KernelError> {
        dto.actor.authorize(Action::ViewRooms)?;
        let mut connection = self.database_connection().transact().await?;

        let rooms = self.room_query().find_all(&mut connection).await?;
        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }

    /// Rooms free for the whole requested stay, optionally narrowed to one room type.
    async fn search_available(
        &self,
        dto: SearchRoomDto,
    ) -> error_stack::Result<Vec<RoomDto>, KernelError> {
        dto.actor.authorize(Action::SearchRooms)?;
        let stay = Stay::new(dto.check_in, dto.check_out)?;
        let mut connection = self.database_connection().transact().await?;

        let rooms = self
            .room_query()
            .find_available(
                &mut connection,
                &stay,
                dto.room_type.as_ref(),
                self.turnover_policy(),
            )
            .await?;
        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }
}

impl<T> GetRoomService for T where
    T: DependOnDatabaseConnection + DependOnRoomQuery + DependOnTurnoverPolicy
{
}

#[async_trait::async_trait]
pub trait HandleRoomService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnRoomQuery
    + DependOnRoomModifier
    + DependOnBookingQuery
{
    async fn create_room(&self, dto: CreateRoomDto) -> error_stack::Result<RoomDto, KernelError> {
        dto.actor.authorize(Action::ManageRooms)?;
        let room = Room::new(
            RoomId::new(Uuid::new_v4()),
            RoomNumber::parse(dto.number)?,
            dto.room_type,
            NightlyRate::parse(Money::new(dto.rate))?,
            IsAvailable::default(),
        );

        let mut connection = self.database_connection().transact().await?;
        self.room_modifier().create(&mut connection, &room).await?;
        connection.commit().await?;

        tracing::info!(
            room = %room.id().as_ref(),
            number = %room.number().as_ref(),
            "room created"
        );
        Ok(RoomDto::from(room))
    }

    async fn update_room(&self, dto: UpdateRoomDto) -> error_stack::Result<RoomDto, KernelError> {
        dto.actor.authorize(Action::ManageRooms)?;
        let number = dto.number.map(RoomNumber::parse).transpose()?;
        let rate = dto
            .rate
            .map(|rate| NightlyRate::parse(Money::new(rate)))
            .transpose()?;

        let mut connection = self.database_connection().transact().await?;
        let id = RoomId::new(dto.id);
        let mut room = self
            .room_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::RoomNotFound))?;
        room.substitute(|room| {
            if let Some(number) = number {
                *room.number = number;
            }
            if let Some(room_type) = dto.room_type {
                *room.room_type = room_type;
            }
            if let Some(rate) = rate {
                *room.rate = rate;
            }
        });
        self.room_modifier().update(&mut connection, &room).await?;
        connection.commit().await?;

        Ok(RoomDto::from(room))
    }

    async fn delete_room(&self, dto: DeleteRoomDto) -> error_stack::Result<(), KernelError> {
        dto.actor.authorize(Action::DeleteRoom)?;
        let mut connection = self.database_connection().transact().await?;

        let id = RoomId::new(dto.id);
        let room = self
            .room_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::RoomNotFound))?;
        let occupied = self
            .booking_query()
            .find_by_room_id(&mut connection, room.id())
            .await?
            .iter()
            .any(|booking| booking.is_active());
        if occupied {
            return Err(Report::new(KernelError::RoomUnavailable)
                .attach_printable("room still has active bookings"));
        }
        self.room_modifier().delete(&mut connection, room.id()).await?;
        connection.commit().await?;

        tracing::info!(room = %id.as_ref(), "room deleted");
        Ok(())
    }
}

impl<T> HandleRoomService for T where
    T: DependOnDatabaseConnection + DependOnRoomQuery + DependOnRoomModifier + DependOnBookingQuery
{
}
