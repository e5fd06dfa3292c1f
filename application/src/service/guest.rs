use error_stack::Report;
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction,
};
use kernel::interface::query::{DependOnGuestQuery, GuestQuery};
use kernel::interface::update::{DependOnGuestModifier, GuestModifier};
use kernel::prelude::entity::{
    Action, Address, DateOfBirth, FirstName, Guest, GuestEmail, GuestId, LastName, PhoneNumber,
};
use kernel::KernelError;
use uuid::Uuid;

use crate::transfer::{
    CreateGuestDto, DeleteGuestDto, GetAllGuestDto, GetGuestDto, GuestDto, UpdateGuestDto,
};

#[async_trait::async_trait]
pub trait GetGuestService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnGuestQuery
{
    async fn get_guest(&self, dto: GetGuestDto) -> error_stack::Result<GuestDto, KernelError> {
        let id = GuestId::new(dto.id);
        dto.actor.ensure_reads(&id)?;
        let mut connection = self.database_connection().transact().await?;

        let guest = self
            .guest_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::GuestNotFound))?;
        Ok(GuestDto::from(guest))
    }

    async fn get_all_guests(
        &self,
        dto: GetAllGuestDto,
    ) -> error_stack::Result<Vec<GuestDto>, KernelError> {
        dto.actor.authorize(Action::ViewAllGuests)?;
        let mut connection = self.database_connection().transact().await?;

        let guests = self.guest_query().find_all(&mut connection).await?;
        Ok(guests.into_iter().map(GuestDto::from).collect())
    }
}

impl<T> GetGuestService for T where T: DependOnDatabaseConnection + DependOnGuestQuery {}

#[async_trait::async_trait]
pub trait HandleGuestService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnClock
    + DependOnGuestQuery
    + DependOnGuestModifier
{
    async fn create_guest(&self, dto: CreateGuestDto) -> error_stack::Result<GuestDto, KernelError> {
        dto.actor.authorize(Action::RegisterGuest)?;
        let guest = Guest::new(
            GuestId::new(Uuid::new_v4()),
            FirstName::new(dto.first_name),
            LastName::new(dto.last_name),
            GuestEmail::new(dto.email),
            PhoneNumber::new(dto.phone_number),
            Address::new(dto.address),
            dto.date_of_birth.map(DateOfBirth::new),
        );
        guest.validate(self.clock().today())?;

        let mut connection = self.database_connection().transact().await?;
        if self
            .guest_query()
            .find_by_email(&mut connection, guest.email())
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::EmailTaken));
        }
        self.guest_modifier().create(&mut connection, &guest).await?;
        connection.commit().await?;

        tracing::info!(guest = %guest.id().as_ref(), "guest registered");
        Ok(GuestDto::from(guest))
    }

    async fn update_guest(&self, dto: UpdateGuestDto) -> error_stack::Result<GuestDto, KernelError> {
        let id = GuestId::new(dto.id);
        dto.actor.ensure_acts_for(&id)?;
        let mut connection = self.database_connection().transact().await?;

        let mut guest = self
            .guest_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::GuestNotFound))?;
        guest.substitute(|guest| {
            if let Some(first_name) = dto.first_name {
                *guest.first_name = FirstName::new(first_name);
            }
            if let Some(last_name) = dto.last_name {
                *guest.last_name = LastName::new(last_name);
            }
            if let Some(email) = dto.email {
                *guest.email = GuestEmail::new(email);
            }
            if let Some(phone_number) = dto.phone_number {
                *guest.phone_number = PhoneNumber::new(phone_number);
            }
            if let Some(address) = dto.address {
                *guest.address = Address::new(address);
            }
            if let Some(date_of_birth) = dto.date_of_birth {
                *guest.date_of_birth = Some(DateOfBirth::new(date_of_birth));
            }
        });
        guest.validate(self.clock().today())?;
        self.guest_modifier().update(&mut connection, &guest).await?;
        connection.commit().await?;

        Ok(GuestDto::from(guest))
    }

    /// Removes the guest together with their bookings and invoices.
    async fn delete_guest(&self, dto: DeleteGuestDto) -> error_stack::Result<(), KernelError> {
        dto.actor.authorize(Action::DeleteGuest)?;
        let mut connection = self.database_connection().transact().await?;

        let id = GuestId::new(dto.id);
        self.guest_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::GuestNotFound))?;
        self.guest_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        tracing::info!(guest = %id.as_ref(), "guest deleted");
        Ok(())
    }
}

impl<T> HandleGuestService for T where
    T: DependOnDatabaseConnection + DependOnClock + DependOnGuestQuery + DependOnGuestModifier
{
}
