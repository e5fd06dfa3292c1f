use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnGuestQuery, DependOnRoomQuery, GuestQuery,
    RoomQuery,
};
use kernel::prelude::entity::{
    Action, Demographics, OccupancyRate, Overview, Period, Revenue,
};
use kernel::KernelError;

use crate::transfer::{
    DemographicsDto, OccupancyDto, OccupancyReportDto, OverviewDto, RevenueDto,
};

/// Read-only aggregations for the front office.
#[async_trait::async_trait]
pub trait ReportService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnClock
    + DependOnRoomQuery
    + DependOnGuestQuery
    + DependOnBookingQuery
{
    async fn revenue(&self, dto: RevenueDto) -> error_stack::Result<Revenue, KernelError> {
        dto.actor.authorize(Action::ViewReports)?;
        let period = Period::new(dto.start, dto.end)?;
        let mut connection = self.database_connection().transact().await?;

        let settled = self
            .booking_query()
            .find_settled_within(&mut connection, &period)
            .await?;
        Ok(Revenue::collect(period, &settled))
    }

    async fn occupancy(
        &self,
        dto: OccupancyDto,
    ) -> error_stack::Result<OccupancyReportDto, KernelError> {
        dto.actor.authorize(Action::ViewReports)?;
        let mut connection = self.database_connection().transact().await?;

        let occupied = self
            .booking_query()
            .count_covering(&mut connection, &dto.date)
            .await?;
        let rooms = self.room_query().count(&mut connection).await?;
        Ok(OccupancyReportDto {
            date: dto.date,
            occupancy_rate: OccupancyRate::compute(occupied, rooms).value(),
        })
    }

    async fn demographics(
        &self,
        dto: DemographicsDto,
    ) -> error_stack::Result<Demographics, KernelError> {
        dto.actor.authorize(Action::ViewReports)?;
        let mut connection = self.database_connection().transact().await?;

        let guests = self.guest_query().find_all(&mut connection).await?;
        Ok(Demographics::tally(&guests, self.clock().today()))
    }

    /// Today's arrivals and departures with occupancy taken from the room flags.
    async fn overview(&self, dto: OverviewDto) -> error_stack::Result<Overview, KernelError> {
        dto.actor.authorize(Action::ViewReports)?;
        let today = self.clock().today();
        let mut connection = self.database_connection().transact().await?;

        let arrivals = self
            .booking_query()
            .count_arrivals(&mut connection, &today)
            .await?;
        let departures = self
            .booking_query()
            .count_departures(&mut connection, &today)
            .await?;
        let occupied = self.room_query().count_occupied(&mut connection).await?;
        let rooms = self.room_query().count(&mut connection).await?;
        Ok(Overview::new(
            today,
            arrivals,
            departures,
            OccupancyRate::compute(occupied, rooms),
        ))
    }
}

impl<T> ReportService for T where
    T: DependOnDatabaseConnection
        + DependOnClock
        + DependOnRoomQuery
        + DependOnGuestQuery
        + DependOnBookingQuery
{
}
