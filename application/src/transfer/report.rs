use kernel::prelude::entity::Actor;
use time::Date;

pub struct RevenueDto {
    pub actor: Actor,
    pub start: Date,
    pub end: Date,
}

pub struct OccupancyDto {
    pub actor: Actor,
    pub date: Date,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyReportDto {
    pub date: Date,
    pub occupancy_rate: f64,
}

pub struct DemographicsDto {
    pub actor: Actor,
}

pub struct OverviewDto {
    pub actor: Actor,
}
