use application::transfer::{DemographicsDto, OccupancyDto, OverviewDto, RevenueDto};
use error_stack::Report;
use kernel::prelude::entity::Actor;
use kernel::KernelError;
use serde::Deserialize;

use crate::controller::{Intake, TryIntake};
use crate::request::parse_date;

#[derive(Debug, Deserialize)]
pub struct RevenueRequest {
    start_date: Option<String>,
    end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OccupancyRequest {
    date: Option<String>,
}

#[derive(Debug)]
pub struct DemographicsRequest {
    actor: Actor,
}

impl DemographicsRequest {
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }
}

#[derive(Debug)]
pub struct OverviewRequest {
    actor: Actor,
}

impl OverviewRequest {
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }
}

pub struct ReportTransformer;

impl TryIntake<(Actor, RevenueRequest)> for ReportTransformer {
    type To = RevenueDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: (Actor, RevenueRequest)) -> Result<Self::To, Self::Error> {
        let (actor, input) = input;
        Ok(RevenueDto {
            actor,
            start: parse_date("start_date", input.start_date.as_deref())?,
            end: parse_date("end_date", input.end_date.as_deref())?,
        })
    }
}

impl TryIntake<(Actor, OccupancyRequest)> for ReportTransformer {
    type To = OccupancyDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: (Actor, OccupancyRequest)) -> Result<Self::To, Self::Error> {
        let (actor, input) = input;
        Ok(OccupancyDto {
            actor,
            date: parse_date("date", input.date.as_deref())?,
        })
    }
}

impl Intake<DemographicsRequest> for ReportTransformer {
    type To = DemographicsDto;
    fn emit(&self, input: DemographicsRequest) -> Self::To {
        DemographicsDto { actor: input.actor }
    }
}

impl Intake<OverviewRequest> for ReportTransformer {
    type To = OverviewDto;
    fn emit(&self, input: OverviewRequest) -> Self::To {
        OverviewDto { actor: input.actor }
    }
}
