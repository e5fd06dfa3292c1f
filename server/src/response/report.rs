use std::collections::BTreeMap;

use application::transfer::OccupancyReportDto;
use axum::Json;
use kernel::prelude::entity::{Demographics, Overview, Revenue};
use rust_decimal::Decimal;
use serde::Serialize;
use time::Date;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct RevenueResponse {
    start_date: Date,
    end_date: Date,
    total_revenue: Decimal,
}

#[derive(Debug, Serialize)]
pub struct OccupancyResponse {
    date: Date,
    occupancy_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct DemographicsResponse {
    countries: BTreeMap<String, u64>,
    ages: BTreeMap<i32, u64>,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    date: Date,
    arrivals: u64,
    departures: u64,
    occupancy_rate: f64,
}

pub struct ReportPresenter;

impl Exhaust<Revenue> for ReportPresenter {
    type To = Json<RevenueResponse>;
    fn emit(&self, input: Revenue) -> Self::To {
        Json(RevenueResponse {
            start_date: *input.period().start(),
            end_date: *input.period().end(),
            total_revenue: Decimal::from(*input.total()),
        })
    }
}

impl Exhaust<OccupancyReportDto> for ReportPresenter {
    type To = Json<OccupancyResponse>;
    fn emit(&self, input: OccupancyReportDto) -> Self::To {
        Json(OccupancyResponse {
            date: input.date,
            occupancy_rate: input.occupancy_rate,
        })
    }
}

impl Exhaust<Demographics> for ReportPresenter {
    type To = Json<DemographicsResponse>;
    fn emit(&self, input: Demographics) -> Self::To {
        Json(DemographicsResponse {
            countries: input.countries().clone(),
            ages: input.ages().clone(),
        })
    }
}

impl Exhaust<Overview> for ReportPresenter {
    type To = Json<OverviewResponse>;
    fn emit(&self, input: Overview) -> Self::To {
        Json(OverviewResponse {
            date: *input.date(),
            arrivals: input.arrivals(),
            departures: input.departures(),
            occupancy_rate: input.occupancy_rate().value(),
        })
    }
}
