use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;

use crate::entity::{Booking, Guest, Money, Period};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revenue {
    period: Period,
    total: Money,
}

impl Revenue {
    /// Sums the total price of bookings that have already been settled.
    pub fn collect(period: Period, settled: &[Booking]) -> Self {
        let total = settled.iter().map(|booking| *booking.total_price()).sum();
        Self { period, total }
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    pub fn total(&self) -> &Money {
        &self.total
    }
}

/// Percentage of rooms occupied, `0.0` for a hotel without rooms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OccupancyRate(f64);

impl OccupancyRate {
    pub fn compute(occupied: u64, total: u64) -> Self {
        if total == 0 {
            return Self(0.0);
        }
        Self(occupied as f64 / total as f64 * 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Demographics {
    countries: BTreeMap<String, u64>,
    ages: BTreeMap<i32, u64>,
}

impl Demographics {
    /// Guests without an address or a date of birth are left out of the matching histogram.
    pub fn tally<'a>(guests: impl IntoIterator<Item = &'a Guest>, today: Date) -> Self {
        let mut demographics = Self::default();
        for guest in guests {
            if let Some(country) = guest.address().country() {
                *demographics
                    .countries
                    .entry(country.to_string())
                    .or_default() += 1;
            }
            if let Some(date_of_birth) = guest.date_of_birth() {
                *demographics
                    .ages
                    .entry(date_of_birth.year_difference(today))
                    .or_default() += 1;
            }
        }
        demographics
    }

    pub fn countries(&self) -> &BTreeMap<String, u64> {
        &self.countries
    }

    pub fn ages(&self) -> &BTreeMap<i32, u64> {
        &self.ages
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    date: Date,
    arrivals: u64,
    departures: u64,
    occupancy_rate: OccupancyRate,
}

impl Overview {
    pub fn new(date: Date, arrivals: u64, departures: u64, occupancy_rate: OccupancyRate) -> Self {
        Self {
            date,
            arrivals,
            departures,
            occupancy_rate,
        }
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn arrivals(&self) -> u64 {
        self.arrivals
    }

    pub fn departures(&self) -> u64 {
        self.departures
    }

    pub fn occupancy_rate(&self) -> &OccupancyRate {
        &self.occupancy_rate
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entity::{
        Address, DateOfBirth, FirstName, GuestEmail, GuestId, LastName, PhoneNumber,
    };
    use time::macros::date;
    use uuid::Uuid;

    fn guest(address: &str, date_of_birth: Option<Date>) -> Guest {
        Guest::new(
            GuestId::new(Uuid::new_v4()),
            FirstName::new("Grace"),
            LastName::new("Hopper"),
            GuestEmail::new(format!("{}@example.com", Uuid::new_v4())),
            PhoneNumber::new("555-0199"),
            Address::new(address),
            date_of_birth.map(DateOfBirth::new),
        )
    }

    #[test]
    fn guests_without_birth_date_are_skipped() {
        let guests = vec![
            guest("Paris, France", Some(date!(1990 - 06 - 01))),
            guest("Lyon, France", None),
            guest("", Some(date!(1990 - 01 - 01))),
            guest("Osaka, Japan", Some(date!(1980 - 03 - 03))),
        ];
        let demographics = Demographics::tally(&guests, date!(2026 - 10 - 19));
        assert_eq!(demographics.countries().get("France"), Some(&2));
        assert_eq!(demographics.countries().get("Japan"), Some(&1));
        assert_eq!(demographics.countries().len(), 2);
        assert_eq!(demographics.ages().get(&36), Some(&2));
        assert_eq!(demographics.ages().get(&46), Some(&1));
        assert_eq!(demographics.ages().values().sum::<u64>(), 3);
    }

    #[test]
    fn empty_hotel_has_zero_occupancy() {
        assert_eq!(OccupancyRate::compute(0, 0).value(), 0.0);
        assert_eq!(OccupancyRate::compute(1, 4).value(), 25.0);
    }
}
