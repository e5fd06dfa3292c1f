mod booking;
mod common;
mod guest;
mod invoice;
mod report;
mod room;

pub use self::{booking::*, common::*, guest::*, invoice::*, report::*, room::*};
