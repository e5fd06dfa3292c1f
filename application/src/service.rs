mod booking;
mod guest;
mod invoice;
mod report;
mod room;

pub use self::{booking::*, guest::*, invoice::*, report::*, room::*};
