mod booking;
mod guest;
mod invoice;
mod room;

pub use self::{booking::*, guest::*, invoice::*, room::*};
