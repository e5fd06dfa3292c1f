mod money;
mod period;
mod policy;
mod role;

pub use self::{money::*, period::*, policy::*, role::*};
