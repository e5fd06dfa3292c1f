use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Cached occupancy flag. Only check-in and check-out change it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct IsAvailable(bool);

impl IsAvailable {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

impl Default for IsAvailable {
    fn default() -> Self {
        Self(true)
    }
}
