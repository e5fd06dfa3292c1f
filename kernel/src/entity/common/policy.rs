use serde::{Deserialize, Serialize};

/// Boundary rule used when two stays meet on the same calendar day.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnoverPolicy {
    /// Closed ranges: a stay ending on day N blocks another starting on day N.
    #[default]
    Inclusive,
    /// Half-open ranges: the room may be handed over on the check-out day.
    SameDay,
}
