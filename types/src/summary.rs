use serde::{Deserialize, Serialize};

/// Record counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub employees: usize,
    pub positions: usize,
    pub shifts: usize,
    pub locations: usize,
}
