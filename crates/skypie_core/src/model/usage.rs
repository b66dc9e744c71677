use serde::{Deserialize, Serialize};

/// How flown hours turn into engine time, revenue and cost of revenue
///
/// Hours fed to the engine are hobbs hours. Engine, propeller and inspection
/// counters run on tach time, which is hobbs time divided by `hobbs_ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageModel {
    /// Hobbs hours per tach hour. 1.2 bills 6 hobbs hours per 5 tach hours.
    pub hobbs_ratio: f64,
    /// Leaseback revenue per hobbs hour
    pub revenue: f64,
    /// Pilot or instructor salary per hobbs hour, paid as cost of revenue
    pub salary: f64,
}

impl Default for UsageModel {
    /// All personal flying: no revenue, no salary
    fn default() -> Self {
        Self {
            hobbs_ratio: 1.2,
            revenue: 0.0,
            salary: 0.0,
        }
    }
}

impl UsageModel {
    pub fn tach_hours(&self, hobbs_hours: f64) -> f64 {
        hobbs_hours / self.hobbs_ratio
    }
}
