//! Dashboard metrics derived from case and volunteer counts.

use serde::Serialize;

/// Raw counts read from storage for one dashboard render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total_cases: i64,
    pub high_priority_cases: i64,
    pub completed_cases: i64,
    pub active_cases: i64,
    pub available_volunteers: i64,
}

/// Figures shown on the dashboard.
///
/// `Default` is the zeroed fallback served when counts cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_cases: i64,
    pub high_priority_cases: i64,
    pub available_volunteers: i64,
    /// Percentage of cases completed, one decimal place.
    pub resolution_rate: f64,
    /// Active cases per available volunteer as a percentage, capped at 100.
    pub volunteer_utilization: f64,
}

impl From<DashboardCounts> for DashboardStats {
    fn from(counts: DashboardCounts) -> Self {
        Self {
            total_cases: counts.total_cases,
            high_priority_cases: counts.high_priority_cases,
            available_volunteers: counts.available_volunteers,
            resolution_rate: resolution_rate(counts.completed_cases, counts.total_cases),
            volunteer_utilization: volunteer_utilization(
                counts.active_cases,
                counts.available_volunteers,
            ),
        }
    }
}

/// `completed / total * 100`, rounded to one decimal. Zero when there are
/// no cases.
pub fn resolution_rate(completed_cases: i64, total_cases: i64) -> f64 {
    if total_cases <= 0 {
        return 0.0;
    }
    round_one_decimal(completed_cases as f64 / total_cases as f64 * 100.0)
}

/// `active_cases / available_volunteers * 100`, rounded to one decimal and
/// capped at 100. Zero when no volunteer is available.
pub fn volunteer_utilization(active_cases: i64, available_volunteers: i64) -> f64 {
    if available_volunteers <= 0 {
        return 0.0;
    }
    round_one_decimal(active_cases as f64 / available_volunteers as f64 * 100.0).min(100.0)
}

/// Halves round to even: 6.25 becomes 6.2, 18.75 becomes 18.8.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
