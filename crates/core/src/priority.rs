//! Crisis priority scoring.

/// Cases scoring at or above this value count as high priority on the
/// dashboard.
pub const HIGH_PRIORITY_THRESHOLD: i64 = 20;

const SEVERITY_WEIGHT: i64 = 3;
const PEOPLE_WEIGHT: i64 = 2;
const URGENCY_WEIGHT: i64 = 4;
const RESOURCES_WEIGHT: i64 = 2;

/// Compute the priority score for a crisis.
///
/// `severity * 3 + people_affected * 2 + urgency * 4 - available_resources * 2`
///
/// The result is not clamped and may be negative when resources outweigh
/// the need.
pub fn calculate_priority(
    severity: i64,
    people_affected: i64,
    urgency: i64,
    available_resources: i64,
) -> i64 {
    severity * SEVERITY_WEIGHT + people_affected * PEOPLE_WEIGHT + urgency * URGENCY_WEIGHT
        - available_resources * RESOURCES_WEIGHT
}
