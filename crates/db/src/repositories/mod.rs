//! Repository layer: one zero-sized struct per table, each method taking
//! the pool explicitly.

pub mod crisis_case_repo;
pub mod volunteer_repo;

pub use crisis_case_repo::CrisisCaseRepo;
pub use volunteer_repo::VolunteerRepo;
