pub mod crisis_case;
pub mod volunteer;
