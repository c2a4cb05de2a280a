//! Read entities definitions.

pub mod property;
pub mod reservation;
