#![doc = include_str!("../../README.md")]

pub mod context;
pub mod country;
pub mod error;
pub(crate) mod filter;
#[cfg(feature = "fuzzing")]
pub mod fuzzing;
pub mod localization;
pub mod opening_hours;
#[macro_use]
pub mod schedule;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
// TODO: make opening_hours.rs lighter and less spaghetty
pub use crate::context::{Context, ContextHolidays};
pub use crate::localization::{Localize, NoLocation, TzLocation};
pub use crate::opening_hours::OpeningHours;
pub use crate::utils::range::DateTimeRange;
pub use opening_hours_syntax::rules::RuleKind;
