//! The Coptic calendar: a 13-month calendar with a leap year every fourth
//! year, convertible to and from days since the ISO epoch 1970-01-01.
//!
//! All types are immutable values; every operation is a pure function
//! returning a new value, so instances can be shared freely across threads.

pub use coptic::{CopticChronology, CopticDate, CopticEra};
pub use day_of_month::DayOfMonth;
pub use error::Error;
pub use field::{ChronoField, DateField, ValueRange};
pub use period::Period;
pub use unit::ChronoUnit;

pub mod coptic;
mod day_of_month;
mod div_rem;
mod error;
mod field;
mod period;
mod unit;
