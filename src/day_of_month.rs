use lazy_static::lazy_static;

use crate::coptic::CopticDate;
use crate::error::Error;
use crate::field::{ChronoField, ValueRange};

lazy_static! {
    // Intern table for the 30 possible values. lazy_static initializes it
    // exactly once, so concurrent first users all observe the same table and
    // `of` never produces two distinct logical instances for one value.
    static ref VALUES: [DayOfMonth; 30] = {
        let mut values = [DayOfMonth(1); 30];
        for (index, value) in values.iter_mut().enumerate() {
            *value = DayOfMonth(index as u8 + 1);
        }
        values
    };
}

/// A day-of-month in the Coptic calendar, 1 to 30, detached from any month
/// or year.
///
/// Unlike [`CopticDate`] this is only a projection of one field. It can be
/// read from any date and pushed into any date; values 6 through 30 simply
/// clamp when pushed into a date sitting in the 13th month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    /// Obtain the interned instance for a day-of-month value.
    pub fn of(day: u8) -> Result<DayOfMonth, Error> {
        if !(1..=30).contains(&day) {
            return Err(Error::InvalidValue {
                field: ChronoField::DayOfMonth.name(),
                value: day as i64,
                range: ValueRange::of_variable(1, 5, 30),
            });
        }
        Ok(VALUES[(day - 1) as usize])
    }

    /// The day-of-month of the given date.
    pub fn from_date(date: &CopticDate) -> DayOfMonth {
        VALUES[(date.day() - 1) as usize]
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Only the day-of-month field itself can be read from this value;
    /// everything else is structurally unsupported.
    pub fn is_supported(&self, field: ChronoField) -> bool {
        field == ChronoField::DayOfMonth
    }

    pub fn get(&self, field: ChronoField) -> Result<i64, Error> {
        if self.is_supported(field) {
            Ok(self.0 as i64)
        } else {
            Err(Error::UnsupportedField(field.name()))
        }
    }

    pub fn range(&self, field: ChronoField) -> Result<ValueRange, Error> {
        if self.is_supported(field) {
            Ok(ValueRange::of_variable(1, 5, 30))
        } else {
            Err(Error::UnsupportedField(field.name()))
        }
    }

    /// Return a copy of `date` with this day-of-month, clamping in the 13th
    /// month like any other day-of-month adjustment.
    pub fn adjust_into(&self, date: &CopticDate) -> Result<CopticDate, Error> {
        date.with(ChronoField::DayOfMonth, self.0 as i64)
    }
}
