use std::fmt;

use crate::coptic::CopticDate;
use crate::error::Error;

/// The date fields the Coptic calendar resolves directly.
///
/// This is a closed set; anything else goes through the [`DateField`] escape
/// hatch and resolves itself against the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChronoField {
    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    YearOfEra,
    Year,
    Era,
}

impl ChronoField {
    pub const fn name(self) -> &'static str {
        match self {
            ChronoField::DayOfWeek => "DayOfWeek",
            ChronoField::AlignedDayOfWeekInMonth => "AlignedDayOfWeekInMonth",
            ChronoField::AlignedDayOfWeekInYear => "AlignedDayOfWeekInYear",
            ChronoField::DayOfMonth => "DayOfMonth",
            ChronoField::DayOfYear => "DayOfYear",
            ChronoField::EpochDay => "EpochDay",
            ChronoField::AlignedWeekOfMonth => "AlignedWeekOfMonth",
            ChronoField::AlignedWeekOfYear => "AlignedWeekOfYear",
            ChronoField::MonthOfYear => "MonthOfYear",
            ChronoField::YearOfEra => "YearOfEra",
            ChronoField::Year => "Year",
            ChronoField::Era => "Era",
        }
    }
}

impl fmt::Display for ChronoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A closed interval of valid values for a field.
///
/// Some fields have a maximum that varies by date: day-of-month runs to 30
/// in months 1-12 but only to 5 or 6 in the 13th month. For those the range
/// carries a smaller "smallest maximum" next to the outer maximum, so
/// callers can distinguish "valid in some month" from "valid in every
/// month" without a concrete date in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: i64,
    smallest_max: i64,
    max: i64,
}

impl ValueRange {
    /// A fixed range: the maximum is the same for every date.
    pub const fn of(min: i64, max: i64) -> ValueRange {
        ValueRange {
            min,
            smallest_max: max,
            max,
        }
    }

    /// A variable range whose maximum depends on the date.
    pub const fn of_variable(min: i64, smallest_max: i64, max: i64) -> ValueRange {
        ValueRange {
            min,
            smallest_max,
            max,
        }
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    /// The largest maximum that is valid for every date.
    pub const fn smallest_max(&self) -> i64 {
        self.smallest_max
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    pub const fn is_fixed(&self) -> bool {
        self.smallest_max == self.max
    }

    /// True if the value lies inside the outer bounds of the range.
    pub const fn is_valid(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    pub(crate) fn check_valid(&self, value: i64, field: ChronoField) -> Result<i64, Error> {
        if self.is_valid(value) {
            Ok(value)
        } else {
            Err(Error::InvalidValue {
                field: field.name(),
                value,
                range: *self,
            })
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{} - {}", self.min, self.max)
        } else {
            write!(f, "{} - {}/{}", self.min, self.smallest_max, self.max)
        }
    }
}

/// A field identifier that can be read from and written into a Coptic date.
///
/// The calendar handles the [`ChronoField`] tags itself; a field defined
/// outside this crate implements this trait and is handed the date to
/// resolve its own value. An implementation that cannot resolve itself
/// reports [`Error::UnsupportedField`].
pub trait DateField {
    /// The well-known tag this field maps to, if any. When this returns
    /// `Some`, the calendar resolves the field directly and the remaining
    /// methods are never consulted.
    fn chrono_field(&self) -> Option<ChronoField> {
        None
    }

    fn is_supported_by(&self, date: &CopticDate) -> bool;

    fn range_for(&self, date: &CopticDate) -> Result<ValueRange, Error>;

    /// Pull this field's value out of the date.
    fn get_from(&self, date: &CopticDate) -> Result<i64, Error>;

    /// Return a copy of the date with this field set to `value`.
    fn adjust_into(&self, date: &CopticDate, value: i64) -> Result<CopticDate, Error>;
}

impl DateField for ChronoField {
    fn chrono_field(&self) -> Option<ChronoField> {
        Some(*self)
    }

    fn is_supported_by(&self, date: &CopticDate) -> bool {
        date.is_supported(*self)
    }

    fn range_for(&self, date: &CopticDate) -> Result<ValueRange, Error> {
        Ok(date.range(*self))
    }

    fn get_from(&self, date: &CopticDate) -> Result<i64, Error> {
        Ok(date.get(*self))
    }

    fn adjust_into(&self, date: &CopticDate, value: i64) -> Result<CopticDate, Error> {
        date.with(*self, value)
    }
}
