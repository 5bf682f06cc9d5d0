use num_integer::Integer;

use crate::coptic::chronology::{CopticChronology, DAYS_PER_QUADRENNIUM, EPOCH_DAY_DIFFERENCE, MONTHS_PER_YEAR};
use crate::coptic::CopticEra;
use crate::div_rem::RemFloor;
use crate::error::Error;
use crate::field::{ChronoField, DateField, ValueRange};
use crate::period::Period;
use crate::unit::ChronoUnit;

/// A date in the Coptic calendar system.
///
/// An immutable value holding a proleptic year, a month (1-13) and a day.
/// Every mutating operation returns a new date; a constructed date is always
/// one the epoch-day conversion can produce, so an invalid day-for-month
/// combination cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CopticDate {
    proleptic_year: i32,
    month: u8,
    day: u8,
}

impl CopticDate {
    /// Create a date from a proleptic year, month and day-of-month.
    pub fn of(proleptic_year: i32, month: u8, day: u8) -> Result<CopticDate, Error> {
        CopticChronology::range(ChronoField::Year)
            .check_valid(proleptic_year as i64, ChronoField::Year)?;
        CopticChronology::month_range().check_valid(month as i64, ChronoField::MonthOfYear)?;
        let leap = CopticChronology::is_leap_year(proleptic_year as i64);
        CopticChronology::day_of_month_range(month, leap)
            .check_valid(day as i64, ChronoField::DayOfMonth)?;
        Ok(CopticDate {
            proleptic_year,
            month,
            day,
        })
    }

    /// Create a date from an era, year-of-era, month and day-of-month.
    pub fn of_era(
        era: CopticEra,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> Result<CopticDate, Error> {
        CopticChronology::range(ChronoField::YearOfEra)
            .check_valid(year_of_era as i64, ChronoField::YearOfEra)?;
        let proleptic_year = CopticChronology::proleptic_year(era, year_of_era as i64);
        CopticDate::of(proleptic_year as i32, month, day)
    }

    /// Create a date from a proleptic year and a 1-based day-of-year.
    pub fn of_year_day(proleptic_year: i32, day_of_year: u16) -> Result<CopticDate, Error> {
        CopticChronology::range(ChronoField::Year)
            .check_valid(proleptic_year as i64, ChronoField::Year)?;
        let leap = CopticChronology::is_leap_year(proleptic_year as i64);
        ValueRange::of(1, CopticChronology::days_in_year(leap) as i64)
            .check_valid(day_of_year as i64, ChronoField::DayOfYear)?;
        let day_of_year0 = day_of_year - 1;
        Ok(CopticDate {
            proleptic_year,
            month: (day_of_year0 / 30) as u8 + 1,
            day: (day_of_year0 % 30) as u8 + 1,
        })
    }

    /// Decode a date from a day count relative to the ISO epoch 1970-01-01.
    pub fn from_epoch_day(epoch_day: i64) -> Result<CopticDate, Error> {
        CopticChronology::range(ChronoField::EpochDay)
            .check_valid(epoch_day, ChronoField::EpochDay)?;
        let shifted = epoch_day + EPOCH_DAY_DIFFERENCE;
        // Four years are always 1461 days, so one floor division recovers
        // the year; no iteration. The +1463 aligns day 0 with year 1 (days
        // -365..=-1 land in year 0, and so on backwards).
        let (proleptic_year, _) = (4 * shifted + 1463).div_mod_floor(&DAYS_PER_QUADRENNIUM);
        let day_of_year0 = shifted - CopticChronology::year_start_day(proleptic_year);
        // Every month before the 13th has exactly 30 days and day_of_year0
        // never exceeds 365, so plain division recovers month and day.
        Ok(CopticDate {
            proleptic_year: proleptic_year as i32,
            month: (day_of_year0 / 30) as u8 + 1,
            day: (day_of_year0 % 30) as u8 + 1,
        })
    }

    /// The day count relative to the ISO epoch 1970-01-01. Exact inverse of
    /// [`from_epoch_day`](CopticDate::from_epoch_day).
    pub fn to_epoch_day(&self) -> i64 {
        CopticChronology::year_start_day(self.proleptic_year as i64) + self.day_of_year() as i64
            - 1
            - EPOCH_DAY_DIFFERENCE
    }


    pub const fn proleptic_year(&self) -> i32 {
        self.proleptic_year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub fn era(&self) -> CopticEra {
        if self.proleptic_year >= 1 {
            CopticEra::Am
        } else {
            CopticEra::BeforeAm
        }
    }

    pub fn year_of_era(&self) -> i32 {
        if self.proleptic_year >= 1 {
            self.proleptic_year
        } else {
            1 - self.proleptic_year
        }
    }

    pub const fn day_of_year(&self) -> u16 {
        (self.month as u16 - 1) * 30 + self.day as u16
    }

    /// Day of the week, 1 (Monday) to 7 (Sunday).
    pub fn day_of_week(&self) -> u8 {
        ((self.to_epoch_day() + 3).rem_floor(7) + 1) as u8
    }

    pub fn is_leap_year(&self) -> bool {
        CopticChronology::is_leap_year(self.proleptic_year as i64)
    }

    pub fn length_of_month(&self) -> u8 {
        CopticChronology::days_in_month(self.month, self.is_leap_year())
    }

    pub fn length_of_year(&self) -> u16 {
        CopticChronology::days_in_year(self.is_leap_year())
    }


    /// Every [`ChronoField`] is a date field, so the closed set is fully
    /// supported. Unsupported fields only arise through [`DateField`]
    /// implementations outside this crate.
    pub fn is_supported(&self, _field: ChronoField) -> bool {
        true
    }

    /// The valid range of a field for this particular date.
    pub fn range(&self, field: ChronoField) -> ValueRange {
        match field {
            ChronoField::DayOfMonth => ValueRange::of(1, self.length_of_month() as i64),
            ChronoField::DayOfYear => ValueRange::of(1, self.length_of_year() as i64),
            ChronoField::AlignedWeekOfMonth => {
                ValueRange::of(1, if self.month == 13 { 1 } else { 5 })
            }
            ChronoField::YearOfEra => {
                let chrono = CopticChronology::range(ChronoField::YearOfEra);
                if self.proleptic_year < 1 {
                    ValueRange::of(1, chrono.max())
                } else {
                    ValueRange::of(1, chrono.smallest_max())
                }
            }
            _ => CopticChronology::range(field),
        }
    }

    /// Read a field's value from this date.
    pub fn get(&self, field: ChronoField) -> i64 {
        match field {
            ChronoField::DayOfWeek => self.day_of_week() as i64,
            ChronoField::AlignedDayOfWeekInMonth => ((self.day as i64 - 1) % 7) + 1,
            ChronoField::AlignedDayOfWeekInYear => ((self.day_of_year() as i64 - 1) % 7) + 1,
            ChronoField::DayOfMonth => self.day as i64,
            ChronoField::DayOfYear => self.day_of_year() as i64,
            ChronoField::EpochDay => self.to_epoch_day(),
            ChronoField::AlignedWeekOfMonth => ((self.day as i64 - 1) / 7) + 1,
            ChronoField::AlignedWeekOfYear => ((self.day_of_year() as i64 - 1) / 7) + 1,
            ChronoField::MonthOfYear => self.month as i64,
            ChronoField::YearOfEra => self.year_of_era() as i64,
            ChronoField::Year => self.proleptic_year as i64,
            ChronoField::Era => self.era().value() as i64,
        }
    }

    /// Return a copy of this date with the field set to `value`.
    ///
    /// The value is validated against the calendar-wide range of the field.
    /// Year, month, era and epoch-day changes replace the primitive
    /// directly; the day is clamped to the new month's length when the 13th
    /// month shrinks under it. Week- and weekday-oriented fields are
    /// re-expressed as a day shift, so the result is consistent by
    /// construction.
    pub fn with(&self, field: ChronoField, value: i64) -> Result<CopticDate, Error> {
        CopticChronology::range(field).check_valid(value, field)?;
        match field {
            ChronoField::DayOfWeek => self.plus_days(value - self.day_of_week() as i64),
            ChronoField::AlignedDayOfWeekInMonth => {
                self.plus_days(value - self.get(ChronoField::AlignedDayOfWeekInMonth))
            }
            ChronoField::AlignedDayOfWeekInYear => {
                self.plus_days(value - self.get(ChronoField::AlignedDayOfWeekInYear))
            }
            ChronoField::DayOfMonth => {
                Self::resolve_previous_valid(self.proleptic_year as i64, self.month, value as u8)
            }
            ChronoField::DayOfYear => Self::resolve_previous_valid(
                self.proleptic_year as i64,
                ((value - 1) / 30) as u8 + 1,
                ((value - 1) % 30) as u8 + 1,
            ),
            ChronoField::EpochDay => CopticDate::from_epoch_day(value),
            ChronoField::AlignedWeekOfMonth => {
                self.plus_days((value - self.get(ChronoField::AlignedWeekOfMonth)) * 7)
            }
            ChronoField::AlignedWeekOfYear => {
                self.plus_days((value - self.get(ChronoField::AlignedWeekOfYear)) * 7)
            }
            ChronoField::MonthOfYear => {
                Self::resolve_previous_valid(self.proleptic_year as i64, value as u8, self.day)
            }
            ChronoField::YearOfEra => Self::resolve_previous_valid(
                if self.proleptic_year >= 1 {
                    value
                } else {
                    1 - value
                },
                self.month,
                self.day,
            ),
            ChronoField::Year => Self::resolve_previous_valid(value, self.month, self.day),
            ChronoField::Era => {
                if value == self.era().value() as i64 {
                    Ok(*self)
                } else {
                    Self::resolve_previous_valid(
                        1 - self.proleptic_year as i64,
                        self.month,
                        self.day,
                    )
                }
            }
        }
    }

    /// Read a field through the open protocol: well-known tags resolve
    /// directly, anything else is asked to resolve itself.
    pub fn get_field<F: DateField + ?Sized>(&self, field: &F) -> Result<i64, Error> {
        match field.chrono_field() {
            Some(chrono) => Ok(self.get(chrono)),
            None => field.get_from(self),
        }
    }

    /// Write a field through the open protocol.
    pub fn with_field<F: DateField + ?Sized>(
        &self,
        field: &F,
        value: i64,
    ) -> Result<CopticDate, Error> {
        match field.chrono_field() {
            Some(chrono) => self.with(chrono, value),
            None => field.adjust_into(self, value),
        }
    }

    /// Query a field's range through the open protocol.
    pub fn range_field<F: DateField + ?Sized>(&self, field: &F) -> Result<ValueRange, Error> {
        match field.chrono_field() {
            Some(chrono) => Ok(self.range(chrono)),
            None => field.range_for(self),
        }
    }

    /// Pluggable extraction hook: hand the date to the query and return
    /// whatever it extracts, or `None` when the query does not apply.
    pub fn query<R>(&self, query: impl FnOnce(&CopticDate) -> Option<R>) -> Option<R> {
        query(self)
    }

    /// Push this date into `target`, i.e. return `target` moved to the same
    /// epoch day. The symmetric counterpart of `with`.
    pub fn adjust_into(&self, target: &CopticDate) -> Result<CopticDate, Error> {
        target.with(ChronoField::EpochDay, self.to_epoch_day())
    }


    /// Add an amount of the given unit, failing on overflow or when the
    /// result leaves the supported year range.
    pub fn plus(&self, amount: i64, unit: ChronoUnit) -> Result<CopticDate, Error> {
        match unit {
            ChronoUnit::Days => self.plus_days(amount),
            ChronoUnit::Weeks => self.plus_days(checked_mul(amount, 7)?),
            ChronoUnit::Months => self.plus_months(amount),
            ChronoUnit::Years => self.plus_months(checked_mul(amount, MONTHS_PER_YEAR)?),
            ChronoUnit::Decades => self.plus_months(checked_mul(amount, 10 * MONTHS_PER_YEAR)?),
            ChronoUnit::Centuries => self.plus_months(checked_mul(amount, 100 * MONTHS_PER_YEAR)?),
            ChronoUnit::Millennia => {
                self.plus_months(checked_mul(amount, 1000 * MONTHS_PER_YEAR)?)
            }
        }
    }

    /// Subtract an amount of the given unit.
    pub fn minus(&self, amount: i64, unit: ChronoUnit) -> Result<CopticDate, Error> {
        self.plus(amount.checked_neg().ok_or(Error::ArithmeticOverflow)?, unit)
    }

    fn plus_days(&self, days: i64) -> Result<CopticDate, Error> {
        if days == 0 {
            return Ok(*self);
        }
        let epoch_day = self
            .to_epoch_day()
            .checked_add(days)
            .ok_or(Error::ArithmeticOverflow)?;
        CopticDate::from_epoch_day(epoch_day)
    }

    fn plus_months(&self, months: i64) -> Result<CopticDate, Error> {
        if months == 0 {
            return Ok(*self);
        }
        // A single month index absorbs the year carry: no cascading borrow
        // logic, one floor division brings it back apart.
        let month_index = self
            .proleptic_month()
            .checked_add(months)
            .ok_or(Error::ArithmeticOverflow)?;
        let (year, month0) = month_index.div_mod_floor(&MONTHS_PER_YEAR);
        Self::resolve_previous_valid(year, month0 as u8 + 1, self.day)
    }

    /// Clamp the day when the 13th month shrinks under it; the only month
    /// whose length varies. Deliberate policy: a year or month change never
    /// fails on the day and never rolls into the next month.
    fn resolve_previous_valid(
        proleptic_year: i64,
        month: u8,
        day: u8,
    ) -> Result<CopticDate, Error> {
        CopticChronology::range(ChronoField::Year).check_valid(proleptic_year, ChronoField::Year)?;
        let day = if month == 13 && day > 5 {
            if CopticChronology::is_leap_year(proleptic_year) {
                6
            } else {
                5
            }
        } else {
            day
        };
        Ok(CopticDate {
            proleptic_year: proleptic_year as i32,
            month,
            day,
        })
    }

    fn proleptic_month(&self) -> i64 {
        self.proleptic_year as i64 * MONTHS_PER_YEAR + (self.month as i64 - 1)
    }


    /// Whole units between this date and `end`, truncated toward zero.
    /// Negative when `end` is earlier.
    pub fn until(&self, end: &CopticDate, unit: ChronoUnit) -> i64 {
        match unit {
            ChronoUnit::Days => end.to_epoch_day() - self.to_epoch_day(),
            ChronoUnit::Weeks => (end.to_epoch_day() - self.to_epoch_day()) / 7,
            ChronoUnit::Months => self.months_until(end),
            ChronoUnit::Years => self.months_until(end) / MONTHS_PER_YEAR,
            ChronoUnit::Decades => self.months_until(end) / (10 * MONTHS_PER_YEAR),
            ChronoUnit::Centuries => self.months_until(end) / (100 * MONTHS_PER_YEAR),
            ChronoUnit::Millennia => self.months_until(end) / (1000 * MONTHS_PER_YEAR),
        }
    }

    fn months_until(&self, end: &CopticDate) -> i64 {
        // Pack month index and day together (32 > any day value) so the
        // division truncates partial months in either direction.
        let packed1 = self.proleptic_month() * 32 + self.day as i64;
        let packed2 = end.proleptic_month() * 32 + end.day as i64;
        (packed2 - packed1) / 32
    }

    /// The period from this date until `end` as Coptic years, months and
    /// days. All three components share the sign of the difference;
    /// `start.plus` of the components in order reproduces `end`.
    pub fn period_until(&self, end: &CopticDate) -> Period {
        let mut total_months = end.proleptic_month() - self.proleptic_month();
        let mut days = end.day as i64 - self.day as i64;
        if total_months > 0 && days < 0 {
            total_months -= 1;
            let calc = self
                .plus_months(total_months)
                .expect("intermediate date lies between two valid dates");
            days = end.to_epoch_day() - calc.to_epoch_day();
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= end.length_of_month() as i64;
        }
        let years = total_months / MONTHS_PER_YEAR;
        let months = total_months % MONTHS_PER_YEAR;
        Period::new(years as i32, months as i32, days as i32)
    }
}

fn checked_mul(amount: i64, factor: i64) -> Result<i64, Error> {
    amount.checked_mul(factor).ok_or(Error::ArithmeticOverflow)
}
